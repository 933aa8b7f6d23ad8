//! Byte sources the scanner reads from.

use core::convert::Infallible;

/// A sequential supply of bytes, read one at a time.
///
/// This is the scanner's only suspension point and its only failure point.
/// A read yields one of three explicit outcomes:
///
/// - `Ok(Some(byte))`: the next byte.
/// - `Ok(None)`: the source is exhausted.
/// - `Err(err)`: the source failed.
///
/// Blocking, timeouts and cancellation are the source's business; the
/// scanner simply waits on `read_byte`.
pub trait ByteSource {
    /// The error a failed read reports.
    type Error;

    /// Reads the next byte.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying supply failed.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

impl ByteSource for &[u8] {
    type Error = Infallible;

    #[inline]
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let Some((&byte, rest)) = self.split_first() else {
            return Ok(None);
        };
        *self = rest;
        Ok(Some(byte))
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    #[inline]
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        (**self).read_byte()
    }
}

#[cfg(feature = "std")]
pub use read::ReadSource;

#[cfg(feature = "std")]
mod read {
    use std::io::{self, ErrorKind, Read};

    use super::ByteSource;

    /// Adapts any [`io::Read`] into a [`ByteSource`].
    ///
    /// Each call reads a single byte. Wrap unbuffered readers (files,
    /// sockets) in an [`io::BufReader`] to avoid one syscall per byte.
    ///
    /// A read of zero bytes is end of input. [`ErrorKind::Interrupted`] is
    /// retried; any other error is handed to the scanner.
    ///
    /// ```
    /// use std::io::BufReader;
    /// use taffy::{ReadSource, Scanner, Token};
    ///
    /// let input = BufReader::new(&b"-- a --\n\tbody\n"[..]);
    /// let mut scanner = Scanner::new(ReadSource::new(input));
    /// assert_eq!(scanner.next_token().unwrap(), Token::Header("a".into()));
    /// ```
    #[derive(Debug)]
    pub struct ReadSource<R> {
        inner: R,
    }

    impl<R: Read> ReadSource<R> {
        /// Wraps a reader.
        pub fn new(inner: R) -> Self {
            Self { inner }
        }

        /// Borrows the wrapped reader.
        pub fn get_ref(&self) -> &R {
            &self.inner
        }

        /// Mutably borrows the wrapped reader.
        pub fn get_mut(&mut self) -> &mut R {
            &mut self.inner
        }

        /// Unwraps the reader.
        pub fn into_inner(self) -> R {
            self.inner
        }
    }

    impl<R: Read> ByteSource for ReadSource<R> {
        type Error = io::Error;

        fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
            let mut one = [0u8; 1];
            loop {
                match self.inner.read(&mut one) {
                    Ok(0) => return Ok(None),
                    Ok(_) => return Ok(Some(one[0])),
                    Err(err) if err.kind() == ErrorKind::Interrupted => {}
                    Err(err) => return Err(err),
                }
            }
        }
    }
}
