mod property_stream;

use alloc::vec::Vec;

use crate::{ByteSource, OwnedToken, ScanError, Scanner};

/// Drains a scanner, returning every token and the terminal failure.
pub(crate) fn drain<S: ByteSource>(source: S) -> (Vec<OwnedToken>, ScanError<S::Error>) {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        match scanner.next_token() {
            Ok(token) => tokens.push(token.into_owned()),
            Err(err) => return (tokens, err),
        }
    }
}

pub(crate) fn quickcheck_tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}
