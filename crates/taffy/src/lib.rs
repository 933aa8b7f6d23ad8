//! A streaming, incremental scanner for the taffy archive text format.
//!
//! A taffy file is a sequence of sections. Each section starts with a header
//! line of the form `-- <title> --` and is followed by raw body bytes:
//!
//! ```text
//! -- greeting --
//! 	hello
//! -- farewell --
//! 	goodbye
//! ```
//!
//! [`Scanner`] turns a byte stream into an alternating sequence of
//! [`Token::Header`] and [`Token::Content`] tokens, one per call, reading a
//! single byte at a time. [`Archive`] folds that stream into sections, and
//! [`IndexedArchive`] adds lookup by title.
//!
//! ```
//! use taffy::{Archive, Scanner, ScanError, Token};
//!
//! let mut scanner = Scanner::new(&b"-- greeting --\n\thello\n-- farewell --\n"[..]);
//! assert_eq!(scanner.next_token(), Ok(Token::Header("greeting".into())));
//! assert_eq!(scanner.next_token(), Ok(Token::Content("hello".into())));
//! assert_eq!(scanner.next_token(), Ok(Token::Header("farewell".into())));
//! assert_eq!(scanner.next_token(), Ok(Token::Content("".into())));
//! assert_eq!(scanner.next_token(), Err(ScanError::EndOfInput));
//!
//! let archive = Archive::parse(b"-- greeting --\n\thello\n");
//! assert!(archive.is_canonical());
//! assert_eq!(archive.sections()[0].body, "hello\n");
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod macros;

mod archive;
mod error;
mod indexed;
mod options;
mod scanner;
mod source;
mod token;

#[cfg(test)]
mod tests;

pub use archive::{Archive, Section};
pub use error::{IndexError, ScanError};
pub use indexed::IndexedArchive;
pub use options::{DuplicateTitles, IndexOptions};
pub use scanner::Scanner;
#[cfg(feature = "std")]
pub use source::ReadSource;
pub use source::ByteSource;
pub use token::{OwnedToken, Token, header_title};
