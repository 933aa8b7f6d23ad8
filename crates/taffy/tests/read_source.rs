#![allow(missing_docs)]

use std::io::{self, BufReader, Read};

use taffy::{Archive, ReadSource, ScanError, Scanner, Token};

const CANONICAL: &[u8] = include_bytes!("fixtures/taffy.taf");

/// Serves its bytes, then fails with `ConnectionReset`.
struct DroppedConnection<'a>(&'a [u8]);

impl Read for DroppedConnection<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.0.is_empty() {
            return Err(io::ErrorKind::ConnectionReset.into());
        }
        self.0.read(buf)
    }
}

#[test]
fn reader_and_slice_agree() {
    let from_reader = Archive::from_reader(BufReader::new(CANONICAL)).unwrap();
    assert_eq!(from_reader, Archive::parse(CANONICAL));
    assert_eq!(from_reader.len(), 21);
}

#[test]
fn io_error_follows_buffered_content() {
    let mut scanner = Scanner::new(ReadSource::new(DroppedConnection(b"-- a --\nhalf a bo")));
    assert_eq!(scanner.next_token().unwrap(), Token::Header("a".into()));
    assert_eq!(scanner.next_token().unwrap(), Token::Content("half a bo".into()));
    match scanner.next_token() {
        Err(ScanError::Source(err)) => assert_eq!(err.kind(), io::ErrorKind::ConnectionReset),
        other => panic!("expected the source error, got {other:?}"),
    }
    assert!(matches!(scanner.next_token(), Err(ScanError::EndOfInput)));
}

#[test]
fn archive_surfaces_io_errors() {
    let err = Archive::from_reader(DroppedConnection(b"-- a --\nbody\n")).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
}

#[test]
fn reader_can_be_recovered() {
    let mut scanner = Scanner::new(ReadSource::new(&b"-- a --\nrest of stream"[..]));
    assert!(scanner.next_token().unwrap().is_header());
    assert_eq!(*scanner.get_ref().get_ref(), b"rest of stream");

    let mut skipped = [0; 5];
    scanner.get_mut().get_mut().read_exact(&mut skipped).unwrap();
    assert_eq!(&skipped, b"rest ");
    assert_eq!(scanner.next_token().unwrap(), Token::Content("of stream".into()));

    let remaining = scanner.into_inner().into_inner();
    assert!(remaining.is_empty());
}
