use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::{arbitrary::TaffyDoc, drain, quickcheck_tests};
use crate::{Archive, OwnedToken, ScanError};

/// Property: headers and content alternate. No two `Content` tokens are
/// adjacent, every `Header` is followed by a `Content`, and the stream always
/// ends in `EndOfInput`.
#[test]
fn tokens_alternate_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(doc: TaffyDoc) -> bool {
        let (tokens, end) = drain(doc.0.as_slice());
        if end != ScanError::EndOfInput || tokens.is_empty() {
            return false;
        }
        let pairs_ok = tokens.windows(2).all(|pair| match pair {
            [OwnedToken::Content(_), OwnedToken::Content(_)]
            | [OwnedToken::Header(_), OwnedToken::Header(_)] => false,
            _ => true,
        });
        pairs_ok && matches!(tokens.last(), Some(OwnedToken::Content(_)))
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(TaffyDoc) -> bool);
}

/// Property: arbitrary bytes, not just grammar-shaped ones, keep the
/// alternation.
#[test]
fn raw_bytes_alternate_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let (tokens, _) = drain(bytes.as_slice());
        tokens
            .windows(2)
            .all(|pair| pair[0].as_token().is_header() != pair[1].as_token().is_header())
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: scanning the same bytes twice yields the same tokens.
#[test]
fn rescan_is_identical_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(doc: TaffyDoc) -> bool {
        drain(doc.0.as_slice()) == drain(doc.0.as_slice())
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(TaffyDoc) -> bool);
}

/// Property: the archive has one section per header token, and a comment iff
/// the first token is content.
#[test]
fn archive_matches_token_stream_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(doc: TaffyDoc) -> bool {
        let (tokens, _) = drain(doc.0.as_slice());
        let archive = Archive::parse(&doc.0);
        let headers: Vec<Vec<u8>> = tokens
            .iter()
            .filter_map(|token| token.as_token().title())
            .map(|title| title.to_vec())
            .collect();
        let titles: Vec<Vec<u8>> = archive.iter().map(|section| section.title.to_vec()).collect();
        let leading_content = matches!(tokens.first(), Some(OwnedToken::Content(_)));
        headers == titles
            && archive.is_canonical() != leading_content
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(TaffyDoc) -> bool);
}
