//! Tokens emitted by the scanner.
//!
//! A [`Token`] borrows the scanner's buffers and lives until the next call to
//! [`Scanner::next_token`](crate::Scanner::next_token). Use
//! [`Token::into_owned`] to keep one around.

use alloc::borrow::ToOwned;

use bstr::{BStr, BString, ByteSlice};

/// Opening marker of a header line.
pub(crate) const HEADER_OPEN: &[u8] = b"-- ";
/// Closing marker of a header line.
pub(crate) const HEADER_CLOSE: &[u8] = b" --";

/// One unit of the token stream.
///
/// Headers and content strictly alternate after the first header: two
/// `Content` tokens never appear back to back, and every `Header` is followed
/// by a `Content` holding its body, even when that body is empty.
///
/// # Examples
///
/// ```
/// use taffy::{Scanner, Token};
///
/// let mut scanner = Scanner::new(&b"-- notes --\n\tremember the milk\n"[..]);
/// let token = scanner.next_token().unwrap();
/// assert!(token.is_header());
/// assert_eq!(token.title(), Some("notes".into()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A section header, carrying the text between `-- ` and ` --`.
    Header(&'a BStr),
    /// A chunk of content. Either a section body or, before any header, the
    /// leading comment. May be empty.
    Content(&'a BStr),
}

impl<'a> Token<'a> {
    /// Returns `true` for [`Token::Header`].
    #[must_use]
    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header(_))
    }

    /// Returns `true` for [`Token::Content`].
    #[must_use]
    pub fn is_content(&self) -> bool {
        matches!(self, Self::Content(_))
    }

    /// The header title, if this is a header.
    #[must_use]
    pub fn title(&self) -> Option<&'a BStr> {
        match *self {
            Self::Header(title) => Some(title),
            Self::Content(_) => None,
        }
    }

    /// The content bytes, if this is content.
    #[must_use]
    pub fn content(&self) -> Option<&'a BStr> {
        match *self {
            Self::Header(_) => None,
            Self::Content(bytes) => Some(bytes),
        }
    }

    /// Copies the token out of the scanner's buffers.
    #[must_use]
    pub fn into_owned(self) -> OwnedToken {
        match self {
            Self::Header(title) => OwnedToken::Header(title.to_owned()),
            Self::Content(bytes) => OwnedToken::Content(bytes.to_owned()),
        }
    }
}

/// A [`Token`] that owns its bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub enum OwnedToken {
    /// See [`Token::Header`].
    Header(BString),
    /// See [`Token::Content`].
    Content(BString),
}

impl OwnedToken {
    /// Borrows this token as a [`Token`].
    #[must_use]
    pub fn as_token(&self) -> Token<'_> {
        match self {
            Self::Header(title) => Token::Header(title.as_bstr()),
            Self::Content(bytes) => Token::Content(bytes.as_bstr()),
        }
    }
}

impl From<Token<'_>> for OwnedToken {
    fn from(token: Token<'_>) -> Self {
        token.into_owned()
    }
}

/// Tests one line (without its linebreak) against the header grammar and
/// returns the title if it is a header.
///
/// A header is at least six bytes, starts with `-- ` and ends with ` --`.
/// The title is everything in between, whitespace included, and may be empty.
///
/// ```
/// use taffy::header_title;
///
/// assert_eq!(header_title(b"-- a b --"), Some("a b".into()));
/// assert_eq!(header_title(b"--  --"), Some("".into()));
/// assert_eq!(header_title(b"-- --"), None);
/// assert_eq!(header_title(b"- not a header -"), None);
/// ```
#[must_use]
pub fn header_title(line: &[u8]) -> Option<&BStr> {
    if line.len() < HEADER_OPEN.len() + HEADER_CLOSE.len()
        || !line.starts_with(HEADER_OPEN)
        || !line.ends_with(HEADER_CLOSE)
    {
        return None;
    }
    Some(line[HEADER_OPEN.len()..line.len() - HEADER_CLOSE.len()].as_bstr())
}
