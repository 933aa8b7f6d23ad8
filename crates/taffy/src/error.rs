use bstr::BString;
use thiserror::Error;

/// The terminal failure reported by [`Scanner::next_token`].
///
/// The scanner reports it exactly once, one call after the read that hit it,
/// so content accumulated before the failure is always delivered first.
///
/// [`Scanner::next_token`]: crate::Scanner::next_token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError<E> {
    /// The byte source ran out of data. This is how every well-formed stream
    /// ends.
    #[error("end of input")]
    EndOfInput,
    /// The byte source failed.
    #[error("byte source error: {0}")]
    Source(E),
}

impl<E> ScanError<E> {
    /// Returns `true` if this is the ordinary end of the stream.
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }

    /// Returns the source's error, or `None` at end of input.
    #[must_use]
    pub fn into_source(self) -> Option<E> {
        match self {
            Self::EndOfInput => None,
            Self::Source(err) => Some(err),
        }
    }
}

/// Errors raised while building an [`IndexedArchive`].
///
/// [`IndexedArchive`]: crate::IndexedArchive
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Two sections share a title and the policy is
    /// [`DuplicateTitles::Reject`](crate::DuplicateTitles::Reject).
    #[error("duplicate section title {title:?} at sections {first} and {duplicate}")]
    DuplicateTitle {
        /// The shared title.
        title: BString,
        /// Position of the first section with this title.
        first: usize,
        /// Position of the section that repeated it.
        duplicate: usize,
    },
}
