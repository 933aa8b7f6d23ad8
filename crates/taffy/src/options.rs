/// Configuration for building an [`IndexedArchive`](crate::IndexedArchive).
///
/// # Examples
///
/// ```rust
/// use taffy::{Archive, DuplicateTitles, IndexOptions};
///
/// let archive = Archive::parse(b"-- a --\n\tfirst\n-- a --\n\tsecond\n");
/// let indexed = archive
///     .into_indexed(IndexOptions {
///         duplicate_titles: DuplicateTitles::LastWins,
///     })
///     .unwrap();
/// assert_eq!(indexed.get("a").unwrap().body, "second\n");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub struct IndexOptions {
    /// What to do when two sections share a title.
    ///
    /// The format itself does not forbid duplicates; this only decides which
    /// section a lookup by title finds.
    ///
    /// # Default
    ///
    /// [`DuplicateTitles::Reject`]
    pub duplicate_titles: DuplicateTitles,
}

/// Policy for sections that repeat an earlier title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub enum DuplicateTitles {
    /// Fail with [`IndexError::DuplicateTitle`](crate::IndexError::DuplicateTitle).
    #[default]
    Reject,
    /// Lookups find the earliest section with the title.
    FirstWins,
    /// Lookups find the latest section with the title.
    LastWins,
}
