//! Title lookup over an archive.

use alloc::collections::{BTreeMap, btree_map::Entry};

use bstr::{BStr, BString, ByteSlice};

use crate::{Archive, DuplicateTitles, IndexError, IndexOptions, Section};

/// An [`Archive`] with its sections indexed by title.
///
/// Every section stays in [`archive`](Self::archive) in file order; the
/// index only decides which one a lookup by title returns.
///
/// ```
/// use taffy::{Archive, IndexOptions};
///
/// let indexed = Archive::parse(b"-- a --\n\tone\n-- b --\n\ttwo\n")
///     .into_indexed(IndexOptions::default())
///     .unwrap();
/// assert_eq!(indexed.get("a").unwrap().body, "one");
/// assert!(indexed.get("c").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedArchive {
    archive: Archive,
    index: BTreeMap<BString, usize>,
}

impl IndexedArchive {
    /// Indexes `archive` in one pass over its sections.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::DuplicateTitle`] when a title repeats and
    /// `options.duplicate_titles` is [`DuplicateTitles::Reject`].
    pub fn new(archive: Archive, options: IndexOptions) -> Result<Self, IndexError> {
        let mut index = BTreeMap::new();
        for (position, section) in archive.iter().enumerate() {
            match index.entry(section.title.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
                Entry::Occupied(mut slot) => match options.duplicate_titles {
                    DuplicateTitles::Reject => {
                        return Err(IndexError::DuplicateTitle {
                            title: section.title.clone(),
                            first: *slot.get(),
                            duplicate: position,
                        });
                    }
                    DuplicateTitles::FirstWins => {}
                    DuplicateTitles::LastWins => {
                        slot.insert(position);
                    }
                },
            }
        }
        Ok(Self { archive, index })
    }

    /// Looks up a section by title.
    pub fn get(&self, title: impl AsRef<[u8]>) -> Option<&Section> {
        self.position(title).map(|position| &self.archive.sections()[position])
    }

    /// `true` if some section has this title.
    pub fn contains(&self, title: impl AsRef<[u8]>) -> bool {
        self.position(title).is_some()
    }

    /// Position in [`archive`](Self::archive)'s sections of the section a
    /// lookup by `title` returns.
    pub fn position(&self, title: impl AsRef<[u8]>) -> Option<usize> {
        self.index.get(title.as_ref().as_bstr()).copied()
    }

    /// Indexed titles, in byte order. Each title appears once.
    pub fn titles(&self) -> impl Iterator<Item = &BStr> {
        self.index.keys().map(|title| title.as_bstr())
    }

    /// The underlying archive.
    #[must_use]
    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    /// Drops the index.
    #[must_use]
    pub fn into_archive(self) -> Archive {
        self.archive
    }
}

impl TryFrom<Archive> for IndexedArchive {
    type Error = IndexError;

    fn try_from(archive: Archive) -> Result<Self, Self::Error> {
        Self::new(archive, IndexOptions::default())
    }
}
