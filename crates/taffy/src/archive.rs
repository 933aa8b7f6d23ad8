//! Folding the token stream into sections.

use alloc::{borrow::ToOwned, vec::Vec};

use bstr::{BStr, BString, ByteSlice};

use crate::{ByteSource, IndexError, IndexOptions, IndexedArchive, ScanError, Scanner, Token};

/// One titled hunk of an [`Archive`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    /// Text between `-- ` and ` --` on the header line.
    pub title: BString,
    /// Body bytes, without the linebreak that precedes the next header.
    pub body: BString,
}

impl Section {
    /// Creates a section.
    pub fn new(title: impl Into<BString>, body: impl Into<BString>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A parsed taffy file: its sections in order, and the leading comment if
/// there was one.
///
/// # Examples
///
/// ```
/// use taffy::{Archive, Section};
///
/// let archive = Archive::parse(b"about this file\n-- a --\n\tone\n-- b --\n\ttwo\n");
/// assert!(!archive.is_canonical());
/// assert_eq!(archive.comment(), Some("about this file".into()));
/// assert_eq!(
///     archive.sections(),
///     [Section::new("a", "one"), Section::new("b", "two\n")]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub struct Archive {
    comment: Option<BString>,
    sections: Vec<Section>,
}

impl Archive {
    /// Creates an archive from its parts.
    #[must_use]
    pub fn new(comment: Option<BString>, sections: Vec<Section>) -> Self {
        Self { comment, sections }
    }

    /// Parses an in-memory taffy file.
    #[must_use]
    pub fn parse(bytes: &[u8]) -> Self {
        match Self::from_source(bytes) {
            Ok(archive) => archive,
            Err(never) => match never {},
        }
    }

    /// Scans `source` to the end and assembles the result.
    ///
    /// # Errors
    ///
    /// Returns the source's error if a read fails.
    pub fn from_source<S: ByteSource>(source: S) -> Result<Self, S::Error> {
        Self::from_scanner(&mut Scanner::new(source))
    }

    /// Reads a taffy file from `reader`.
    ///
    /// The reader is read one byte at a time; pass a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns any I/O error other than [`std::io::ErrorKind::Interrupted`].
    #[cfg(feature = "std")]
    pub fn from_reader<R: std::io::Read>(reader: R) -> std::io::Result<Self> {
        Self::from_source(crate::ReadSource::new(reader))
    }

    /// Drains `scanner` and assembles its tokens.
    ///
    /// Content before the first header becomes the leading comment. Each
    /// header is paired with the content token that follows it.
    ///
    /// # Errors
    ///
    /// Returns the source's error if a read fails. Sections completed before
    /// the failure are discarded.
    pub fn from_scanner<S: ByteSource>(scanner: &mut Scanner<S>) -> Result<Self, S::Error> {
        let mut archive = Self::default();
        let mut open: Option<BString> = None;
        loop {
            match scanner.next_token() {
                Ok(Token::Header(title)) => {
                    if let Some(unclosed) = open.replace(title.to_owned()) {
                        archive.sections.push(Section::new(unclosed, BString::default()));
                    }
                }
                Ok(Token::Content(bytes)) => match open.take() {
                    Some(title) => archive.sections.push(Section::new(title, bytes)),
                    None => archive.comment = Some(bytes.to_owned()),
                },
                Err(ScanError::EndOfInput) => break,
                Err(ScanError::Source(err)) => return Err(err),
            }
        }
        if let Some(unclosed) = open {
            archive.sections.push(Section::new(unclosed, BString::default()));
        }
        Ok(archive)
    }

    /// The leading comment, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&BStr> {
        self.comment.as_ref().map(|c| c.as_bstr())
    }

    /// `true` if the file has no leading comment.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.comment.is_none()
    }

    /// Sections in file order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// `true` if there are no sections. A leading comment alone still counts
    /// as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterates over the sections in file order.
    pub fn iter(&self) -> core::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Takes the sections, dropping the comment.
    #[must_use]
    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }

    /// Builds a title index over this archive.
    ///
    /// # Errors
    ///
    /// See [`IndexedArchive::new`].
    pub fn into_indexed(self, options: IndexOptions) -> Result<IndexedArchive, IndexError> {
        IndexedArchive::new(self, options)
    }
}

impl<'a> IntoIterator for &'a Archive {
    type Item = &'a Section;
    type IntoIter = core::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<&[u8]> for Archive {
    fn from(bytes: &[u8]) -> Self {
        Self::parse(bytes)
    }
}
