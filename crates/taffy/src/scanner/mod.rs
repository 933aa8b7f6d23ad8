//! Scanner: the taffy tokenizer.
//!
//! What it does
//! - Pulls bytes one at a time from a [`ByteSource`] and hands out one
//!   [`Token`] per [`Scanner::next_token`] call: a section header or a chunk of
//!   content.
//! - Classifies every line that starts with `-` by reading it to its linebreak
//!   first. Lines that fail the header test are content, byte for byte.
//! - Strips one leading tab from each content line.
//!
//! Deferred output
//! - The end of a body is only known once the next header line has been read
//!   in full. The call that sees that header returns the body and parks the
//!   title in [`Pending::Title`]; the next call returns the header without
//!   reading anything.
//! - The same goes for the end of the stream: the call that hits it returns
//!   whatever content was accumulated (possibly nothing) and parks the failure.
//!   The failure is reported by the following call, exactly once. After that
//!   the scanner is fused and keeps returning [`ScanError::EndOfInput`].
//!
//! Invariants
//! - Two `Content` tokens are never returned back to back.
//! - Every `Header` is followed by a `Content` for its body, possibly empty.
//! - The linebreak immediately before a header line belongs to the header,
//!   not to the body before it. This is what lets a body end without a
//!   trailing linebreak.
//! - A body that begins with a blank line followed by another line keeps two
//!   linebreaks for that first blank line. Without this, a body made only of
//!   blank lines would lose one to the header that follows it.
//!
//! Buffers
//! - `content` accumulates the current chunk and `candidate` the current
//!   possible header line. Both are reused across calls, which is why tokens
//!   borrow the scanner until the next call.

use alloc::vec::Vec;
use core::{fmt, mem};

use bstr::{BStr, ByteSlice};

use crate::{ByteSource, ScanError, Token, header_title};


/// Output parked by one call for the next.
enum Pending<E> {
    Nothing,
    /// A header ended the previous body; its line is still in `candidate`.
    Title,
    Failure(ScanError<E>),
    /// The terminal failure has been reported.
    Finished,
}

impl<E> Pending<E> {
    fn name(&self) -> &'static str {
        match self {
            Self::Nothing => "nothing",
            Self::Title => "title",
            Self::Failure(_) => "failure",
            Self::Finished => "finished",
        }
    }
}

/// Position of the read loop within the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    /// Just after a linebreak, or at the very start of the stream.
    Start,
    /// Inside a line that began with `-`.
    Candidate,
    /// Inside a line known to be content.
    Content,
}

/// Incremental tokenizer over a [`ByteSource`].
///
/// The scanner reads a single byte at a time and never reads past the
/// linebreak that ends the line it needs to classify, so it works unchanged
/// over pipes and other slow sources.
///
/// Tokens borrow the scanner's internal buffers, so a token cannot outlive
/// the next call to [`next_token`](Self::next_token). Copy it out with
/// [`Token::into_owned`] when it must be kept.
///
/// # Examples
///
/// ```
/// use taffy::{OwnedToken, Scanner, ScanError};
///
/// let mut scanner = Scanner::new(&b"leading comment\n-- a --\n\tbody\n"[..]);
/// let mut tokens = Vec::new();
/// let end = loop {
///     match scanner.next_token() {
///         Ok(token) => tokens.push(token.into_owned()),
///         Err(err) => break err,
///     }
/// };
/// assert_eq!(
///     tokens,
///     vec![
///         OwnedToken::Content("leading comment".into()),
///         OwnedToken::Header("a".into()),
///         OwnedToken::Content("body\n".into()),
///     ]
/// );
/// assert_eq!(end, ScanError::EndOfInput);
/// ```
pub struct Scanner<S: ByteSource> {
    source: S,
    content: Vec<u8>,
    candidate: Vec<u8>,
    seen_header: bool,
    pending: Pending<S::Error>,
}

impl<S: ByteSource> Scanner<S> {
    /// Creates a scanner positioned at the start of `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            content: Vec::new(),
            candidate: Vec::new(),
            seen_header: false,
            pending: Pending::Nothing,
        }
    }

    /// Borrows the byte source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Mutably borrows the byte source.
    ///
    /// Reading from it directly will desynchronize the scanner.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwraps the byte source. Anything the scanner had buffered or parked
    /// is dropped.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Scans the next token.
    ///
    /// Returns exactly one token per call, or the terminal failure. The token
    /// borrows the scanner and is valid until the next call.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::EndOfInput`] once the source is exhausted and all
    /// content has been delivered, or [`ScanError::Source`] if the source
    /// failed. Either is reported one call after the read that hit it. Every
    /// later call returns [`ScanError::EndOfInput`] without reading.
    pub fn next_token(&mut self) -> Result<Token<'_>, ScanError<S::Error>> {
        match mem::replace(&mut self.pending, Pending::Nothing) {
            Pending::Nothing => {}
            Pending::Title => return Ok(Token::Header(self.title())),
            Pending::Failure(err) => {
                self.pending = Pending::Finished;
                return Err(err);
            }
            Pending::Finished => {
                self.pending = Pending::Finished;
                return Err(ScanError::EndOfInput);
            }
        }

        self.content.clear();
        let mut line = Line::Start;
        loop {
            line = match line {
                Line::Start => {
                    if self.content == b"\n" {
                        self.content.push(b'\n');
                    }
                    let byte = match self.read() {
                        Ok(byte) => byte,
                        Err(err) => return Ok(self.defer(err)),
                    };
                    match byte {
                        // Indentation, not content.
                        b'\t' => Line::Content,
                        b'\n' => {
                            self.content.push(b'\n');
                            Line::Start
                        }
                        b'-' => {
                            self.candidate.clear();
                            self.candidate.push(b'-');
                            Line::Candidate
                        }
                        byte => {
                            self.content.push(byte);
                            Line::Content
                        }
                    }
                }
                Line::Candidate => {
                    let byte = match self.read() {
                        Ok(byte) => byte,
                        Err(err) => {
                            // A header is only a header once its linebreak is seen.
                            self.content.extend_from_slice(&self.candidate);
                            return Ok(self.defer(err));
                        }
                    };
                    if byte != b'\n' {
                        self.candidate.push(byte);
                        Line::Candidate
                    } else if header_title(&self.candidate).is_some() {
                        return Ok(self.header_found());
                    } else {
                        scan_trace!(line = ?self.candidate.as_bstr(), "header candidate is content");
                        self.content.extend_from_slice(&self.candidate);
                        self.content.push(b'\n');
                        Line::Start
                    }
                }
                Line::Content => {
                    let byte = match self.read() {
                        Ok(byte) => byte,
                        Err(err) => return Ok(self.defer(err)),
                    };
                    self.content.push(byte);
                    if byte == b'\n' {
                        Line::Start
                    } else {
                        Line::Content
                    }
                }
            };
        }
    }

    fn read(&mut self) -> Result<u8, ScanError<S::Error>> {
        match self.source.read_byte() {
            Ok(Some(byte)) => Ok(byte),
            Ok(None) => Err(ScanError::EndOfInput),
            Err(err) => Err(ScanError::Source(err)),
        }
    }

    /// Parks `failure` and returns what was accumulated before it.
    fn defer(&mut self, failure: ScanError<S::Error>) -> Token<'_> {
        scan_debug!(
            end_of_input = failure.is_end_of_input(),
            buffered = self.content.len(),
            "source finished"
        );
        self.pending = Pending::Failure(failure);
        Token::Content(self.content.as_bstr())
    }

    /// Called with a complete header line in `candidate`.
    fn header_found(&mut self) -> Token<'_> {
        scan_debug!(title = ?self.title(), "section header");
        if !self.seen_header && self.content.is_empty() {
            self.seen_header = true;
            return Token::Header(self.title());
        }
        self.seen_header = true;
        self.pending = Pending::Title;
        // Drop the linebreak that precedes the header line.
        let end = self.content.len().saturating_sub(1);
        Token::Content(self.content[..end].as_bstr())
    }

    fn title(&self) -> &BStr {
        header_title(&self.candidate).unwrap_or_default()
    }
}

impl<S: ByteSource> fmt::Debug for Scanner<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("content", &self.content.as_bstr())
            .field("candidate", &self.candidate.as_bstr())
            .field("seen_header", &self.seen_header)
            .field("pending", &self.pending.name())
            .finish_non_exhaustive()
    }
}
