//! Newline-normalised decoding and line splitting.
//!
//! `CR`, `LF`, `CR LF` and `LF CR` are each one line break, as are vertical
//! tab, form feed, `NEL`, and the Unicode line and paragraph separators. All of
//! them decode as `LF`.

use tracing::debug;

use crate::{
    codec::{DecodeResult, DecodeResultExt, Decoded},
    encoding::Encoding,
    error::{DecodeError, ScanError},
    text::Text,
    unicode::{CR, CodePoint, LF, NUL},
};

const VT: CodePoint = 0x000B;
const FF: CodePoint = 0x000C;
const NEL: CodePoint = 0x0085;
const LINE_SEPARATOR: CodePoint = 0x2028;
const PARAGRAPH_SEPARATOR: CodePoint = 0x2029;

// CR ^ LF
const PAIRING: CodePoint = 0x0007;

/// What ended a [`Line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum LineEnd {
    /// Any line break.
    Newline,
    /// A U+0000 terminator.
    Nul,
    /// The end of the view, from [`Lines`] only.
    Eof,
}

/// One line of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line's content, terminator excluded, cursor at 0.
    pub text: Text<'a>,
    /// Bytes consumed from the source view, terminator included.
    pub bytes: usize,
    /// What ended the line.
    pub end: LineEnd,
}

impl<'a> Line<'a> {
    /// The line's content.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }
}

impl Encoding {
    /// Decodes the code point at the cursor with line breaks folded to `LF`.
    ///
    /// A `CR LF` or `LF CR` pair is returned as a single `LF` whose width
    /// covers both units.
    ///
    /// # Errors
    ///
    /// As [`Encoding::get_at`].
    pub fn get_nlf(self, text: &Text<'_>) -> DecodeResult {
        let decoded = self.get_at(text)?;
        match decoded.code_point {
            CR | LF => {
                let bytes = match self.get_at(&text.skipped(decoded.bytes)) {
                    Ok(next) if next.code_point == decoded.code_point ^ PAIRING => {
                        decoded.bytes + next.bytes
                    }
                    _ => decoded.bytes,
                };
                Ok(Decoded::new(LF, bytes))
            }
            VT | FF | NEL | LINE_SEPARATOR | PARAGRAPH_SEPARATOR => {
                Ok(Decoded::new(LF, decoded.bytes))
            }
            _ => Ok(decoded),
        }
    }

    /// [`Encoding::get_nlf`], then steps over what it decoded.
    ///
    /// # Errors
    ///
    /// As [`Encoding::get_at`]. The cursor still moves past a malformed unit.
    pub fn read_nlf(self, text: &mut Text<'_>) -> DecodeResult {
        let result = self.get_nlf(text);
        text.offset += result.bytes();
        result
    }

    /// Finds the line starting at the cursor.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Underrun`] if the view ends before a terminator, or
    /// the first malformed unit. Positions are relative to the cursor.
    pub fn get_line<'a>(self, text: &Text<'a>) -> Result<Line<'a>, ScanError> {
        let rest = text.remaining().ok_or(ScanError {
            kind: DecodeError::Underrun,
            position: 0,
        })?;
        let mut scan = Text::new(rest);
        loop {
            let position = scan.offset;
            let decoded = self.get_nlf(&scan).map_err(|kind| {
                if !kind.is_underrun() {
                    debug!(encoding = %self, %kind, position, "line scan failed");
                }
                ScanError { kind, position }
            })?;
            let end = match decoded.code_point {
                LF => LineEnd::Newline,
                NUL => LineEnd::Nul,
                _ => {
                    scan.offset += decoded.bytes;
                    continue;
                }
            };
            return Ok(Line {
                text: Text::new(&rest[..position]),
                bytes: position + decoded.bytes,
                end,
            });
        }
    }

    /// [`Encoding::get_line`], then moves the cursor past the line.
    ///
    /// ```rust
    /// use utfcodec::{Encoding, Text};
    ///
    /// let mut text = Text::new(b"ab\r\ncd\0");
    /// let line = Encoding::Utf8.read_line(&mut text).unwrap();
    /// assert_eq!(line.as_bytes(), b"ab");
    /// assert_eq!(text.offset, 4);
    /// ```
    ///
    /// # Errors
    ///
    /// As [`Encoding::get_line`]. On [`DecodeError::Underrun`] the cursor does
    /// not move, so the read can be retried once more input is available;
    /// on a malformed unit the cursor moves past it.
    pub fn read_line<'a>(self, text: &mut Text<'a>) -> Result<Line<'a>, ScanError> {
        match self.get_line(text) {
            Ok(line) => {
                text.offset += line.bytes;
                Ok(line)
            }
            Err(error) => {
                if !error.kind.is_underrun() {
                    text.offset += error.skip();
                }
                Err(error)
            }
        }
    }

    /// Iterates over the lines from the cursor onward.
    #[must_use]
    pub const fn lines<'a>(self, text: &Text<'a>) -> Lines<'a> {
        Lines {
            encoding: self,
            text: *text,
            done: false,
        }
    }
}

/// Iterator returned by [`Encoding::lines`].
///
/// Yields each terminated line, then whatever follows the last terminator as
/// a [`LineEnd::Eof`] line. A NUL terminator ends iteration. Malformed units
/// are reported and skipped; a truncated final unit is reported as an
/// underrun and ends iteration.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    encoding: Encoding,
    text: Text<'a>,
    done: bool,
}

impl<'a> Lines<'a> {
    /// The view, with its cursor where the next line starts.
    #[must_use]
    pub const fn text(&self) -> &Text<'a> {
        &self.text
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Result<Line<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.text.is_exhausted() {
            return None;
        }
        match self.encoding.read_line(&mut self.text) {
            Ok(line) => {
                self.done = line.end == LineEnd::Nul;
                Some(Ok(line))
            }
            Err(error) if error.kind.is_underrun() => {
                self.done = true;
                let rest = self.text.remaining().unwrap_or_default();
                if error.position < rest.len() {
                    return Some(Err(error));
                }
                self.text.offset += rest.len();
                Some(Ok(Line {
                    text: Text::new(rest),
                    bytes: rest.len(),
                    end: LineEnd::Eof,
                }))
            }
            Err(error) => Some(Err(error)),
        }
    }
}

impl core::iter::FusedIterator for Lines<'_> {}
