//! Best-effort encoding identification.
//!
//! A byte-order marker wins outright. Without one, the first two characters
//! are assumed to be ASCII (`0x01..=0x7F`) and the zero padding around them
//! picks the unit width and byte order. Anything else is [`UtfType::Other`].
//! This is a guess; validate the buffer with the chosen handler when the
//! answer matters.

use tracing::trace;

use crate::codec::{
    utf8::UTF8_BOM,
    utf16::{UTF16BE_BOM, UTF16LE_BOM},
    utf32::{UTF32BE_BOM, UTF32LE_BOM},
};

/// The Unicode transformation formats [`identify`] can recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum UtfType {
    /// UTF-8.
    Utf8,
    /// UTF-16, little-endian.
    Utf16Le,
    /// UTF-16, big-endian.
    Utf16Be,
    /// UTF-32, little-endian.
    Utf32Le,
    /// UTF-32, big-endian.
    Utf32Be,
    /// Not recognised, or not a UTF.
    Other,
}

/// Result of [`identify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Identified {
    /// The guessed encoding.
    pub utf_type: UtfType,
    /// Length of the byte-order marker at the start of the buffer (0 if none).
    pub bom_bytes: usize,
}

impl Identified {
    const fn bom(utf_type: UtfType, bom_bytes: usize) -> Self {
        Self {
            utf_type,
            bom_bytes,
        }
    }

    const fn guess(utf_type: UtfType) -> Self {
        Self::bom(utf_type, 0)
    }
}

#[inline]
const fn is_ascii_char(byte: u8) -> bool {
    byte >= 0x01 && byte <= 0x7F
}

/// Guesses the encoding of `buffer` from a byte-order marker or from the zero
/// padding around two leading ASCII characters.
///
/// Four-byte markers are tested before the three-byte UTF-8 marker, which is
/// tested before the two-byte UTF-16 markers, so `FF FE 00 00` is UTF-32LE.
#[must_use]
pub fn identify(buffer: &[u8]) -> Identified {
    let identified = identify_bom(buffer).unwrap_or_else(|| identify_ascii_pair(buffer));
    trace!(
        utf_type = ?identified.utf_type,
        bom_bytes = identified.bom_bytes,
        len = buffer.len(),
        "identified encoding"
    );
    identified
}

fn identify_bom(buffer: &[u8]) -> Option<Identified> {
    if buffer.starts_with(&UTF32LE_BOM) {
        Some(Identified::bom(UtfType::Utf32Le, 4))
    } else if buffer.starts_with(&UTF32BE_BOM) {
        Some(Identified::bom(UtfType::Utf32Be, 4))
    } else if buffer.starts_with(&UTF8_BOM) {
        Some(Identified::bom(UtfType::Utf8, 3))
    } else if buffer.starts_with(&UTF16LE_BOM) {
        Some(Identified::bom(UtfType::Utf16Le, 2))
    } else if buffer.starts_with(&UTF16BE_BOM) {
        Some(Identified::bom(UtfType::Utf16Be, 2))
    } else {
        None
    }
}

fn identify_ascii_pair(b: &[u8]) -> Identified {
    if b.len() >= 8 && b[1] == 0 && b[2] == 0 && b[5] == 0 && b[6] == 0 {
        if b[3] == 0 && b[7] == 0 && is_ascii_char(b[0]) && is_ascii_char(b[4]) {
            return Identified::guess(UtfType::Utf32Le);
        }
        if b[0] == 0 && b[4] == 0 && is_ascii_char(b[3]) && is_ascii_char(b[7]) {
            return Identified::guess(UtfType::Utf32Be);
        }
    }
    if b.len() >= 4 {
        if b[1] == 0 && b[3] == 0 && is_ascii_char(b[0]) && is_ascii_char(b[2]) {
            return Identified::guess(UtfType::Utf16Le);
        }
        if b[0] == 0 && b[2] == 0 && is_ascii_char(b[1]) && is_ascii_char(b[3]) {
            return Identified::guess(UtfType::Utf16Be);
        }
    }
    if b.len() >= 2 && is_ascii_char(b[0]) && is_ascii_char(b[1]) {
        return Identified::guess(UtfType::Utf8);
    }
    Identified::guess(UtfType::Other)
}
