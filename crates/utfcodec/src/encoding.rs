//! Runtime-selected handlers.
//!
//! [`Encoding`] is the closed set of handlers. Each variant is a stateless
//! adapter over the primitives in [`codec`](crate::codec); the capability
//! methods below dispatch with an exhaustive `match`, and the cursor, line and
//! measurement operations in the sibling modules are built on top of them so
//! that every handler gets them for free.

use core::fmt;

use crate::{
    codec::{
        DecodeResult, EncodeResult, Endian, byte,
        cp1252::{self, len_cp1252},
        encode_marker, encode_nul,
        utf8::{self, UTF8_BOM},
        utf16::{self, UTF16BE_BOM, UTF16LE_BOM},
        utf32::{self, UTF32BE_BOM, UTF32LE_BOM},
    },
    identify::{UtfType, identify},
    options::HandlerOptions,
    unicode::{CodePoint, len_byte, len_utf8, len_utf16, len_utf32},
};

/// A text encoding handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum Encoding {
    /// Strict UTF-8.
    Utf8,
    /// Java modified UTF-8: U+0000 is written `C0 80`.
    Utf8Java,
    /// UTF-16, little-endian.
    Utf16Le,
    /// UTF-16, big-endian.
    Utf16Be,
    /// UTF-32, little-endian.
    Utf32Le,
    /// UTF-32, big-endian.
    Utf32Be,
    /// ISO-8859-1: every byte is the code point of the same value.
    Byte,
    /// 7-bit ASCII; bytes above `0x7F` are rejected.
    Ascii,
    /// Windows code page 1252 with unassigned bytes rejected.
    Cp1252,
}

/// The non-UTF handlers, plus Java UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum OtherType {
    /// Java modified UTF-8.
    #[default]
    JUtf8,
    /// ISO-8859-1.
    Iso8859_1,
    /// Strict ASCII.
    Ascii,
    /// Windows-1252.
    Cp1252,
}

/// [`Encoding::detect`] output: a handler plus the marker to skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detected {
    /// The selected handler.
    pub encoding: Encoding,
    /// Bytes of byte-order marker at the front of the buffer.
    pub bom_bytes: usize,
}

impl Encoding {
    /// Every handler.
    pub const ALL: [Encoding; 9] = [
        Encoding::Utf8,
        Encoding::Utf8Java,
        Encoding::Utf16Le,
        Encoding::Utf16Be,
        Encoding::Utf32Le,
        Encoding::Utf32Be,
        Encoding::Byte,
        Encoding::Ascii,
        Encoding::Cp1252,
    ];

    /// The handler for a UTF tag. [`UtfType::Other`] selects Java UTF-8.
    #[must_use]
    pub const fn handler(utf_type: UtfType) -> Self {
        match utf_type {
            UtfType::Utf8 => Encoding::Utf8,
            UtfType::Utf16Le => Encoding::Utf16Le,
            UtfType::Utf16Be => Encoding::Utf16Be,
            UtfType::Utf32Le => Encoding::Utf32Le,
            UtfType::Utf32Be => Encoding::Utf32Be,
            UtfType::Other => Encoding::other(OtherType::JUtf8),
        }
    }

    /// Like [`Encoding::handler`], with a configurable handler for
    /// [`UtfType::Other`].
    #[must_use]
    pub const fn handler_with(utf_type: UtfType, options: &HandlerOptions) -> Self {
        match utf_type {
            UtfType::Other => Encoding::other(options.fallback),
            _ => Encoding::handler(utf_type),
        }
    }

    /// The handler for one of the non-UTF tags.
    #[must_use]
    pub const fn other(other: OtherType) -> Self {
        match other {
            OtherType::JUtf8 => Encoding::Utf8Java,
            OtherType::Iso8859_1 => Encoding::Byte,
            OtherType::Ascii => Encoding::Ascii,
            OtherType::Cp1252 => Encoding::Cp1252,
        }
    }

    /// Identifies `buffer` and selects the matching handler.
    ///
    /// ```rust
    /// use utfcodec::{Encoding, HandlerOptions};
    ///
    /// let detected = Encoding::detect(b"\xFF\xFEh\0i\0", &HandlerOptions::default());
    /// assert_eq!(detected.encoding, Encoding::Utf16Le);
    /// assert_eq!(detected.bom_bytes, 2);
    /// ```
    #[must_use]
    pub fn detect(buffer: &[u8], options: &HandlerOptions) -> Detected {
        let identified = identify(buffer);
        Detected {
            encoding: Encoding::handler_with(identified.utf_type, options),
            bom_bytes: identified.bom_bytes,
        }
    }

    /// Conventional name of the encoding.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf8Java => "Modified UTF-8",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Utf32Le => "UTF-32LE",
            Encoding::Utf32Be => "UTF-32BE",
            Encoding::Byte => "ISO-8859-1",
            Encoding::Ascii => "US-ASCII",
            Encoding::Cp1252 => "windows-1252",
        }
    }

    /// The UTF tag this handler reports. Java UTF-8 reports
    /// [`UtfType::Utf8`]; the single-byte handlers report [`UtfType::Other`].
    #[must_use]
    pub const fn utf_type(self) -> UtfType {
        match self {
            Encoding::Utf8 | Encoding::Utf8Java => UtfType::Utf8,
            Encoding::Utf16Le => UtfType::Utf16Le,
            Encoding::Utf16Be => UtfType::Utf16Be,
            Encoding::Utf32Le => UtfType::Utf32Le,
            Encoding::Utf32Be => UtfType::Utf32Be,
            Encoding::Byte | Encoding::Ascii | Encoding::Cp1252 => UtfType::Other,
        }
    }

    /// Bytes per code unit: 1, 2 or 4.
    #[must_use]
    pub const fn unit_size(self) -> usize {
        match self {
            Encoding::Utf16Le | Encoding::Utf16Be => 2,
            Encoding::Utf32Le | Encoding::Utf32Be => 4,
            Encoding::Utf8
            | Encoding::Utf8Java
            | Encoding::Byte
            | Encoding::Ascii
            | Encoding::Cp1252 => 1,
        }
    }

    /// Bytes needed to encode `code_point`, or 0 if this handler cannot.
    #[must_use]
    pub fn len(self, code_point: CodePoint) -> usize {
        match self {
            Encoding::Utf8 => len_utf8(code_point, false),
            Encoding::Utf8Java => len_utf8(code_point, true),
            Encoding::Utf16Le | Encoding::Utf16Be => len_utf16(code_point),
            Encoding::Utf32Le | Encoding::Utf32Be => len_utf32(code_point),
            Encoding::Byte => len_byte(code_point, false),
            Encoding::Ascii => len_byte(code_point, true),
            Encoding::Cp1252 => len_cp1252(code_point),
        }
    }

    /// The byte-order marker, empty for the single-byte handlers.
    #[must_use]
    pub const fn bom(self) -> &'static [u8] {
        match self {
            Encoding::Utf8 | Encoding::Utf8Java => &UTF8_BOM,
            Encoding::Utf16Le => &UTF16LE_BOM,
            Encoding::Utf16Be => &UTF16BE_BOM,
            Encoding::Utf32Le => &UTF32LE_BOM,
            Encoding::Utf32Be => &UTF32BE_BOM,
            Encoding::Byte | Encoding::Ascii | Encoding::Cp1252 => &[],
        }
    }

    /// Length of [`Encoding::bom`].
    #[must_use]
    pub const fn len_bom(self) -> usize {
        self.bom().len()
    }

    /// Length of the null terminator: one zero code unit.
    #[must_use]
    pub const fn len_null(self) -> usize {
        self.unit_size()
    }

    /// Decodes one code point from the front of `buffer`.
    ///
    /// # Errors
    ///
    /// Whatever the underlying primitive reports; see [`DecodeError`](crate::DecodeError).
    pub fn get(self, buffer: &[u8]) -> DecodeResult {
        match self {
            Encoding::Utf8 => utf8::decode_utf8(buffer, false),
            Encoding::Utf8Java => utf8::decode_utf8(buffer, true),
            Encoding::Utf16Le => utf16::decode_utf16(buffer, Endian::Little),
            Encoding::Utf16Be => utf16::decode_utf16(buffer, Endian::Big),
            Encoding::Utf32Le => utf32::decode_utf32(buffer, Endian::Little),
            Encoding::Utf32Be => utf32::decode_utf32(buffer, Endian::Big),
            Encoding::Byte => byte::decode_byte(buffer, false),
            Encoding::Ascii => byte::decode_byte(buffer, true),
            Encoding::Cp1252 => cp1252::decode_cp1252(buffer),
        }
    }

    /// Encodes `code_point` at the front of `buffer`.
    ///
    /// # Errors
    ///
    /// [`EncodeError`](crate::EncodeError) if the code point has no encoding
    /// here or `buffer` is too short.
    pub fn set(self, buffer: &mut [u8], code_point: CodePoint) -> EncodeResult {
        match self {
            Encoding::Utf8 => utf8::encode_utf8(buffer, code_point, false),
            Encoding::Utf8Java => utf8::encode_utf8(buffer, code_point, true),
            Encoding::Utf16Le => utf16::encode_utf16(buffer, code_point, Endian::Little),
            Encoding::Utf16Be => utf16::encode_utf16(buffer, code_point, Endian::Big),
            Encoding::Utf32Le => utf32::encode_utf32(buffer, code_point, Endian::Little),
            Encoding::Utf32Be => utf32::encode_utf32(buffer, code_point, Endian::Big),
            Encoding::Byte => byte::encode_byte(buffer, code_point, false),
            Encoding::Ascii => byte::encode_byte(buffer, code_point, true),
            Encoding::Cp1252 => cp1252::encode_cp1252(buffer, code_point),
        }
    }

    /// Writes the byte-order marker. Succeeds with 0 bytes for handlers
    /// without one.
    ///
    /// # Errors
    ///
    /// [`EncodeError::Overflow`](crate::EncodeError::Overflow) if `buffer` is too short.
    pub fn set_bom(self, buffer: &mut [u8]) -> EncodeResult {
        encode_marker(buffer, self.bom())
    }

    /// Writes a null terminator.
    ///
    /// # Errors
    ///
    /// [`EncodeError::Overflow`](crate::EncodeError::Overflow) if `buffer` is too short.
    pub fn set_null(self, buffer: &mut [u8]) -> EncodeResult {
        encode_nul(buffer, self.len_null())
    }

    /// Byte length of a null-terminated string.
    #[must_use]
    pub fn strsize(self, buffer: &[u8]) -> usize {
        match self.unit_size() {
            1 => utf8::strsize_utf8(buffer),
            2 => utf16::strsize_utf16(buffer),
            _ => utf32::strsize_utf32(buffer),
        }
    }

    /// Code points in a null-terminated string.
    #[must_use]
    pub fn strlen(self, buffer: &[u8]) -> usize {
        match self {
            Encoding::Utf8 | Encoding::Utf8Java => utf8::strlen_utf8(buffer),
            Encoding::Utf16Le => utf16::strlen_utf16le(buffer),
            Encoding::Utf16Be => utf16::strlen_utf16be(buffer),
            Encoding::Utf32Le | Encoding::Utf32Be => utf32::strlen_utf32(buffer),
            Encoding::Byte | Encoding::Ascii | Encoding::Cp1252 => utf8::strsize_utf8(buffer),
        }
    }

    /// Code points in the whole of `buffer`.
    #[must_use]
    pub fn strlen_bounded(self, buffer: &[u8]) -> usize {
        match self {
            Encoding::Utf8 | Encoding::Utf8Java => utf8::strlen_utf8_bounded(buffer),
            Encoding::Utf16Le => utf16::strlen_utf16le_bounded(buffer),
            Encoding::Utf16Be => utf16::strlen_utf16be_bounded(buffer),
            Encoding::Utf32Le | Encoding::Utf32Be => utf32::strlen_utf32_bounded(buffer),
            Encoding::Byte | Encoding::Ascii | Encoding::Cp1252 => buffer.len(),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
