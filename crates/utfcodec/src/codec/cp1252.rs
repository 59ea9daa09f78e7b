//! Windows code page 1252.
//!
//! The byte to code point mapping sits behind [`CodePageMap`]; the codec
//! functions only consult it. `0x00..=0x7F` and `0xA0..=0xFF` map to the same
//! code point, `0x80..=0x9F` carry the Windows assignments below, five of
//! which are unassigned.

use crate::{
    codec::{DecodeResult, Decoded, EncodeResult},
    error::{DecodeError, EncodeError},
    unicode::CodePoint,
};

/// How unassigned bytes (`0x81`, `0x8D`, `0x8F`, `0x90`, `0x9D`) are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Strictness {
    /// Unassigned bytes are rejected in both directions.
    #[default]
    StrictUndefined,
    /// Unassigned bytes map to the C1 control with the same value.
    PassUndefined,
}

/// A bidirectional single-byte code page.
pub trait CodePageMap {
    /// Code point for `byte`, if it has one under `strictness`.
    fn to_unicode(&self, byte: u8, strictness: Strictness) -> Option<CodePoint>;

    /// Byte for `code_point`, if it has one under `strictness`.
    fn from_unicode(&self, code_point: CodePoint, strictness: Strictness) -> Option<u8>;
}

const UNASSIGNED: u16 = 0;

static HIGH_CONTROLS: [u16; 32] = [
    0x20AC, UNASSIGNED, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021, // 80..87
    0x02C6, 0x2030, 0x0160, 0x2039, 0x0152, UNASSIGNED, 0x017D, UNASSIGNED, // 88..8f
    UNASSIGNED, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014, // 90..97
    0x02DC, 0x2122, 0x0161, 0x203A, 0x0153, UNASSIGNED, 0x017E, 0x0178, // 98..9f
];

/// The Windows-1252 table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Windows1252;

impl CodePageMap for Windows1252 {
    fn to_unicode(&self, byte: u8, strictness: Strictness) -> Option<CodePoint> {
        if !(0x80..=0x9F).contains(&byte) {
            return Some(CodePoint::from(byte));
        }
        match HIGH_CONTROLS[usize::from(byte - 0x80)] {
            UNASSIGNED => match strictness {
                Strictness::StrictUndefined => None,
                Strictness::PassUndefined => Some(CodePoint::from(byte)),
            },
            mapped => Some(CodePoint::from(mapped)),
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    fn from_unicode(&self, code_point: CodePoint, strictness: Strictness) -> Option<u8> {
        match code_point {
            0x00..=0x7F | 0xA0..=0xFF => Some(code_point as u8),
            0x80..=0x9F => {
                let slot = HIGH_CONTROLS[(code_point - 0x80) as usize];
                (slot == UNASSIGNED && strictness == Strictness::PassUndefined)
                    .then_some(code_point as u8)
            }
            _ => HIGH_CONTROLS
                .iter()
                .position(|&mapped| mapped != UNASSIGNED && CodePoint::from(mapped) == code_point)
                .map(|index| 0x80 + index as u8),
        }
    }
}

/// Decodes one byte through `map`.
///
/// # Errors
///
/// [`DecodeError::Underrun`] on an empty slice, [`DecodeError::Malformed`]
/// for a byte the map rejects.
pub fn decode_with<M: CodePageMap + ?Sized>(
    map: &M,
    buffer: &[u8],
    strictness: Strictness,
) -> DecodeResult {
    let &byte = buffer.first().ok_or(DecodeError::Underrun)?;
    map.to_unicode(byte, strictness)
        .map(|code_point| Decoded::new(code_point, 1))
        .ok_or(DecodeError::Malformed { lead: byte })
}

/// Encodes `code_point` through `map`.
///
/// # Errors
///
/// [`EncodeError::Unencodable`] if the map has no byte for it,
/// [`EncodeError::Overflow`] on an empty slice.
pub fn encode_with<M: CodePageMap + ?Sized>(
    map: &M,
    buffer: &mut [u8],
    code_point: CodePoint,
    strictness: Strictness,
) -> EncodeResult {
    let byte = map
        .from_unicode(code_point, strictness)
        .ok_or(EncodeError::Unencodable(code_point))?;
    let out = buffer.first_mut().ok_or(EncodeError::Overflow)?;
    *out = byte;
    Ok(1)
}

/// Decodes one Windows-1252 byte, rejecting unassigned bytes.
///
/// # Errors
///
/// See [`decode_with`].
pub fn decode_cp1252(buffer: &[u8]) -> DecodeResult {
    decode_with(&Windows1252, buffer, Strictness::StrictUndefined)
}

/// Encodes `code_point` as one Windows-1252 byte.
///
/// # Errors
///
/// See [`encode_with`].
pub fn encode_cp1252(buffer: &mut [u8], code_point: CodePoint) -> EncodeResult {
    encode_with(&Windows1252, buffer, code_point, Strictness::StrictUndefined)
}

/// 1 if `code_point` has a strict Windows-1252 byte, 0 otherwise.
#[must_use]
pub fn len_cp1252(code_point: CodePoint) -> usize {
    usize::from(
        Windows1252
            .from_unicode(code_point, Strictness::StrictUndefined)
            .is_some(),
    )
}
