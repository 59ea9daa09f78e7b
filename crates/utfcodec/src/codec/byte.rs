//! Single-byte identity mapping: ISO-8859-1, or strict 7-bit ASCII.

use crate::{
    codec::{DecodeResult, Decoded, EncodeResult},
    error::{DecodeError, EncodeError},
    unicode::{CodePoint, len_byte},
};

/// Decodes one byte as its own code point.
///
/// # Errors
///
/// [`DecodeError::Underrun`] on an empty slice; in ASCII mode,
/// [`DecodeError::Malformed`] for bytes `0x80..=0xFF`.
pub fn decode_byte(buffer: &[u8], ascii: bool) -> DecodeResult {
    match buffer.first() {
        None => Err(DecodeError::Underrun),
        Some(&byte) if ascii && byte > 0x7F => Err(DecodeError::Malformed { lead: byte }),
        Some(&byte) => Ok(Decoded::new(CodePoint::from(byte), 1)),
    }
}

/// Encodes `code_point` as a single byte.
///
/// # Errors
///
/// [`EncodeError::Unencodable`] above `0xFF` (`0x7F` in ASCII mode),
/// [`EncodeError::Overflow`] on an empty slice.
#[expect(clippy::cast_possible_truncation)]
pub fn encode_byte(buffer: &mut [u8], code_point: CodePoint, ascii: bool) -> EncodeResult {
    if len_byte(code_point, ascii) == 0 {
        return Err(EncodeError::Unencodable(code_point));
    }
    let out = buffer.first_mut().ok_or(EncodeError::Overflow)?;
    *out = code_point as u8;
    Ok(1)
}
