//! UTF-8, with an opt-in Java "modified UTF-8" mode.
//!
//! Strict decoding rejects overlong forms, surrogates and anything above
//! U+10FFFF. In Java mode the single exception is the two-byte `C0 80` form of
//! U+0000, which is both accepted on decode and produced on encode.
//!
//! Failures always report the 1-byte code-unit width, including a multi-byte
//! sequence cut short by the end of the slice, so the caller can resume at
//! the next byte.

use crate::{
    codec::{DecodeResult, Decoded, EncodeResult},
    error::{DecodeError, EncodeError},
    unicode::{CodePoint, MAX_CODE_POINT, is_surrogate, len_utf8},
};

/// `EF BB BF`
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

#[inline]
const fn is_continuation(byte: u8) -> bool {
    (byte & 0xC0) == 0x80
}

/// Decodes one UTF-8 code point from the front of `buffer`.
///
/// # Errors
///
/// [`DecodeError::Underrun`] on an empty slice, otherwise
/// [`DecodeError::Malformed`] carrying the lead byte.
pub fn decode_utf8(buffer: &[u8], java: bool) -> DecodeResult {
    let Some(&lead) = buffer.first() else {
        return Err(DecodeError::Underrun);
    };
    let malformed = DecodeError::Malformed { lead };

    let (width, mut value) = match lead {
        0x00..=0x7F => return Ok(Decoded::new(CodePoint::from(lead), 1)),
        // stray continuation byte or a lead that would need 5+ bytes
        0x80..=0xBF | 0xF8..=0xFF => return Err(malformed),
        0xC0..=0xDF => (2, CodePoint::from(lead & 0x1F)),
        0xE0..=0xEF => (3, CodePoint::from(lead & 0x0F)),
        0xF0..=0xF7 => (4, CodePoint::from(lead & 0x07)),
    };

    let tail = buffer.get(1..width).ok_or(malformed)?;
    for &byte in tail {
        if !is_continuation(byte) {
            return Err(malformed);
        }
        value = (value << 6) | CodePoint::from(byte & 0x3F);
    }

    let accepted = match width {
        2 => value >= 0x80 || (java && value == 0),
        3 => value >= 0x800 && !is_surrogate(value),
        _ => (0x1_0000..=MAX_CODE_POINT).contains(&value),
    };
    if accepted {
        Ok(Decoded::new(value, width))
    } else {
        Err(malformed)
    }
}

/// Encodes `code_point` as UTF-8 at the front of `buffer`.
///
/// # Errors
///
/// [`EncodeError::Unencodable`] for surrogates and values above U+10FFFF,
/// [`EncodeError::Overflow`] if `buffer` is too short.
#[expect(clippy::cast_possible_truncation)]
pub fn encode_utf8(buffer: &mut [u8], code_point: CodePoint, java: bool) -> EncodeResult {
    let width = len_utf8(code_point, java);
    if width == 0 {
        return Err(EncodeError::Unencodable(code_point));
    }
    let out = buffer.get_mut(..width).ok_or(EncodeError::Overflow)?;
    match width {
        1 => out[0] = code_point as u8,
        2 => {
            out[0] = 0xC0 | (code_point >> 6) as u8;
            out[1] = 0x80 | (code_point & 0x3F) as u8;
        }
        3 => {
            out[0] = 0xE0 | (code_point >> 12) as u8;
            out[1] = 0x80 | ((code_point >> 6) & 0x3F) as u8;
            out[2] = 0x80 | (code_point & 0x3F) as u8;
        }
        _ => {
            out[0] = 0xF0 | (code_point >> 18) as u8;
            out[1] = 0x80 | ((code_point >> 12) & 0x3F) as u8;
            out[2] = 0x80 | ((code_point >> 6) & 0x3F) as u8;
            out[3] = 0x80 | (code_point & 0x3F) as u8;
        }
    }
    Ok(width)
}

/// Byte length of a NUL-terminated UTF-8 string (the whole slice if it has
/// no terminator).
#[must_use]
pub fn strsize_utf8(buffer: &[u8]) -> usize {
    buffer
        .iter()
        .position(|&byte| byte == 0)
        .unwrap_or(buffer.len())
}

/// Code points in a NUL-terminated UTF-8 string.
///
/// Only exact for well-formed input (Java-style included): it counts every
/// byte that is not a continuation byte.
#[must_use]
pub fn strlen_utf8(buffer: &[u8]) -> usize {
    strlen_utf8_bounded(&buffer[..strsize_utf8(buffer)])
}

/// Code points in the whole of `buffer`, embedded zeros included.
#[must_use]
pub fn strlen_utf8_bounded(buffer: &[u8]) -> usize {
    buffer.iter().filter(|&&byte| !is_continuation(byte)).count()
}
