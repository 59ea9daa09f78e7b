//! UTF-16 in both byte orders.

use crate::{
    codec::{DecodeResult, Decoded, EncodeResult, Endian},
    error::{DecodeError, EncodeError},
    unicode::{CodePoint, is_high_surrogate, is_low_surrogate, is_surrogate, len_utf16},
};

/// `FF FE`
pub const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];
/// `FE FF`
pub const UTF16BE_BOM: [u8; 2] = [0xFE, 0xFF];

pub(crate) fn decode_utf16(buffer: &[u8], endian: Endian) -> DecodeResult {
    if buffer.len() < 2 {
        return Err(DecodeError::Underrun);
    }
    let unit = endian.read_u16(buffer);
    if !is_surrogate(unit) {
        return Ok(Decoded::new(unit, 2));
    }
    if is_high_surrogate(unit) && buffer.len() >= 4 {
        let low = endian.read_u16(&buffer[2..]);
        if is_low_surrogate(low) {
            let code_point = (((unit & 0x3FF) << 10) | (low & 0x3FF)) + 0x1_0000;
            return Ok(Decoded::new(code_point, 4));
        }
    }
    Err(DecodeError::Unpaired)
}

pub(crate) fn encode_utf16(
    buffer: &mut [u8],
    code_point: CodePoint,
    endian: Endian,
) -> EncodeResult {
    let width = len_utf16(code_point);
    if width == 0 {
        return Err(EncodeError::Unencodable(code_point));
    }
    let out = buffer.get_mut(..width).ok_or(EncodeError::Overflow)?;
    if width == 2 {
        endian.write_u16(out, code_point);
    } else {
        let offset = code_point - 0x1_0000;
        endian.write_u16(&mut out[..2], 0xD800 | (offset >> 10));
        endian.write_u16(&mut out[2..], 0xDC00 | (offset & 0x3FF));
    }
    Ok(width)
}

/// Counts code points, folding each valid surrogate pair into one.
fn count_utf16(buffer: &[u8], endian: Endian, terminated: bool) -> usize {
    let mut count = 0;
    let mut index = 0;
    while index + 2 <= buffer.len() {
        let unit = endian.read_u16(&buffer[index..]);
        if terminated && unit == 0 {
            break;
        }
        index += 2;
        if is_high_surrogate(unit)
            && index + 2 <= buffer.len()
            && is_low_surrogate(endian.read_u16(&buffer[index..]))
        {
            index += 2;
        }
        count += 1;
    }
    count
}

/// Decodes one UTF-16LE code point (one unit or a surrogate pair).
///
/// # Errors
///
/// [`DecodeError::Underrun`] with fewer than two bytes,
/// [`DecodeError::Unpaired`] for a lone or out-of-order surrogate.
pub fn decode_utf16le(buffer: &[u8]) -> DecodeResult {
    decode_utf16(buffer, Endian::Little)
}

/// Decodes one UTF-16BE code point (one unit or a surrogate pair).
///
/// # Errors
///
/// See [`decode_utf16le`].
pub fn decode_utf16be(buffer: &[u8]) -> DecodeResult {
    decode_utf16(buffer, Endian::Big)
}

/// Encodes `code_point` as UTF-16LE, as a surrogate pair above U+FFFF.
///
/// # Errors
///
/// [`EncodeError::Unencodable`] for surrogates and values above U+10FFFF,
/// [`EncodeError::Overflow`] if `buffer` is too short.
pub fn encode_utf16le(buffer: &mut [u8], code_point: CodePoint) -> EncodeResult {
    encode_utf16(buffer, code_point, Endian::Little)
}

/// Encodes `code_point` as UTF-16BE.
///
/// # Errors
///
/// See [`encode_utf16le`].
pub fn encode_utf16be(buffer: &mut [u8], code_point: CodePoint) -> EncodeResult {
    encode_utf16(buffer, code_point, Endian::Big)
}

/// Byte length of a string terminated by a `00 00` unit.
#[must_use]
pub fn strsize_utf16(buffer: &[u8]) -> usize {
    buffer
        .chunks_exact(2)
        .position(|unit| unit == [0, 0])
        .map_or(buffer.len() & !1, |units| units * 2)
}

/// Code points in a terminated UTF-16LE string.
#[must_use]
pub fn strlen_utf16le(buffer: &[u8]) -> usize {
    count_utf16(buffer, Endian::Little, true)
}

/// Code points in a terminated UTF-16BE string.
#[must_use]
pub fn strlen_utf16be(buffer: &[u8]) -> usize {
    count_utf16(buffer, Endian::Big, true)
}

/// Code points in the whole of a UTF-16LE buffer; a trailing odd byte is ignored.
#[must_use]
pub fn strlen_utf16le_bounded(buffer: &[u8]) -> usize {
    count_utf16(buffer, Endian::Little, false)
}

/// Code points in the whole of a UTF-16BE buffer.
#[must_use]
pub fn strlen_utf16be_bounded(buffer: &[u8]) -> usize {
    count_utf16(buffer, Endian::Big, false)
}
