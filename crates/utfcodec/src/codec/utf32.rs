//! UTF-32 in both byte orders.

use crate::{
    codec::{DecodeResult, Decoded, EncodeResult, Endian},
    error::{DecodeError, EncodeError},
    unicode::{CodePoint, is_scalar},
};

/// `FF FE 00 00`
pub const UTF32LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];
/// `00 00 FE FF`
pub const UTF32BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];

pub(crate) fn decode_utf32(buffer: &[u8], endian: Endian) -> DecodeResult {
    if buffer.len() < 4 {
        return Err(DecodeError::Underrun);
    }
    let value = endian.read_u32(buffer);
    if is_scalar(value) {
        Ok(Decoded::new(value, 4))
    } else {
        Err(DecodeError::OutOfRange)
    }
}

pub(crate) fn encode_utf32(
    buffer: &mut [u8],
    code_point: CodePoint,
    endian: Endian,
) -> EncodeResult {
    if !is_scalar(code_point) {
        return Err(EncodeError::Unencodable(code_point));
    }
    let out = buffer.get_mut(..4).ok_or(EncodeError::Overflow)?;
    endian.write_u32(out, code_point);
    Ok(4)
}

/// Decodes one UTF-32LE code point.
///
/// # Errors
///
/// [`DecodeError::Underrun`] with fewer than four bytes,
/// [`DecodeError::OutOfRange`] for surrogates and values above U+10FFFF.
pub fn decode_utf32le(buffer: &[u8]) -> DecodeResult {
    decode_utf32(buffer, Endian::Little)
}

/// Decodes one UTF-32BE code point.
///
/// # Errors
///
/// See [`decode_utf32le`].
pub fn decode_utf32be(buffer: &[u8]) -> DecodeResult {
    decode_utf32(buffer, Endian::Big)
}

/// Encodes `code_point` as UTF-32LE.
///
/// # Errors
///
/// [`EncodeError::Unencodable`] for non-scalar values,
/// [`EncodeError::Overflow`] with fewer than four bytes of room.
pub fn encode_utf32le(buffer: &mut [u8], code_point: CodePoint) -> EncodeResult {
    encode_utf32(buffer, code_point, Endian::Little)
}

/// Encodes `code_point` as UTF-32BE.
///
/// # Errors
///
/// See [`encode_utf32le`].
pub fn encode_utf32be(buffer: &mut [u8], code_point: CodePoint) -> EncodeResult {
    encode_utf32(buffer, code_point, Endian::Big)
}

/// Byte length of a string terminated by a zero 4-byte unit.
#[must_use]
pub fn strsize_utf32(buffer: &[u8]) -> usize {
    buffer
        .chunks_exact(4)
        .position(|unit| unit == [0, 0, 0, 0])
        .map_or(buffer.len() & !3, |units| units * 4)
}

/// Code points in a terminated UTF-32 string (either byte order).
#[must_use]
pub fn strlen_utf32(buffer: &[u8]) -> usize {
    strsize_utf32(buffer) / 4
}

/// Code points in the whole of a UTF-32 buffer.
#[must_use]
pub fn strlen_utf32_bounded(buffer: &[u8]) -> usize {
    buffer.len() / 4
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&[0x41, 0, 0, 0], Ok(Decoded::new(0x41, 4)))]
    #[case(&[0x00, 0xF6, 0x01, 0x00, 0xFF], Ok(Decoded::new(0x1_F600, 4)))]
    #[case(&[0xFF, 0xFF, 0x10, 0x00], Ok(Decoded::new(0x10_FFFF, 4)))]
    #[case(&[0x00, 0x00, 0x11, 0x00], Err(DecodeError::OutOfRange))]
    #[case(&[0x00, 0xD8, 0x00, 0x00], Err(DecodeError::OutOfRange))]
    #[case(&[0xFF, 0xDF, 0x00, 0x00], Err(DecodeError::OutOfRange))]
    #[case(&[0x00, 0x00, 0x00, 0x80], Err(DecodeError::OutOfRange))]
    #[case(&[0x41, 0, 0], Err(DecodeError::Underrun))]
    fn little_endian_decode(#[case] input: &[u8], #[case] expected: DecodeResult) {
        assert_eq!(decode_utf32le(input), expected);
    }

    #[test]
    fn big_endian_roundtrip() {
        let mut out = [0u8; 4];
        assert_eq!(encode_utf32be(&mut out, 0x20AC), Ok(4));
        assert_eq!(out, [0, 0, 0x20, 0xAC]);
        assert_eq!(decode_utf32be(&out), Ok(Decoded::new(0x20AC, 4)));
        assert_eq!(decode_utf32be(&[0, 0, 0xD8, 0]), Err(DecodeError::OutOfRange));
    }

    #[test]
    fn encode_rejections() {
        let mut out = [0u8; 4];
        assert_eq!(encode_utf32le(&mut out, 0xDFFF), Err(EncodeError::Unencodable(0xDFFF)));
        assert_eq!(encode_utf32le(&mut out[..3], 0x41), Err(EncodeError::Overflow));
    }

    #[test]
    fn sizes_and_counts() {
        let le = [0x61, 0, 0, 0, 0x62, 0, 0, 0, 0, 0, 0, 0, 0x63, 0, 0, 0];
        assert_eq!(strsize_utf32(&le), 8);
        assert_eq!(strlen_utf32(&le), 2);
        assert_eq!(strlen_utf32_bounded(&le), 4);
        assert_eq!(strsize_utf32(&le[..6]), 4);
        assert_eq!(strlen_utf32_bounded(&le[..7]), 1);
    }
}
