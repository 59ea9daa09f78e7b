//! Per-encoding decode/encode primitives.
//!
//! Every primitive is a pure function over a caller-supplied slice. Decoders
//! take the bytes starting at the code point of interest and return the code
//! point together with the number of bytes it occupied. Encoders write into
//! the front of the slice and return the number of bytes produced; on failure
//! nothing is written.
//!
//! An empty slice (or one shorter than a single code unit) always decodes to
//! [`DecodeError::Underrun`], which is the end-of-input signal and is distinct
//! from malformed input.

pub mod byte;
pub mod cp1252;
pub mod utf16;
pub mod utf32;
pub mod utf8;

use crate::{
    error::{DecodeError, EncodeError},
    unicode::CodePoint,
};

/// A successfully decoded code point and the bytes it occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decoded {
    /// The decoded scalar value.
    pub code_point: CodePoint,
    /// Bytes consumed from the buffer (1, 2, 3 or 4).
    pub bytes: usize,
}

impl Decoded {
    #[inline]
    pub(crate) const fn new(code_point: CodePoint, bytes: usize) -> Self {
        Self { code_point, bytes }
    }
}

/// Outcome of a single decode.
pub type DecodeResult = Result<Decoded, DecodeError>;

/// Outcome of a single encode: bytes written.
pub type EncodeResult = Result<usize, EncodeError>;

/// Flattens a [`DecodeResult`] into the `(code point, bytes)` channel used by
/// skip-and-continue scanners.
pub trait DecodeResultExt {
    /// Bytes to advance past this result, success or not.
    fn bytes(&self) -> usize;

    /// The decoded code point, or the failure sentinel.
    fn code_point(&self) -> CodePoint;
}

impl DecodeResultExt for DecodeResult {
    #[inline]
    fn bytes(&self) -> usize {
        match self {
            Ok(decoded) => decoded.bytes,
            Err(error) => error.bytes(),
        }
    }

    #[inline]
    fn code_point(&self) -> CodePoint {
        match self {
            Ok(decoded) => decoded.code_point,
            Err(error) => error.sentinel(),
        }
    }
}

/// Byte order for the multi-byte unit encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endian {
    Little,
    Big,
}

impl Endian {
    #[inline]
    pub(crate) fn read_u16(self, bytes: &[u8]) -> u32 {
        let pair = [bytes[0], bytes[1]];
        u32::from(match self {
            Endian::Little => u16::from_le_bytes(pair),
            Endian::Big => u16::from_be_bytes(pair),
        })
    }

    #[inline]
    pub(crate) fn write_u16(self, out: &mut [u8], unit: u32) {
        #[expect(clippy::cast_possible_truncation)]
        let unit = unit as u16;
        let bytes = match self {
            Endian::Little => unit.to_le_bytes(),
            Endian::Big => unit.to_be_bytes(),
        };
        out[..2].copy_from_slice(&bytes);
    }

    #[inline]
    pub(crate) fn read_u32(self, bytes: &[u8]) -> u32 {
        let quad = [bytes[0], bytes[1], bytes[2], bytes[3]];
        match self {
            Endian::Little => u32::from_le_bytes(quad),
            Endian::Big => u32::from_be_bytes(quad),
        }
    }

    #[inline]
    pub(crate) fn write_u32(self, out: &mut [u8], value: u32) {
        let bytes = match self {
            Endian::Little => value.to_le_bytes(),
            Endian::Big => value.to_be_bytes(),
        };
        out[..4].copy_from_slice(&bytes);
    }
}

/// Writes `unit_size` zero bytes, the null terminator for that unit width.
pub(crate) fn encode_nul(buffer: &mut [u8], unit_size: usize) -> EncodeResult {
    let out = buffer.get_mut(..unit_size).ok_or(EncodeError::Overflow)?;
    out.fill(0);
    Ok(unit_size)
}

/// Copies a fixed byte-order marker to the front of `buffer`.
pub(crate) fn encode_marker(buffer: &mut [u8], marker: &[u8]) -> EncodeResult {
    let out = buffer
        .get_mut(..marker.len())
        .ok_or(EncodeError::Overflow)?;
    out.copy_from_slice(marker);
    Ok(marker.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattened_channel() {
        let ok: DecodeResult = Ok(Decoded::new(0x41, 1));
        assert_eq!(ok.bytes(), 1);
        assert_eq!(ok.code_point(), 0x41);

        let bad: DecodeResult = Err(DecodeError::Malformed { lead: 0x80 });
        assert_eq!(bad.bytes(), 1);
        assert_eq!(bad.code_point(), 0x8000_0080);

        let end: DecodeResult = Err(DecodeError::Underrun);
        assert_eq!(end.bytes(), 0);
        assert_eq!(end.code_point(), 0);
    }

    #[test]
    fn endian_units() {
        let mut out = [0u8; 4];
        Endian::Big.write_u16(&mut out, 0xFEFF);
        assert_eq!(&out[..2], &[0xFE, 0xFF]);
        assert_eq!(Endian::Little.read_u16(&out), 0xFFFE);
        Endian::Little.write_u32(&mut out, 0x0001_F600);
        assert_eq!(out, [0x00, 0xF6, 0x01, 0x00]);
        assert_eq!(Endian::Big.read_u32(&out), 0x00F6_0100);
    }

    #[test]
    fn nul_and_marker_need_room() {
        let mut out = [0xAAu8; 3];
        assert_eq!(encode_nul(&mut out, 4), Err(EncodeError::Overflow));
        assert_eq!(out, [0xAA; 3]);
        assert_eq!(encode_nul(&mut out, 2), Ok(2));
        assert_eq!(out, [0, 0, 0xAA]);
        assert_eq!(encode_marker(&mut out, &[1, 2, 3, 4]), Err(EncodeError::Overflow));
        assert_eq!(encode_marker(&mut out, &[1, 2, 3]), Ok(3));
    }
}
