//! Code point scalar and the per-encoding length helpers.
//!
//! A [`CodePoint`] is a plain `u32`. Valid scalars occupy `0x0000..=0x10FFFF`
//! minus the surrogate block `0xD800..=0xDFFF`. Values with
//! [`FAILURE_BIT`] set never come out of a successful decode; they only appear
//! as legacy sentinels (see [`DecodeError::sentinel`](crate::DecodeError::sentinel)).

/// An unsigned 32-bit Unicode code point value.
pub type CodePoint = u32;

/// Largest encodable code point.
pub const MAX_CODE_POINT: CodePoint = 0x0010_FFFF;

/// High bit reserved to mark failure sentinels.
pub const FAILURE_BIT: CodePoint = 0x8000_0000;

/// U+FEFF, written as the byte-order marker.
pub const BOM: CodePoint = 0xFEFF;

pub(crate) const NUL: CodePoint = 0x0000;
pub(crate) const LF: CodePoint = 0x000A;
pub(crate) const CR: CodePoint = 0x000D;

/// Returns `true` for `0xD800..=0xDFFF`.
#[inline]
#[must_use]
pub const fn is_surrogate(code_point: CodePoint) -> bool {
    (code_point & 0xFFFF_F800) == 0xD800
}

#[inline]
pub(crate) const fn is_high_surrogate(unit: u32) -> bool {
    (unit & 0xFFFF_FC00) == 0xD800
}

#[inline]
pub(crate) const fn is_low_surrogate(unit: u32) -> bool {
    (unit & 0xFFFF_FC00) == 0xDC00
}

/// Returns `true` if `code_point` is a Unicode scalar value.
#[inline]
#[must_use]
pub const fn is_scalar(code_point: CodePoint) -> bool {
    code_point <= MAX_CODE_POINT && !is_surrogate(code_point)
}

/// Bytes needed to encode `code_point` as UTF-8, or 0 if it cannot be encoded.
///
/// With `java` set, U+0000 takes the two-byte `C0 80` form.
#[must_use]
pub const fn len_utf8(code_point: CodePoint, java: bool) -> usize {
    if !is_scalar(code_point) {
        0
    } else if code_point == NUL && java {
        2
    } else if code_point <= 0x7F {
        1
    } else if code_point <= 0x7FF {
        2
    } else if code_point <= 0xFFFF {
        3
    } else {
        4
    }
}

/// Bytes needed to encode `code_point` as UTF-16, or 0 if it cannot be encoded.
#[must_use]
pub const fn len_utf16(code_point: CodePoint) -> usize {
    if !is_scalar(code_point) {
        0
    } else if code_point <= 0xFFFF {
        2
    } else {
        4
    }
}

/// Bytes needed to encode `code_point` as UTF-32, or 0 if it cannot be encoded.
#[must_use]
pub const fn len_utf32(code_point: CodePoint) -> usize {
    if is_scalar(code_point) { 4 } else { 0 }
}

/// Bytes needed for a single-byte encoding: 1 for `0x00..=0xFF` (`0x7F` in
/// ASCII mode), 0 otherwise.
#[must_use]
pub const fn len_byte(code_point: CodePoint, ascii: bool) -> usize {
    let limit = if ascii { 0x7F } else { 0xFF };
    if code_point <= limit { 1 } else { 0 }
}
