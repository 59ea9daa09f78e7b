use thiserror::Error;

use crate::unicode::{CodePoint, FAILURE_BIT};

/// Why a decode did not produce a code point.
///
/// Every variant has a fixed consumed width (see [`DecodeError::bytes`]) so a
/// caller can step over the offending unit and keep scanning.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// Not enough bytes remain for a single code unit.
    #[error("unexpected end of buffer")]
    Underrun,
    /// Invalid, truncated, overlong or out-of-range byte sequence.
    #[error("malformed sequence starting with byte 0x{lead:02X}")]
    Malformed {
        /// The first byte of the rejected sequence.
        lead: u8,
    },
    /// A UTF-16 surrogate without its partner.
    #[error("unpaired surrogate")]
    Unpaired,
    /// A UTF-32 unit above U+10FFFF or inside the surrogate range.
    #[error("code unit is not a Unicode scalar value")]
    OutOfRange,
}

impl DecodeError {
    /// Width in bytes of the rejected unit; 0 only at end of buffer.
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            DecodeError::Underrun => 0,
            DecodeError::Malformed { .. } => 1,
            DecodeError::Unpaired => 2,
            DecodeError::OutOfRange => 4,
        }
    }

    /// The legacy in-band failure value: 0 for underrun, `0x800000XX` for a
    /// rejected lead byte, `0x80000000` otherwise.
    #[must_use]
    pub const fn sentinel(self) -> CodePoint {
        match self {
            DecodeError::Underrun => 0,
            DecodeError::Malformed { lead } => FAILURE_BIT | lead as CodePoint,
            DecodeError::Unpaired | DecodeError::OutOfRange => FAILURE_BIT,
        }
    }

    /// `true` for [`DecodeError::Underrun`].
    #[must_use]
    pub const fn is_underrun(self) -> bool {
        matches!(self, DecodeError::Underrun)
    }
}

/// Why an encode wrote nothing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodeError {
    /// The code point has no representation in the target encoding.
    #[error("U+{0:04X} cannot be encoded")]
    Unencodable(CodePoint),
    /// The output buffer is too small for the encoded form.
    #[error("output buffer too small")]
    Overflow,
}

/// A decode failure found while walking a view.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at byte {position}")]
pub struct ScanError {
    /// What the failing decode reported.
    pub kind: DecodeError,
    /// Byte offset of the failing unit, relative to where the scan started.
    pub position: usize,
}

impl ScanError {
    /// Bytes from the scan start to just past the failing unit.
    #[must_use]
    pub const fn skip(&self) -> usize {
        self.position + self.kind.bytes()
    }
}

/// Why [`transcode`](crate::transcode()) stopped early.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscodeError {
    /// The source could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] ScanError),
    /// A decoded code point could not be written to the destination.
    #[error("encode error: {error} at source byte {position}")]
    Encode {
        /// What the destination encoder reported.
        error: EncodeError,
        /// Source offset of the code point, relative to the transcode start.
        position: usize,
    },
}
