//! Code point codecs for UTF-8 (strict and Java-style), UTF-16, UTF-32,
//! ISO-8859-1, ASCII and Windows-1252 over caller-owned byte buffers.
//!
//! The [`codec`] module holds one pure decode/encode pair per encoding.
//! [`Encoding`] selects between them at runtime and layers cursor
//! operations, line splitting and size measurement on top, identically for
//! every encoding. [`identify`] guesses an encoding from a byte-order marker
//! or leading ASCII.
//!
//! ```rust
//! use utfcodec::{Encoding, HandlerOptions, Text};
//!
//! let bytes = b"\xFE\xFF\0h\0i\0\n";
//! let detected = Encoding::detect(bytes, &HandlerOptions::default());
//! assert_eq!(detected.encoding, Encoding::Utf16Be);
//!
//! let mut text = Text::at(bytes, detected.bom_bytes);
//! let line = detected.encoding.read_line(&mut text).unwrap();
//! assert_eq!(detected.encoding.strlen_bounded(line.as_bytes()), 2);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod codec;
pub mod unicode;

mod cursor;
mod encoding;
mod error;
mod identify;
mod lines;
mod measure;
mod options;
mod text;
mod transcode;

#[cfg(test)]
mod tests;

pub use codec::{DecodeResult, DecodeResultExt, Decoded, EncodeResult};
pub use encoding::{Detected, Encoding, OtherType};
pub use error::{DecodeError, EncodeError, ScanError, TranscodeError};
pub use identify::{Identified, UtfType, identify};
pub use lines::{Line, LineEnd, Lines};
pub use options::HandlerOptions;
pub use text::{Text, TextMut};
pub use transcode::transcode;
pub use unicode::CodePoint;
