use tracing::{debug, trace};

use crate::{
    encoding::Encoding,
    error::{DecodeError, ScanError, TranscodeError},
    text::{Text, TextMut},
};

/// Re-encodes `input`, from its cursor to its end, into `output`.
///
/// Size `output` first with [`Encoding::strsize_from_bounded`]; for
/// well-formed input the two agree exactly. Both cursors advance over
/// everything transcoded, including on failure, so the caller can see how
/// far it got.
///
/// ```rust
/// use utfcodec::{Encoding, Text, TextMut, transcode};
///
/// let source = "d\u{e9}j\u{e0} vu".as_bytes();
/// let needs = Encoding::Utf16Be.strsize_from_bounded(Encoding::Utf8, source);
/// let mut storage = vec![0; needs];
///
/// let mut input = Text::new(source);
/// let mut output = TextMut::new(&mut storage);
/// let written = transcode(Encoding::Utf8, &mut input, Encoding::Utf16Be, &mut output).unwrap();
/// assert_eq!(written, needs);
/// assert_eq!(storage[..4], [0x00, b'd', 0x00, 0xE9]);
/// ```
///
/// # Errors
///
/// [`TranscodeError::Decode`] on the first unit `source` rejects (a truncated
/// final unit is an underrun), and [`TranscodeError::Encode`] when `target`
/// cannot represent a code point or `output` is full. Positions are relative
/// to where `input`'s cursor started.
pub fn transcode(
    source: Encoding,
    input: &mut Text<'_>,
    target: Encoding,
    output: &mut TextMut<'_>,
) -> Result<usize, TranscodeError> {
    let start = input.offset;
    if input.remaining().is_none() {
        return Err(ScanError {
            kind: DecodeError::Underrun,
            position: 0,
        }
        .into());
    }
    trace!(%source, %target, len = input.len() - start, "transcoding");

    let mut written = 0;
    while !input.is_exhausted() {
        let position = input.offset - start;
        let decoded = source
            .get_at(input)
            .map_err(|kind| ScanError { kind, position })?;
        written += target
            .write(output, decoded.code_point)
            .map_err(|error| TranscodeError::Encode { error, position })
            .inspect_err(|error| debug!(%source, %target, %error, "transcode stopped"))?;
        input.offset += decoded.bytes;
    }

    trace!(written, "transcoded");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EncodeError;

    #[test]
    fn utf8_to_utf32() {
        let mut storage = [0u8; 8];
        let mut input = Text::new("\u{e9}\u{1F600}".as_bytes());
        let mut output = TextMut::new(&mut storage);
        assert_eq!(
            transcode(Encoding::Utf8, &mut input, Encoding::Utf32Be, &mut output),
            Ok(8)
        );
        assert_eq!(input.offset, 6);
        assert_eq!(output.into_written(), &[0, 0, 0, 0xE9, 0, 1, 0xF6, 0]);
    }

    #[test]
    fn cp1252_euro_to_utf8() {
        let mut storage = [0u8; 4];
        let mut input = Text::new(b"\x80!");
        let mut output = TextMut::new(&mut storage);
        assert_eq!(
            transcode(Encoding::Cp1252, &mut input, Encoding::Utf8, &mut output),
            Ok(4)
        );
        assert_eq!(output.written(), "\u{20ac}!".as_bytes());
    }

    #[test]
    fn stops_on_decode_error() {
        let mut storage = [0u8; 8];
        let mut input = Text::new(b"ab\xFFc");
        let mut output = TextMut::new(&mut storage);
        assert_eq!(
            transcode(Encoding::Utf8, &mut input, Encoding::Byte, &mut output),
            Err(TranscodeError::Decode(ScanError {
                kind: DecodeError::Malformed { lead: 0xFF },
                position: 2
            }))
        );
        assert_eq!(input.offset, 2);
        assert_eq!(output.written(), b"ab");
    }

    #[test]
    fn stops_on_encode_error() {
        let mut storage = [0u8; 8];
        let mut input = Text::at("xa\u{e9}b".as_bytes(), 1);
        let mut output = TextMut::new(&mut storage);
        assert_eq!(
            transcode(Encoding::Utf8, &mut input, Encoding::Ascii, &mut output),
            Err(TranscodeError::Encode {
                error: EncodeError::Unencodable(0xE9),
                position: 1
            })
        );
        assert_eq!(input.offset, 2);

        let mut small = [0u8; 1];
        let mut input = Text::new(b"ab");
        let mut output = TextMut::new(&mut small);
        assert_eq!(
            transcode(Encoding::Byte, &mut input, Encoding::Utf16Le, &mut output),
            Err(TranscodeError::Encode {
                error: EncodeError::Overflow,
                position: 0
            })
        );
    }

    #[test]
    fn inverted_cursor_fails() {
        let mut empty = [0u8; 0];
        let mut input = Text::at(b"a", 2);
        let mut output = TextMut::new(&mut empty);
        assert!(matches!(
            transcode(Encoding::Utf8, &mut input, Encoding::Utf8, &mut output),
            Err(TranscodeError::Decode(_))
        ));
    }
}
