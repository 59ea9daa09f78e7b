//! Codec operations at a view's cursor.
//!
//! The `*_at` forms look but do not move. `read` and the `write*` forms
//! advance the cursor by the width the primitive reports, on failure too, so
//! a caller can skip a bad unit by simply reading again.

use tracing::debug;

use crate::{
    codec::{DecodeResult, DecodeResultExt, EncodeResult},
    encoding::Encoding,
    error::{DecodeError, EncodeError, ScanError},
    text::{Text, TextMut},
    unicode::CodePoint,
};

impl Encoding {
    /// Decodes the code point at the cursor.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Underrun`] at or past the end, otherwise as
    /// [`Encoding::get`].
    pub fn get_at(self, text: &Text<'_>) -> DecodeResult {
        text.remaining()
            .map_or(Err(DecodeError::Underrun), |rest| self.get(rest))
    }

    /// Decodes the code point at the cursor and steps over it.
    ///
    /// # Errors
    ///
    /// As [`Encoding::get_at`]. The cursor still moves past a malformed unit.
    pub fn read(self, text: &mut Text<'_>) -> DecodeResult {
        let result = self.get_at(text);
        text.offset += result.bytes();
        result
    }

    /// Encodes `code_point` at the cursor.
    ///
    /// # Errors
    ///
    /// As [`Encoding::set`]; a cursor past the end is an
    /// [`EncodeError::Overflow`].
    pub fn set_at(self, text: &mut TextMut<'_>, code_point: CodePoint) -> EncodeResult {
        let room = text.remaining_mut().ok_or(EncodeError::Overflow)?;
        self.set(room, code_point)
    }

    /// Encodes `code_point` at the cursor and moves past it.
    ///
    /// # Errors
    ///
    /// As [`Encoding::set_at`]. Nothing is written and the cursor stays put.
    pub fn write(self, text: &mut TextMut<'_>, code_point: CodePoint) -> EncodeResult {
        let bytes = self.set_at(text, code_point)?;
        text.offset += bytes;
        Ok(bytes)
    }

    /// Writes the byte-order marker at the cursor.
    ///
    /// # Errors
    ///
    /// [`EncodeError::Overflow`] if it does not fit.
    pub fn set_bom_at(self, text: &mut TextMut<'_>) -> EncodeResult {
        let room = text.remaining_mut().ok_or(EncodeError::Overflow)?;
        self.set_bom(room)
    }

    /// Writes the byte-order marker and moves past it.
    ///
    /// # Errors
    ///
    /// [`EncodeError::Overflow`] if it does not fit.
    pub fn write_bom(self, text: &mut TextMut<'_>) -> EncodeResult {
        let bytes = self.set_bom_at(text)?;
        text.offset += bytes;
        Ok(bytes)
    }

    /// Writes a null terminator at the cursor.
    ///
    /// # Errors
    ///
    /// [`EncodeError::Overflow`] if it does not fit.
    pub fn set_null_at(self, text: &mut TextMut<'_>) -> EncodeResult {
        let room = text.remaining_mut().ok_or(EncodeError::Overflow)?;
        self.set_null(room)
    }

    /// Writes a null terminator and moves past it.
    ///
    /// # Errors
    ///
    /// [`EncodeError::Overflow`] if it does not fit.
    pub fn write_null(self, text: &mut TextMut<'_>) -> EncodeResult {
        let bytes = self.set_null_at(text)?;
        text.offset += bytes;
        Ok(bytes)
    }

    /// Decodes everything from the cursor to the end of the view.
    ///
    /// The view itself is left untouched.
    ///
    /// ```rust
    /// use utfcodec::{DecodeError, Encoding, Text};
    ///
    /// assert!(Encoding::Utf16Le.validate(&Text::new(b"h\0i\0")).is_ok());
    ///
    /// let error = Encoding::Utf16Le.validate(&Text::new(b"h\0i")).unwrap_err();
    /// assert_eq!(error.kind, DecodeError::Underrun);
    /// assert_eq!(error.position, 2);
    /// ```
    ///
    /// # Errors
    ///
    /// The first failing decode, positioned relative to the cursor. A cursor
    /// past the end fails with [`DecodeError::Underrun`] at position 0.
    pub fn validate(self, text: &Text<'_>) -> Result<(), ScanError> {
        if text.remaining().is_none() {
            return Err(ScanError {
                kind: DecodeError::Underrun,
                position: 0,
            });
        }
        let mut scan = *text;
        while !scan.is_exhausted() {
            let position = scan.offset - text.offset;
            self.read(&mut scan).map_err(|kind| {
                debug!(encoding = %self, %kind, position, "validation failed");
                ScanError { kind, position }
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::codec::Decoded;

    #[test]
    fn read_advances_past_failures() {
        let mut text = Text::new(b"a\xFFb");
        let encoding = Encoding::Utf8;
        assert_eq!(encoding.read(&mut text), Ok(Decoded::new(0x61, 1)));
        assert_eq!(
            encoding.read(&mut text),
            Err(DecodeError::Malformed { lead: 0xFF })
        );
        assert_eq!(text.offset, 2);
        assert_eq!(encoding.read(&mut text), Ok(Decoded::new(0x62, 1)));
        assert_eq!(encoding.read(&mut text), Err(DecodeError::Underrun));
        assert_eq!(text.offset, 3);
    }

    #[test]
    fn read_skips_a_whole_unpaired_unit() {
        let mut text = Text::new(&[0x00, 0xD8, 0x41, 0x00]);
        assert_eq!(Encoding::Utf16Le.read(&mut text), Err(DecodeError::Unpaired));
        assert_eq!(text.offset, 2);
        assert_eq!(Encoding::Utf16Le.read(&mut text), Ok(Decoded::new(0x41, 2)));
    }

    #[test]
    fn get_at_an_inverted_cursor_is_underrun() {
        let text = Text::at(b"ab", 5);
        assert_eq!(Encoding::Utf8.get_at(&text), Err(DecodeError::Underrun));
    }

    #[test]
    fn writes_compose() {
        let mut storage = [0xAAu8; 12];
        let mut out = TextMut::new(&mut storage);
        let encoding = Encoding::Utf16Be;
        assert_eq!(encoding.write_bom(&mut out), Ok(2));
        assert_eq!(encoding.write(&mut out, 0x1_F600), Ok(4));
        assert_eq!(encoding.write(&mut out, 0xDC00), Err(EncodeError::Unencodable(0xDC00)));
        assert_eq!(encoding.write_null(&mut out), Ok(2));
        assert_eq!(
            out.written(),
            &[0xFE, 0xFF, 0xD8, 0x3D, 0xDE, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn failed_write_leaves_cursor() {
        let mut storage = [0u8; 2];
        let mut out = TextMut::at(&mut storage, 1);
        assert_eq!(Encoding::Utf8.write(&mut out, 0xE9), Err(EncodeError::Overflow));
        assert_eq!(out.offset, 1);
        assert_eq!(Encoding::Utf8.write_bom(&mut out), Err(EncodeError::Overflow));
        out.offset = 3;
        assert_eq!(Encoding::Byte.write_null(&mut out), Err(EncodeError::Overflow));
        assert_eq!(Encoding::Byte.write_bom(&mut out), Err(EncodeError::Overflow));
    }

    #[test]
    fn bom_free_handlers_write_nothing() {
        let mut storage = [0u8; 1];
        let mut out = TextMut::new(&mut storage);
        assert_eq!(Encoding::Cp1252.write_bom(&mut out), Ok(0));
        assert_eq!(out.offset, 0);
    }

    #[rstest]
    #[case(Encoding::Utf8, b"caf\xC3\xA9", None)]
    #[case(Encoding::Utf8, b"caf\xC3", Some((DecodeError::Malformed { lead: 0xC3 }, 3)))]
    #[case(Encoding::Ascii, b"caf\xE9", Some((DecodeError::Malformed { lead: 0xE9 }, 3)))]
    #[case(Encoding::Byte, b"caf\xE9", None)]
    #[case(Encoding::Utf32Be, b"\0\0\0a\0\x11\0\0", Some((DecodeError::OutOfRange, 4)))]
    #[case(Encoding::Utf32Le, b"a\0\0\0a\0", Some((DecodeError::Underrun, 4)))]
    #[case(Encoding::Utf16Le, b"", None)]
    fn validate_cases(
        #[case] encoding: Encoding,
        #[case] input: &[u8],
        #[case] failure: Option<(DecodeError, usize)>,
    ) {
        let text = Text::new(input);
        let expected = failure.map_or(Ok(()), |(kind, position)| Err(ScanError { kind, position }));
        assert_eq!(encoding.validate(&text), expected);
        assert_eq!(text.offset, 0);
    }

    #[test]
    fn validate_is_relative_to_the_cursor() {
        let text = Text::at(b"\xFFok", 1);
        assert_eq!(Encoding::Utf8.validate(&text), Ok(()));
        assert_eq!(
            Encoding::Utf8.validate(&Text::at(b"ok", 3)),
            Err(ScanError {
                kind: DecodeError::Underrun,
                position: 0
            })
        );
        assert_eq!(Encoding::Utf8.validate(&Text::at(b"ok", 2)), Ok(()));
    }
}
