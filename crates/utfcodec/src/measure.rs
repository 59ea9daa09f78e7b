//! Destination sizes for transcoding, measured before anything is written.

use crate::{encoding::Encoding, error::DecodeError, text::Text, unicode::NUL};

impl Encoding {
    /// Bytes needed to re-encode the null-terminated `buffer`, written in
    /// `source`, with this handler. The terminator is not counted.
    ///
    /// A U+0000 only terminates when it has the width of `source`'s null
    /// unit, so Java UTF-8's `C0 80` is measured as content. Malformed units
    /// count for nothing.
    ///
    /// ```rust
    /// use utfcodec::Encoding;
    ///
    /// let utf8 = "h\u{e9}\u{1F600}\0ignored".as_bytes();
    /// assert_eq!(Encoding::Utf16Le.strsize_from(Encoding::Utf8, utf8), 8);
    /// ```
    #[must_use]
    pub fn strsize_from(self, source: Encoding, buffer: &[u8]) -> usize {
        measure(self, source, buffer, true)
    }

    /// Bytes needed to re-encode all of `buffer`, written in `source`, with
    /// this handler. Malformed units count for nothing.
    #[must_use]
    pub fn strsize_from_bounded(self, source: Encoding, buffer: &[u8]) -> usize {
        measure(self, source, buffer, false)
    }
}

fn measure(target: Encoding, source: Encoding, buffer: &[u8], terminated: bool) -> usize {
    let mut scan = Text::new(buffer);
    let mut needs = 0;
    loop {
        match source.read(&mut scan) {
            Ok(decoded)
                if terminated && decoded.code_point == NUL && decoded.bytes == source.len_null() =>
            {
                break;
            }
            Ok(decoded) => needs += target.len(decoded.code_point),
            Err(DecodeError::Underrun) => break,
            Err(_) => {}
        }
    }
    needs
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Encoding::Utf8, 1 + 2 + 3 + 4)]
    #[case(Encoding::Utf16Be, 2 + 2 + 2 + 4)]
    #[case(Encoding::Utf32Le, 4 * 4)]
    #[case(Encoding::Byte, 1 + 1)]
    #[case(Encoding::Cp1252, 1 + 1 + 1)]
    fn per_target(#[case] target: Encoding, #[case] expected: usize) {
        let source = "a\u{e9}\u{20ac}\u{1F600}\0tail".as_bytes();
        assert_eq!(target.strsize_from(Encoding::Utf8, source), expected);
    }

    #[test]
    fn java_nul_is_content() {
        let source = b"a\xC0\x80b\0c";
        assert_eq!(Encoding::Utf16Le.strsize_from(Encoding::Utf8Java, source), 6);
        assert_eq!(Encoding::Utf8Java.strsize_from(Encoding::Utf8Java, source), 4);
        assert_eq!(Encoding::Utf8.strsize_from(Encoding::Utf8Java, source), 3);
    }

    #[test]
    fn bounded_counts_past_nul_and_skips_malformed() {
        let source = b"a\0\xFFb";
        assert_eq!(Encoding::Utf32Be.strsize_from(Encoding::Utf8, source), 4);
        assert_eq!(Encoding::Utf32Be.strsize_from_bounded(Encoding::Utf8, source), 12);
    }

    #[test]
    fn wide_sources_stop_at_their_null_unit() {
        let source = [0x3D, 0xD8, 0x00, 0xDE, 0x41, 0x00, 0x00, 0x00, 0x42, 0x00];
        assert_eq!(Encoding::Utf8.strsize_from(Encoding::Utf16Le, &source), 5);
        assert_eq!(Encoding::Utf8.strsize_from_bounded(Encoding::Utf16Le, &source), 7);
        // a truncated final unit is an underrun and ends the walk
        assert_eq!(Encoding::Utf8.strsize_from_bounded(Encoding::Utf16Le, &source[..9]), 6);
    }
}
