use alloc::string::String;

use quickcheck::QuickCheck;

use super::{arbitrary::encode_lossy, quickcheck_tests};
use crate::{
    DecodeError, Decoded, EncodeError, Encoding, HandlerOptions, Text, UtfType,
    unicode::{MAX_CODE_POINT, is_surrogate},
};

fn roundtrip(encoding: Encoding, code_point: u32) -> bool {
    let mut out = [0xAAu8; 4];
    match encoding.set(&mut out, code_point) {
        Ok(bytes) => {
            bytes == encoding.len(code_point)
                && encoding.get(&out[..bytes]) == Ok(Decoded::new(code_point, bytes))
        }
        Err(EncodeError::Unencodable(rejected)) => {
            rejected == code_point && encoding.len(code_point) == 0 && out == [0xAA; 4]
        }
        Err(EncodeError::Overflow) => false,
    }
}

#[test]
fn every_scalar_roundtrips_through_every_handler() {
    let step = if cfg!(feature = "test-fast") { 251 } else { 1 };
    for encoding in Encoding::ALL {
        for code_point in (0..=MAX_CODE_POINT).step_by(step) {
            if is_surrogate(code_point) {
                continue;
            }
            assert!(roundtrip(encoding, code_point), "{encoding} U+{code_point:04X}");
        }
    }
}

#[test]
fn utf_handlers_encode_every_scalar() {
    for encoding in Encoding::ALL {
        if encoding.utf_type() == UtfType::Other {
            continue;
        }
        for code_point in [0, 0x7F, 0x80, 0x7FF, 0x800, 0xFFFF, 0x1_0000, MAX_CODE_POINT] {
            assert_ne!(encoding.len(code_point), 0, "{encoding} U+{code_point:04X}");
        }
    }
}

#[test]
fn surrogates_and_out_of_range_never_encode() {
    for encoding in Encoding::ALL {
        for code_point in [0xD800, 0xDBFF, 0xDC00, 0xDFFF, MAX_CODE_POINT + 1, u32::MAX] {
            assert_eq!(encoding.len(code_point), 0);
            assert_eq!(
                encoding.set(&mut [0u8; 4], code_point),
                Err(EncodeError::Unencodable(code_point))
            );
        }
    }
}

#[test]
fn surrogates_never_decode() {
    // ED A0 80 would be U+D800
    assert!(Encoding::Utf8.get(&[0xED, 0xA0, 0x80]).is_err());
    assert!(Encoding::Utf8Java.get(&[0xED, 0xBF, 0xBF]).is_err());
    assert_eq!(Encoding::Utf16Le.get(&[0x00, 0xDC, 0x41, 0x00]), Err(DecodeError::Unpaired));
    assert_eq!(Encoding::Utf16Be.get(&[0xD8, 0x00]), Err(DecodeError::Unpaired));
    assert_eq!(Encoding::Utf32Le.get(&[0x00, 0xD8, 0x00, 0x00]), Err(DecodeError::OutOfRange));
    assert_eq!(Encoding::Utf32Be.get(&[0x00, 0x00, 0xDF, 0xFF]), Err(DecodeError::OutOfRange));
}

#[test]
fn quickcheck_scalars_roundtrip() {
    fn prop(encoding: Encoding, c: char) -> bool {
        roundtrip(encoding, u32::from(c))
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Encoding, char) -> bool);
}

#[test]
fn quickcheck_text_validates_and_counts() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(encoding: Encoding, text: String) -> bool {
        let bytes = encode_lossy(encoding, &text);
        let kept = text
            .chars()
            .filter(|&c| encoding.len(u32::from(c)) != 0)
            .count();
        encoding.validate(&Text::new(&bytes)).is_ok() && encoding.strlen_bounded(&bytes) == kept
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Encoding, String) -> bool);
}

#[test]
fn quickcheck_detection_respects_fallback() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(options: HandlerOptions, utf_type: UtfType, bytes: alloc::vec::Vec<u8>) -> bool {
        let detected = Encoding::detect(&bytes, &options);
        let selected = Encoding::handler_with(utf_type, &options);
        detected.bom_bytes <= bytes.len()
            && (utf_type == UtfType::Other || selected.utf_type() == utf_type)
            && (utf_type != UtfType::Other || selected == Encoding::other(options.fallback))
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(HandlerOptions, UtfType, alloc::vec::Vec<u8>) -> bool);
}
