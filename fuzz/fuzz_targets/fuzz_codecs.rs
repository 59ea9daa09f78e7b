#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utfcodec::{
    DecodeError, DecodeResultExt, EncodeError, Encoding, LineEnd, Text, TextMut, TranscodeError,
    transcode,
};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    source: Encoding,
    target: Encoding,
    offset: u8,
    bytes: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let Input {
        source,
        target,
        offset,
        bytes,
    } = input;

    // every read makes progress or reports end of input
    let mut text = Text::at(bytes, usize::from(offset));
    while !text.is_exhausted() {
        let before = text.offset;
        let result = source.read(&mut text);
        if result.bytes() == 0 {
            assert_eq!(result, Err(DecodeError::Underrun));
            break;
        }
        assert!(text.offset <= bytes.len(), "read past the end at {before}");
        // Java UTF-8 also accepts a bare 00 but writes U+0000 as C0 80
        let java_nul = source == Encoding::Utf8Java && result == Ok(utfcodec::Decoded {
            code_point: 0,
            bytes: 1,
        });
        if let (Ok(decoded), false) = (result, java_nul) {
            let mut unit = [0u8; 4];
            assert_eq!(source.set(&mut unit, decoded.code_point), Ok(decoded.bytes));
            assert_eq!(&unit[..decoded.bytes], &bytes[before..text.offset]);
        }
    }

    // lines cover the view without overlap
    let start = Text::at(bytes, usize::from(offset));
    let mut covered = start.offset;
    for line in source.lines(&start) {
        match line {
            Ok(line) => {
                covered += line.bytes;
                if line.end == LineEnd::Eof {
                    assert_eq!(covered, bytes.len());
                }
            }
            Err(error) => covered += error.skip(),
        }
    }

    // measured size is exactly what transcode needs
    let Some(rest) = start.remaining() else {
        return;
    };
    let needs = target.strsize_from_bounded(source, rest);
    let mut storage = vec![0u8; needs];
    let mut output = TextMut::new(&mut storage);
    match transcode(source, &mut Text::new(rest), target, &mut output) {
        Ok(written) => assert_eq!(written, needs),
        Err(TranscodeError::Decode(_)) => assert!(source.validate(&Text::new(rest)).is_err()),
        Err(TranscodeError::Encode { error, .. }) => {
            assert!(matches!(error, EncodeError::Unencodable(_)), "measured too little");
        }
    }
});
