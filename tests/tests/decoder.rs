use uca_collator::utf8::{decode_into, REPLACEMENT};
use uca_collator_tests::codes;

fn decode(input: &[u8]) -> Vec<u32>
{
    let mut result = vec![];
    decode_into(input, &mut result);
    result
}

#[test]
fn valid_text()
{
    for input in ["", "Edgar", "Élodie", "Ötzi", "چنگیز", "가각", "𖿠𗀀", "\u{10FFFF}"] {
        assert_eq!(decode(input.as_bytes()), codes(input), "{}", input);
    }
}

#[test]
fn buffer_is_reused()
{
    let mut buffer = vec![1, 2, 3, 4, 5, 6, 7, 8];

    decode_into(b"ab", &mut buffer);
    assert_eq!(buffer, [0x61, 0x62]);

    decode_into(b"", &mut buffer);
    assert!(buffer.is_empty());
}

#[test]
fn invalid_sequences_are_replaced()
{
    // одиночный байт продолжения, недопустимые байты
    assert_eq!(decode(b"a\x80b"), [0x61, REPLACEMENT, 0x62]);
    assert_eq!(decode(b"\xFE\xFF"), [REPLACEMENT, REPLACEMENT]);

    // overlong
    assert_eq!(decode(b"\xE0\x80\x80"), [REPLACEMENT; 3]);

    // суррогат
    assert_eq!(decode(b"\xED\xBF\xBF"), [REPLACEMENT; 3]);

    // больше U+10FFFF
    assert_eq!(decode(b"\xF4\x90\x80\x80"), [REPLACEMENT; 4]);
}

#[test]
fn maximal_subpart_is_one_replacement()
{
    // начало трёхбайтовой последовательности, прерванное ASCII
    assert_eq!(decode(b"\xE2\x82z"), [REPLACEMENT, 0x7A]);

    // прерванное началом новой корректной последовательности
    assert_eq!(decode(b"\xF0\x9F\xC3\xA9"), [REPLACEMENT, 0xE9]);

    // обрезано в конце
    assert_eq!(decode(b"ok\xF0\x9F\x98"), [0x6F, 0x6B, REPLACEMENT]);
}

#[test]
fn matches_lossy_conversion()
{
    let inputs: [&[u8]; 6] = [
        b"\xC0\xAF",
        b"\xE0\x9F\xBF",
        b"\xF0\x8F\xBF\xBF",
        b"\x61\xF1\x80\x80\xE1\x80\xC2\x62\x80\x63\x80\xBF\x64",
        b"\xED\xA0\x80\xED\xBF\xBF",
        b"\xF4\x8F\xBF\xBF\xF4\x90",
    ];

    for input in inputs {
        let expected = codes(&String::from_utf8_lossy(input));

        assert_eq!(decode(input), expected, "{:02X?}", input);
    }
}
