use errcodes_parser::{Error, SqlState, MAX_VALUE};
use proptest::prelude::*;

#[test]
fn decodes_known_codes() {
    let cases = [
        ("00000", 0),
        ("01000", 46656),
        ("0100C", 46668),
        ("01P01", 79057),
        ("22012", 3452582),
        ("ZZZZZ", MAX_VALUE),
    ];
    for (code, expected) in cases {
        let state = SqlState::parse(code).unwrap();
        assert_eq!(state.value(), expected, "code={code}");
        assert_eq!(state.to_string(), code);
    }
}

#[test]
fn decoding_is_case_insensitive() {
    let lower: SqlState = "22p02".parse().unwrap();
    let upper: SqlState = "22P02".parse().unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.to_string(), "22P02");
}

#[test]
fn rejects_wrong_length() {
    for code in ["", "0000", "000000"] {
        let err = SqlState::parse(code).unwrap_err();
        assert!(
            matches!(err, Error::CodeLength { len, .. } if len == code.len()),
            "code={code:?} err={err}"
        );
    }
}

#[test]
fn rejects_non_base36_characters() {
    let err = SqlState::parse("22-12").unwrap_err();
    assert_eq!(
        err,
        Error::CodeDigit {
            code: "22-12".to_string(),
            ch: '-'
        }
    );
    assert!(SqlState::parse("2201é").is_err());
}

#[test]
fn category_zeroes_the_subclass() {
    let state = SqlState::parse("22012").unwrap();
    let category = state.category();
    assert_eq!(category.to_string(), "22000");
    assert_eq!(category.value(), 3452544);
    assert!(!state.is_category());
    assert!(category.is_category());
}

#[test]
fn from_value_rejects_out_of_range() {
    assert!(SqlState::from_value(MAX_VALUE + 1).is_none());
    assert_eq!(SqlState::from_value(0).unwrap().to_string(), "00000");
}

proptest! {
    #[test]
    fn encode_then_decode_is_identity(n in 0u32..=MAX_VALUE) {
        let encoded = SqlState::from_value(n).unwrap();
        let decoded = SqlState::parse(&encoded.to_string()).unwrap();
        prop_assert_eq!(decoded.value(), n);
        prop_assert_eq!(decoded, encoded);
    }
}
