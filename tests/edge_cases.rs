#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Reference vectors and boundary conditions for the codec

use easypay_reference::config::{MAX_REFERENCE_LENGTH, MIN_REFERENCE_LENGTH};
use easypay_reference::{
    decode, encode, format_for_display, luhn_check_digit, validate, ReferenceCodec,
    ReferenceError,
};

// ============================================================================
// ENCODING
// ============================================================================

#[test]
fn test_encode_reference_vectors() {
    assert_eq!(encode("5072").unwrap(), "928130000000050728");
    assert_eq!(encode("13").unwrap(), "928130000000000137");
    assert_eq!(encode("4").unwrap(), "928130000000000046");
    assert_eq!(encode("11180").unwrap(), "928130000000111801");
    assert_eq!(encode("187").unwrap(), "928130000000001879");
    assert_eq!(encode("10176").unwrap(), "928130000000101760");
    assert_eq!(encode("68").unwrap(), "928130000000000681");
    assert_eq!(encode("7").unwrap(), "928130000000000079");
    assert_eq!(encode("5448").unwrap(), "928130000000054480");
    assert_eq!(encode("307").unwrap(), "928130000000003073");
    assert_eq!(encode("3").unwrap(), "928130000000000038");
    assert_eq!(encode("529").unwrap(), "928130000000005292");
    assert_eq!(encode("11650").unwrap(), "928130000000116503");
    assert_eq!(encode("11").unwrap(), "928130000000000111");
    assert_eq!(encode("5777").unwrap(), "928130000000057772");
}

#[test]
fn test_encode_output_length_is_fixed() {
    let codec = ReferenceCodec::default();
    for id in ["1", "123", "123456789", "987654321", "12345", "1234567890"] {
        let number = codec.encode(id).unwrap();
        assert_eq!(number.as_str().len(), codec.total_length(), "{id}");
        assert!(number.as_str().starts_with("92813"));
    }
}

#[test]
fn test_encode_fifteen_digits_exceeds_width() {
    match encode("123456789012345") {
        Err(ReferenceError::LengthExceeded { length, width }) => {
            assert_eq!(length, 15);
            assert_eq!(width, 12);
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_encode_very_long_customer_id() {
    let err = encode("123456789012345678901234567890").unwrap_err();
    assert_eq!(
        err.user_message(),
        "Total character length is too short to accommodate the Customer ID."
    );
}

#[test]
fn test_encode_exact_width_boundary() {
    let codec = ReferenceCodec::default();
    let width = codec.account_width();
    assert!(codec.encode(&"7".repeat(width)).is_ok());
    assert!(codec.encode(&"7".repeat(width + 1)).is_err());
}

#[test]
fn test_encode_prepadded_matches_bare() {
    // an already padded customer ID is indistinguishable from the bare one
    assert_eq!(encode("0005072").unwrap(), encode("5072").unwrap());
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn test_validate_reference_vectors() {
    assert!(validate("928130000000050728"));
    assert!(!validate("928130000000050729"));
    assert!(validate("915001234567890"));
    assert!(validate("96789254336782123338"));
}

#[test]
fn test_validate_wrong_prefix() {
    // same digits after the prefix, so only the prefix is at fault
    assert!(!validate("828130000000050728"));
}

#[test]
fn test_validate_non_numeric() {
    assert!(!validate("9281300000000507a8"));
    assert!(!validate("9281 3000 0000 0507 28"));
    assert!(!validate("９２８１３００００００００５０７２８"));
}

#[test]
fn test_validate_empty_and_prefix_only() {
    assert!(!validate(""));
    assert!(!validate("9"));
}

#[test]
fn test_validate_length_window() {
    let build = |body_len: usize| {
        let base = "1".repeat(body_len);
        format!("9{base}{}", luhn_check_digit(&base))
    };

    let too_short = build(MIN_REFERENCE_LENGTH - 3);
    assert_eq!(too_short.len(), MIN_REFERENCE_LENGTH - 1);
    assert!(!validate(&too_short));

    assert!(validate(&build(MIN_REFERENCE_LENGTH - 2)));
    assert!(validate(&build(MAX_REFERENCE_LENGTH - 2)));

    let too_long = build(MAX_REFERENCE_LENGTH - 1);
    assert_eq!(too_long.len(), MAX_REFERENCE_LENGTH + 1);
    assert!(!validate(&too_long));
}

#[test]
fn test_validate_ignores_deployment_total_length() {
    // 15 digits, issued for receiver 1500, still valid here
    let codec = ReferenceCodec::default();
    assert_ne!(codec.total_length(), 15);
    assert!(codec.validate("915001234567890"));
}

// ============================================================================
// DECODING
// ============================================================================

#[test]
fn test_decode_foreign_receiver() {
    let parsed = decode("915001234567890").expect("valid number");
    assert_eq!(parsed.prefix, "9");
    assert_eq!(parsed.receiver_id, "1500");
    assert_eq!(parsed.account_number, "123456789");
    assert_eq!(parsed.check_digit, "0");
}

#[test]
fn test_decode_twenty_digit_number() {
    let parsed = decode("96789254336782123338").expect("valid number");
    assert_eq!(parsed.receiver_id, "6789");
    assert_eq!(parsed.account_number, "25433678212333");
    assert_eq!(parsed.check_digit, "8");
}

#[test]
fn test_decode_shortest_number() {
    let base = "15001";
    let number = format!("9{base}{}", luhn_check_digit(base));
    let parsed = decode(&number).expect("7 digits is valid");
    assert_eq!(parsed.receiver_id, "1500");
    assert_eq!(parsed.account_number, "1");
}

#[test]
fn test_decode_invalid_is_none() {
    assert!(decode("928130000000050729").is_none());
    assert!(decode("not a number").is_none());
    assert!(decode("").is_none());
}

#[test]
fn test_decode_borrows_from_input() {
    let owned = String::from("928130000000050728");
    let parsed = decode(&owned).unwrap();
    let start = owned.as_ptr() as usize;
    assert_eq!(parsed.account_number.as_ptr() as usize, start + 5);
}

#[test]
fn test_decode_to_json() {
    let parsed = decode("928130000000050728").unwrap();
    let json = serde_json::to_value(parsed).unwrap();
    assert_eq!(json["receiver_id"], "2813");
    assert_eq!(json["account_number"], "000000005072");
    assert_eq!(json["check_digit"], "8");
}

// ============================================================================
// DISPLAY FORMAT
// ============================================================================

#[test]
fn test_format_reference_number() {
    let number = encode("12345").unwrap();
    assert_eq!(number, "928130000000123459");
    assert_eq!(format_for_display(number.as_str()), "9281 3000 0000 1234 59");
    assert_eq!(number.formatted(), format_for_display(number.as_str()));
}

#[test]
fn test_format_arbitrary_text() {
    assert_eq!(format_for_display("abcdefghij"), "abcd efgh ij");
    assert_eq!(format_for_display(" "), " ");
    assert_eq!(format_for_display(""), "");
}
