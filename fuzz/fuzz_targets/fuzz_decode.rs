#![no_main]

use easypay_reference::{format_for_display, ReferenceCodec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let codec = ReferenceCodec::default();

    // validate and decode must agree and never panic
    let valid = codec.validate(text);
    assert_eq!(valid, codec.decode(text).is_some());

    let formatted = format_for_display(text);
    let non_space = |s: &str| s.chars().filter(|c| *c != ' ').count();
    assert_eq!(non_space(&formatted), non_space(text));
});
