#![no_main]

use easypay_reference::ReferenceCodec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let codec = ReferenceCodec::default();

    // map arbitrary bytes onto digit strings, sometimes wider than the field
    let account: String = data.iter().map(|b| char::from(b'0' + b % 10)).collect();

    match codec.encode(&account) {
        Ok(number) => {
            assert_eq!(number.as_str().len(), codec.total_length());
            assert!(codec.validate(number.as_str()));
        }
        Err(_) => assert!(account.len() > codec.account_width()),
    }
});
