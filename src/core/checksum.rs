//! Luhn (modulus 10) check digit.
//!
//! Digits are weighted from the right: the rightmost digit of the input is
//! doubled, then every second digit after it. A doubled value above 9 has 9
//! subtracted. The check digit is whatever brings the weighted sum up to the
//! next multiple of ten, so that appending it yields a Luhn-valid string.

/// Computes the Luhn check digit of `digits`.
///
/// Callers pass decimal digits only. Any other character carries no weight
/// and contributes nothing to the sum, so the function never panics.
pub fn luhn_check_digit(digits: &str) -> u8 {
    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = if b.is_ascii_digit() {
                u32::from(b - b'0')
            } else {
                0
            };
            if i % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}

/// Returns `true` when the last character of `number` is the Luhn check digit of the rest.
pub fn has_valid_check_digit(number: &str) -> bool {
    let Some((&last, body)) = number.as_bytes().split_last() else {
        return false;
    };
    if !last.is_ascii_digit() {
        return false;
    }
    // the last byte is ASCII, so slicing before it stays on a char boundary
    luhn_check_digit(&number[..body.len()]) == last - b'0'
}
