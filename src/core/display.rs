//! Presentation form of a reference number.

use crate::config::DISPLAY_GROUP_SIZE;

/// Splits `reference` into blocks of four characters joined by single spaces.
///
/// The last block may be shorter. Input is not validated: any string is
/// grouped as-is and characters are never altered, dropped or reordered.
///
/// ```
/// use easypay_reference::core::display::format_for_display;
///
/// assert_eq!(format_for_display("928130000000050728"), "9281 3000 0000 0507 28");
/// ```
pub fn format_for_display(reference: &str) -> String {
    group_chars(reference, DISPLAY_GROUP_SIZE)
}

fn group_chars(text: &str, size: usize) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / size);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 && i % size == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
