//! Deterministic candidate selection.
//!
//! Generation never draws random numbers. The "seed" for a cell is the sum
//! of the character codes of `class_key + day + slot_label`, and the chosen
//! candidate is `seed % candidates`. The sum uses the leading UTF-16 code
//! unit of each code point so the result is identical to the
//! `charCodeAt(0)` reduction used by the browser client for any input.

use crate::models::ClassKey;

/// Sum of the leading UTF-16 code unit of every code point in `s`.
pub fn char_code_sum(s: &str) -> u64 {
    let mut buf = [0u16; 2];
    s.chars()
        .map(|c| u64::from(c.encode_utf16(&mut buf)[0]))
        .sum()
}

/// Index of the candidate chosen for a cell.
///
/// Returns `None` when there are no candidates.
pub fn seeded_index(class_key: &ClassKey, day: &str, slot_label: &str, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    // The sum is additive, so hashing the parts separately equals hashing
    // their concatenation.
    let seed = char_code_sum(class_key.as_str()) + char_code_sum(day) + char_code_sum(slot_label);
    Some((seed % len as u64) as usize)
}
