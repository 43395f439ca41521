//! Digit-group assembly for validated numeric literals.
//!
//! Inputs here are already stripped of separators and matched against the
//! strict grammar; this module only decides where the thin spaces go.
//!
//! Decimal literals group in threes: the integer part is grouped from the
//! right (`12345` -> `12 345`) and the fraction from the left
//! (`.6789` -> `.678 9`). Hex and binary literals group in fours from the
//! left, with the two-character prefix counted into the first group
//! (`0x123456789ABC` -> `0x12 3456 789A BC`).

use crate::util::THIN_SPACE;

/// Regroup a bare decimal literal (digits with an optional fraction).
pub fn group_decimal(raw: &str) -> String {
    match raw.split_once('.') {
        Some((int_part, frac_part)) => {
            let mut out = group_right(int_part, 3);
            out.push('.');
            out.push_str(&group_left(frac_part, 3));
            out
        }
        None => group_right(raw, 3),
    }
}

/// Regroup a prefixed (hex or binary) literal, prefix included in the
/// grouping.
pub fn group_prefixed(raw: &str) -> String {
    match raw.split_once('.') {
        Some((int_part, frac_part)) => {
            let mut out = group_left(int_part, 4);
            out.push('.');
            out.push_str(&group_left(frac_part, 4));
            out
        }
        None => group_left(raw, 4),
    }
}

/// Insert separators every `size` characters, anchored at the left edge.
fn group_left(raw: &str, size: usize) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len() + chars.len() / size * 3);
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && i % size == 0 {
            out.push(THIN_SPACE);
        }
        out.push(*ch);
    }
    out
}

/// Insert separators every `size` characters, anchored at the right edge.
fn group_right(raw: &str, size: usize) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let len = chars.len();
    let mut out = String::with_capacity(raw.len() + len / size * 3);
    for (i, ch) in chars.iter().enumerate() {
        let remaining = len - i;
        if i > 0 && remaining % size == 0 {
            out.push(THIN_SPACE);
        }
        out.push(*ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(parts: &[&str]) -> String {
        parts.join(&THIN_SPACE.to_string())
    }

    #[test]
    fn test_decimal_integer_groups_from_right() {
        assert_eq!(group_decimal("1"), "1");
        assert_eq!(group_decimal("123"), "123");
        assert_eq!(group_decimal("1234"), ts(&["1", "234"]));
        assert_eq!(group_decimal("12345"), ts(&["12", "345"]));
        assert_eq!(group_decimal("1234567"), ts(&["1", "234", "567"]));
    }

    #[test]
    fn test_decimal_fraction_groups_from_left() {
        let formatted = group_decimal("12345.6789");
        assert_eq!(
            formatted,
            format!("12{TS}345.678{TS}9", TS = THIN_SPACE)
        );
    }

    #[test]
    fn test_decimal_trailing_dot() {
        assert_eq!(group_decimal("1234."), format!("1{}234.", THIN_SPACE));
    }

    #[test]
    fn test_prefixed_counts_prefix_into_first_group() {
        assert_eq!(group_prefixed("0x1"), "0x1");
        assert_eq!(group_prefixed("0x12"), "0x12");
        assert_eq!(group_prefixed("0x123"), ts(&["0x12", "3"]));
        assert_eq!(
            group_prefixed("0x123456789ABC"),
            ts(&["0x12", "3456", "789A", "BC"])
        );
    }

    #[test]
    fn test_prefixed_binary() {
        assert_eq!(group_prefixed("0b1010"), ts(&["0b10", "10"]));
        assert_eq!(group_prefixed("0b10101010"), ts(&["0b10", "1010", "10"]));
    }

    #[test]
    fn test_prefixed_fraction() {
        assert_eq!(
            group_prefixed("0xAB.CDEF12"),
            format!("0xAB.CDEF{}12", THIN_SPACE)
        );
    }
}
