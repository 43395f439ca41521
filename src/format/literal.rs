//! Numeric-literal detection around the cursor.
//!
//! After every content change the field asks this module whether the edit
//! position sits inside a numeric literal that needs its digit groups
//! refreshed. The scan grows a candidate span outward from the cursor one
//! character at a time, accepting each growth step only while the candidate
//! still matches the literal grammar (thin-space separators count as part
//! of the literal, so an already-grouped number rescans cleanly).
//!
//! Decimal is tried first. When the decimal span fails its isolation check
//! (a word character touches it, as the `x` in `0x12` does), the scan
//! retries with the hex/binary grammars, whose leftward growth passes
//! through the partially-built prefix (`x?...` / `b?...`) before the strict
//! `0x...` / `0b...` form is reached.

use std::sync::LazyLock;

use regex::Regex;

use crate::util::{is_word_char, THIN_SPACE};

use super::grouping::{group_decimal, group_prefixed};

fn literal_pattern(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("literal pattern {pattern:?}: {e}"))
}

/// Decimal digits with an optional fraction, separators allowed anywhere.
static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| literal_pattern(r"^[0-9\u{2009}]+\.?[0-9\u{2009}]*$"));

/// Leftward-growth form of a hex literal: the `0` of the prefix arrives last.
static PARTIAL_HEX: LazyLock<Regex> =
    LazyLock::new(|| literal_pattern(r"(?i)^x?[0-9a-f\u{2009}]+\.?[0-9a-f\u{2009}]*$"));

/// Leftward-growth form of a binary literal.
static PARTIAL_BIN: LazyLock<Regex> =
    LazyLock::new(|| literal_pattern(r"(?i)^b?[01\u{2009}]+\.?[01\u{2009}]*$"));

/// Complete hex literal including the prefix.
static HEX: LazyLock<Regex> =
    LazyLock::new(|| literal_pattern(r"(?i)^0x[0-9a-f\u{2009}]+\.?[0-9a-f\u{2009}]*$"));

/// Complete binary literal including the prefix.
static BIN: LazyLock<Regex> =
    LazyLock::new(|| literal_pattern(r"(?i)^0b[01\u{2009}]+\.?[01\u{2009}]*$"));

/// A literal found near the cursor, with its regrouped replacement text.
/// Offsets are character offsets into the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralMatch {
    pub start: usize,
    pub end: usize,
    pub formatted: String,
}

/// Scan for a numeric literal at the cursor and compute its regrouped form.
///
/// Returns None when the cursor does not sit in a well-formed, isolated
/// literal; the caller leaves the text untouched in that case.
pub fn regroup_near_cursor(text: &str, cursor: usize) -> Option<LiteralMatch> {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    let (start, end, candidate) = scan(&chars, cursor, decimal_accepts_left, decimal_accepts_right);

    if isolated(&chars, start, end) {
        let raw: String = candidate.chars().filter(|&c| c != THIN_SPACE).collect();
        if raw != "." && DECIMAL.is_match(&raw) {
            return Some(LiteralMatch {
                start,
                end,
                formatted: group_decimal(&raw),
            });
        }
        // Isolated but not a valid literal (for instance a bare dot):
        // nothing to do here, and no other grammar will fare better.
        return None;
    }

    // A word character touches the decimal span; the blocker may be a
    // hex or binary prefix, so rescan with those grammars.
    let (start, end, candidate) = scan(&chars, cursor, prefixed_accepts_left, prefixed_accepts_right);
    if !isolated(&chars, start, end) {
        return None;
    }

    let raw: String = candidate.chars().filter(|&c| c != THIN_SPACE).collect();
    if HEX.is_match(&raw) || BIN.is_match(&raw) {
        Some(LiteralMatch {
            start,
            end,
            formatted: group_prefixed(&raw),
        })
    } else {
        None
    }
}

fn decimal_accepts_left(candidate: &str) -> bool {
    candidate == "." || DECIMAL.is_match(candidate)
}

fn decimal_accepts_right(candidate: &str) -> bool {
    DECIMAL.is_match(candidate)
}

fn prefixed_accepts_left(candidate: &str) -> bool {
    candidate == "."
        || PARTIAL_HEX.is_match(candidate)
        || HEX.is_match(candidate)
        || PARTIAL_BIN.is_match(candidate)
        || BIN.is_match(candidate)
}

fn prefixed_accepts_right(candidate: &str) -> bool {
    HEX.is_match(candidate) || BIN.is_match(candidate)
}

/// Grow a span outward from the cursor, leftward first, keeping each step
/// only while the acceptance predicate holds for the grown candidate.
fn scan(
    chars: &[char],
    cursor: usize,
    accepts_left: fn(&str) -> bool,
    accepts_right: fn(&str) -> bool,
) -> (usize, usize, String) {
    let mut start = cursor;
    let mut end = cursor;
    let mut candidate = String::new();

    while start > 0 {
        let mut probe = String::with_capacity(candidate.len() + 4);
        probe.push(chars[start - 1]);
        probe.push_str(&candidate);
        if !accepts_left(&probe) {
            break;
        }
        candidate = probe;
        start -= 1;
    }

    while end < chars.len() {
        let mut probe = candidate.clone();
        probe.push(chars[end]);
        if !accepts_right(&probe) {
            break;
        }
        candidate = probe;
        end += 1;
    }

    (start, end, candidate)
}

/// A span is isolated when no word character touches either edge.
fn isolated(chars: &[char], start: usize, end: usize) -> bool {
    let left_ok = start == 0 || !is_word_char(chars[start - 1]);
    let right_ok = end == chars.len() || !is_word_char(chars[end]);
    left_ok && right_ok
}
