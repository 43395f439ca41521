//! In-place digit grouping for numeric literals.
//!
//! Long numbers are hard to read without separators, so the field inserts
//! thin spaces (U+2009) between digit groups as the user types, and keeps
//! them correct as the literal is edited. The separator is part of the
//! display text but never part of the literal's value: every pass strips
//! the old separators before validating and regrouping.

mod grouping;
mod literal;

pub use grouping::{group_decimal, group_prefixed};
pub use literal::{regroup_near_cursor, LiteralMatch};
