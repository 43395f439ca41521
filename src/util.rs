//! Shared character classification for undo-atom boundaries and literal grammars

/// The digit-grouping separator inserted between digit groups.
/// Distinct from a regular space; stripped and reinserted on every reformat pass.
pub const THIN_SPACE: char = '\u{2009}';

/// Check if a character continues an identifier or number token.
///
/// The undo manager splits atoms where this predicate flips from false to
/// true, and the reformatter's grammars accept the same character set inside
/// a literal. Keeping both subsystems on one predicate guarantees they agree
/// on what counts as "inside a token".
pub fn is_identifier_or_number(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '.' || ch == THIN_SPACE
}

/// Check if a character extends a word for neighbor/isolation checks
/// (alphanumeric or underscore; thin space and `.` do not count here).
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
