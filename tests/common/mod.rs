//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use atomedit::editable::{Key, KeyEvent, LineEdit, Modifiers, StandardChord};
use atomedit::util::THIN_SPACE;

/// Type a string into a field one keystroke at a time, through the full
/// press classification path.
pub fn type_str(field: &mut LineEdit, text: &str) {
    for ch in text.chars() {
        field.key_press(&KeyEvent::character(ch));
    }
}

/// Press and release an undo chord
pub fn undo(field: &mut LineEdit) {
    let ev = KeyEvent::chord(StandardChord::Undo);
    field.key_press(&ev);
    field.key_release(&ev);
}

/// Press and release a redo chord
pub fn redo(field: &mut LineEdit) {
    let ev = KeyEvent::chord(StandardChord::Redo);
    field.key_press(&ev);
    field.key_release(&ev);
}

/// Tap an arrow key with no modifiers
pub fn arrow(field: &mut LineEdit, key: Key) {
    field.key_press(&KeyEvent::arrow(key, Modifiers::NONE));
}

/// Join parts with the thin-space digit separator
pub fn ts(parts: &[&str]) -> String {
    parts.join(&THIN_SPACE.to_string())
}
