//! atomedit - editable text field core
//!
//! This crate provides the state, history, and formatting logic behind an
//! editable text widget: snapshot-based undo/redo that groups keystrokes
//! into word-sized atoms, and live thin-space digit grouping for numeric
//! literals. Rendering and clipboard transport stay with the host toolkit;
//! the host feeds translated key and mouse events in and paints the
//! resulting text out.

pub mod config;
pub mod config_paths;
pub mod editable;
pub mod format;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::EditConfig;
pub use editable::{
    EditField, FocusTarget, Key, KeyEvent, LineEdit, Modifiers, MouseEvent, StandardChord,
    TextArea, TextSnapshot, UndoRedoManager,
};
pub use format::regroup_near_cursor;
