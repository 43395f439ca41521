//! Editable text field core: buffers, selection, input events, undo/redo.
//!
//! The layering, bottom up:
//! - [`buffer`]: `TextBuffer`/`TextBufferMut` over string and rope backends
//! - [`snapshot`]: full-state captures and the [`FocusTarget`] capability
//! - [`events`]: host-translated key and mouse events
//! - [`history`]: the snapshot-stack undo manager with atom grouping
//! - [`field`]: the assembled field, wiring history and the numeric
//!   reformatter into the edit paths

pub mod buffer;
pub mod events;
pub mod field;
pub mod history;
pub mod snapshot;

pub use buffer::{RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};
pub use events::{classify_chord, Key, KeyEvent, Modifiers, MouseEvent, StandardChord};
pub use field::{EditField, FieldState, LineEdit, Selection, TextArea};
pub use history::{HistoryCommand, UndoRedoManager, DEFAULT_MAX_UNDO_DEPTH};
pub use snapshot::{FocusTarget, TextSnapshot};
