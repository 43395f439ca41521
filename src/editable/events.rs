//! Input event types for the editable field.
//!
//! The host toolkit translates its raw events into these types. Keyboard
//! modifiers travel inside the event rather than through ambient global
//! state, and standard edit chords (undo, cut, paste, ...) arrive
//! pre-classified the way the host's key-sequence tables define them;
//! `classify_chord` provides the conventional Ctrl/Cmd bindings for hosts
//! without their own tables.

/// Logical key identity, reduced to what the field's decision logic needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Backspace,
    Delete,
    Enter,
    Escape,
    /// A key producing literal text (carried in `KeyEvent::text`)
    Character,
    Other,
}

/// Keyboard modifier state at the time of the event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub logo: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        logo: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: true,
        logo: false,
    };

    /// No modifier key held at all
    pub fn is_none(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift && !self.logo
    }

    /// A command-class modifier (ctrl/alt/logo) is held; shift alone does
    /// not count, since shifted characters are still plain text input.
    pub fn has_command(&self) -> bool {
        self.ctrl || self.alt || self.logo
    }
}

/// Standard edit chords as classified by the host's key-sequence tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardChord {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    Backspace,
    Delete,
}

/// A key press or release event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    /// Standard-chord classification, if the event matches one
    pub chord: Option<StandardChord>,
    /// Literal text produced by the keystroke (empty for non-text keys)
    pub text: String,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Plain character input with no modifiers
    pub fn character(ch: char) -> Self {
        Self {
            key: Key::Character,
            chord: None,
            text: ch.to_string(),
            modifiers: Modifiers::NONE,
        }
    }

    /// A pre-classified standard chord
    pub fn chord(chord: StandardChord) -> Self {
        let key = match chord {
            StandardChord::Backspace => Key::Backspace,
            StandardChord::Delete => Key::Delete,
            _ => Key::Other,
        };
        Self {
            key,
            chord: Some(chord),
            text: String::new(),
            modifiers: Modifiers::NONE,
        }
    }

    /// An arrow-key navigation event
    pub fn arrow(key: Key, modifiers: Modifiers) -> Self {
        debug_assert!(matches!(
            key,
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight
        ));
        Self {
            key,
            chord: None,
            text: String::new(),
            modifiers,
        }
    }

    /// Build an event from raw keyboard state, classifying standard chords
    /// with the conventional Ctrl/Cmd bindings.
    pub fn from_keyboard(key: Key, text: impl Into<String>, modifiers: Modifiers) -> Self {
        let text = text.into();
        let chord = classify_chord(key, &text, modifiers);
        Self {
            key,
            chord,
            text,
            modifiers,
        }
    }
}

/// Conventional chord bindings: Ctrl/Cmd+Z undo, Ctrl/Cmd+Shift+Z or
/// Ctrl/Cmd+Y redo, Ctrl/Cmd+X/C/V cut/copy/paste, unmodified
/// Backspace/Delete.
pub fn classify_chord(key: Key, text: &str, modifiers: Modifiers) -> Option<StandardChord> {
    if modifiers.ctrl || modifiers.logo {
        let chord = match text.to_ascii_lowercase().as_str() {
            "z" if modifiers.shift => StandardChord::Redo,
            "z" => StandardChord::Undo,
            "y" => StandardChord::Redo,
            "x" => StandardChord::Cut,
            "c" => StandardChord::Copy,
            "v" => StandardChord::Paste,
            _ => return None,
        };
        return Some(chord);
    }
    match key {
        Key::Backspace => Some(StandardChord::Backspace),
        Key::Delete => Some(StandardChord::Delete),
        _ => None,
    }
}

/// A mouse press or release, already mapped by the host to a text offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// Character offset under the pointer
    pub offset: usize,
    /// Event timestamp in milliseconds
    pub timestamp_ms: u64,
}
