//! Snapshot-based undo/redo with atom-grained edit grouping.
//!
//! The manager keeps full-state snapshots on two bounded stacks instead of
//! per-keystroke operations, so that one undo step reverts one logical chunk
//! of typing. Adjacent insertions are grouped into "atoms" split at
//! identifier/number boundaries: typing `abc def` costs two undo steps, not
//! seven. The live state is never stored on either stack; it exists only in
//! the focus target, between the undo states and the redo states.

use std::collections::VecDeque;

use crate::util::is_identifier_or_number;

use super::events::{Key, KeyEvent, StandardChord};
use super::snapshot::{FocusTarget, TextSnapshot};

/// Default bound on the undo stack depth.
pub const DEFAULT_MAX_UNDO_DEPTH: usize = 100;

/// Undo or redo, as classified from a key-release event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryCommand {
    Undo,
    Redo,
}

/// Undo/redo manager over a [`FocusTarget`].
#[derive(Debug, Clone)]
pub struct UndoRedoManager {
    undo_stack: VecDeque<TextSnapshot>,
    redo_stack: Vec<TextSnapshot>,
    /// Characters typed since the last push; used only to decide atom
    /// boundaries, cleared on every push, undo, or redo.
    do_state: String,
    /// Set by cursor-only movement; forces a push before the next
    /// content-changing edit instead of pushing for the movement itself.
    deferred_push: bool,
    max_depth: usize,
}

impl Default for UndoRedoManager {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoRedoManager {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_UNDO_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            do_state: String::new(),
            deferred_push: false,
            max_depth: max_depth.max(1),
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Postpone the snapshot for a pure cursor movement until the next
    /// content-changing edit.
    pub fn defer_next_push(&mut self) {
        self.deferred_push = true;
    }

    pub fn deferred_push_pending(&self) -> bool {
        self.deferred_push
    }

    /// Wipe both stacks and all transient classification state.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.do_state.clear();
        self.deferred_push = false;
    }

    /// Capture the current live state onto the undo stack.
    ///
    /// Evicts the oldest entry at capacity, clears the redo stack
    /// unconditionally, and resets the do-state. The push itself is skipped
    /// when the new snapshot is field-for-field identical to the undo top;
    /// the redo top is never consulted.
    pub fn push_undo(&mut self, target: &impl FocusTarget) {
        self.deferred_push = false;

        while self.undo_stack.len() >= self.max_depth {
            self.undo_stack.pop_front();
        }

        self.redo_stack.clear();

        let current = target.text_state();
        if self.undo_stack.back() != Some(&current) {
            tracing::debug!(
                depth = self.undo_stack.len() + 1,
                cursor = current.cursor_position,
                "push undo snapshot"
            );
            self.undo_stack.push_back(current);
        }

        self.do_state.clear();
    }

    /// Restore the most recent undo snapshot. No-op on an empty stack.
    ///
    /// The current live state goes onto the redo stack unconditionally so
    /// the step can be reversed.
    pub fn execute_undo(&mut self, target: &mut impl FocusTarget) -> bool {
        let Some(prior) = self.undo_stack.pop_back() else {
            return false;
        };
        self.redo_stack.push(target.text_state());
        target.set_text_state(&prior);
        self.do_state.clear();
        tracing::debug!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "undo"
        );
        true
    }

    /// Restore the most recent redo snapshot. No-op on an empty stack.
    pub fn execute_redo(&mut self, target: &mut impl FocusTarget) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push_back(target.text_state());
        target.set_text_state(&next);
        self.do_state.clear();
        tracing::debug!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "redo"
        );
        true
    }

    /// Classify a key-press event, deciding whether a snapshot must be
    /// captured before the edit proceeds.
    ///
    /// Returns true when the event is fully handled here and the caller must
    /// suppress native handling. Undo/redo chords are marked handled on
    /// press (blocking the host's own history) and executed on release.
    pub fn on_key_press(&mut self, event: &KeyEvent, target: &impl FocusTarget) -> bool {
        match event.chord {
            Some(StandardChord::Undo) | Some(StandardChord::Redo) => {
                // Otherwise native undo will trash the text
                return true;
            }
            Some(StandardChord::Backspace)
            | Some(StandardChord::Delete)
            | Some(StandardChord::Cut)
            | Some(StandardChord::Paste) => {
                // Destructive edits always start a fresh atom
                self.push_undo(target);
                return false;
            }
            Some(StandardChord::Copy) => return false,
            None => {}
        }

        match event.key {
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight => {
                // Avoid a series of cursor-movement pushes; the position must
                // still be restorable if text is typed afterwards.
                self.deferred_push = true;
                false
            }
            _ => {
                if event.modifiers.is_none() && !event.text.is_empty() {
                    self.classify_plain_input(&event.text, target);
                }
                false
            }
        }
    }

    /// Classify a key-release event. Execution of the returned command is
    /// the caller's job, wrapped with the change-suppression flag held.
    pub fn release_command(&self, event: &KeyEvent) -> Option<HistoryCommand> {
        match event.chord {
            Some(StandardChord::Undo) => Some(HistoryCommand::Undo),
            Some(StandardChord::Redo) => Some(HistoryCommand::Redo),
            _ => None,
        }
    }

    /// Atom-boundary evaluation for the programmatic `insert_text` path.
    /// Multi-character insertions always break atom continuation.
    pub fn record_insert(&mut self, text: &str, target: &impl FocusTarget) {
        if text.is_empty() {
            return;
        }

        self.redo_stack.clear();

        if self.deferred_push || self.undo_stack.is_empty() {
            self.push_undo(target);
        } else if text.chars().nth(1).is_some() {
            self.push_undo(target);
        } else if let (Some(last), Some(first)) =
            (self.do_state.chars().last(), text.chars().next())
        {
            if !is_identifier_or_number(last) && is_identifier_or_number(first) {
                self.push_undo(target);
            }
        }

        self.do_state.push_str(text);
    }

    fn classify_plain_input(&mut self, text: &str, target: &impl FocusTarget) {
        self.redo_stack.clear();

        if self.deferred_push || self.undo_stack.is_empty() || target.selected_count() > 0 {
            // A selection is about to be replaced: always an atom boundary
            self.push_undo(target);
        } else if let (Some(last), Some(first)) = (self.do_state.chars().last(), text.chars().next())
        {
            // Entering a new identifier or number starts a new atom;
            // continuing one does not.
            if !is_identifier_or_number(last) && is_identifier_or_number(first) {
                self.push_undo(target);
            }
        }

        self.do_state.push_str(text);
    }
}
