//! Editable field: buffer + selection state wired to the undo manager and
//! the numeric-literal reformatter.
//!
//! `FieldState` is the pure text/selection model (it implements
//! [`FocusTarget`], so the undo manager can snapshot and restore it), and
//! `EditField` layers the decision logic on top: key events route through
//! atom classification before native editing, every content change funnels
//! into `text_changed`, and reformatter-driven replacements run with the
//! suppression flag held so they stay invisible to history.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::EditConfig;
use crate::format::regroup_near_cursor;
use crate::util::is_word_char;

use super::buffer::{RopeBuffer, StringBuffer, TextBufferMut};
use super::events::{Key, KeyEvent, MouseEvent, StandardChord};
use super::history::{HistoryCommand, UndoRedoManager};
use super::snapshot::{FocusTarget, TextSnapshot};

/// Pasted text of the form `prefix{payload}` inserts only the payload.
static BRACED_PASTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^{]+\{(.+)\}$").unwrap_or_else(|e| panic!("braced-paste pattern: {e}"))
});

/// A selection as anchor/head character offsets. `head` is where the cursor
/// is; `anchor` is the fixed end. Collapsed when they coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn collapsed(pos: usize) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }
}

/// Text and selection model over a buffer backend.
#[derive(Debug, Clone, Default)]
pub struct FieldState<B: TextBufferMut> {
    buffer: B,
    selection: Selection,
    /// Preferred column for vertical cursor movement
    goal_column: Option<usize>,
}

impl<B: TextBufferMut> FieldState<B> {
    pub fn new(buffer: B) -> Self {
        Self {
            buffer,
            selection: Selection::default(),
            goal_column: None,
        }
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.selection.head
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn content(&self) -> String {
        self.buffer.content()
    }

    /// Insert at the cursor, replacing any active selection. The cursor
    /// lands after the inserted text.
    pub fn insert(&mut self, text: &str) {
        if !self.selection.is_empty() {
            let range = self.selection.range();
            let start = range.start;
            self.buffer.remove(range);
            self.selection = Selection::collapsed(start);
        }
        let at = self.selection.head;
        self.buffer.insert(at, text);
        self.selection = Selection::collapsed(at + text.chars().count());
        self.goal_column = None;
    }

    /// Backspace semantics: delete the selection, or the character before
    /// the cursor.
    pub fn delete_previous(&mut self) {
        if !self.selection.is_empty() {
            self.delete_selection();
        } else if self.selection.head > 0 {
            let at = self.selection.head - 1;
            self.buffer.remove(at..at + 1);
            self.selection = Selection::collapsed(at);
        }
        self.goal_column = None;
    }

    /// Forward-delete semantics: delete the selection, or the character
    /// after the cursor.
    pub fn delete_next(&mut self) {
        if !self.selection.is_empty() {
            self.delete_selection();
        } else if self.selection.head < self.buffer.len_chars() {
            let at = self.selection.head;
            self.buffer.remove(at..at + 1);
        }
        self.goal_column = None;
    }

    /// Remove the selected range, collapsing the cursor to its start.
    pub fn delete_selection(&mut self) {
        if !self.selection.is_empty() {
            let range = self.selection.range();
            let start = range.start;
            self.buffer.remove(range);
            self.selection = Selection::collapsed(start);
        }
        self.goal_column = None;
    }

    /// Text currently selected, if any.
    pub fn selected_text(&self) -> Option<String> {
        if self.selection.is_empty() {
            None
        } else {
            Some(self.buffer.slice(self.selection.range()))
        }
    }

    pub fn move_left(&mut self, extend: bool) {
        self.goal_column = None;
        if !extend && !self.selection.is_empty() {
            self.selection = Selection::collapsed(self.selection.start());
            return;
        }
        if self.selection.head > 0 {
            self.selection.head -= 1;
        }
        if !extend {
            self.selection.anchor = self.selection.head;
        }
    }

    pub fn move_right(&mut self, extend: bool) {
        self.goal_column = None;
        if !extend && !self.selection.is_empty() {
            self.selection = Selection::collapsed(self.selection.end());
            return;
        }
        if self.selection.head < self.buffer.len_chars() {
            self.selection.head += 1;
        }
        if !extend {
            self.selection.anchor = self.selection.head;
        }
    }

    pub fn move_up(&mut self, extend: bool) {
        self.move_vertical(-1, extend);
    }

    pub fn move_down(&mut self, extend: bool) {
        self.move_vertical(1, extend);
    }

    fn move_vertical(&mut self, delta: isize, extend: bool) {
        let (line, column) = self.buffer.offset_to_position(self.selection.head);
        let goal = *self.goal_column.get_or_insert(column);
        let target_line = line.saturating_add_signed(delta);
        let new_head = if delta < 0 && line == 0 {
            0
        } else if target_line >= self.buffer.line_count() {
            self.buffer.len_chars()
        } else {
            self.buffer.position_to_offset(target_line, goal)
        };
        self.selection.head = new_head;
        if !extend {
            self.selection.anchor = new_head;
        }
    }

    pub fn set_cursor(&mut self, offset: usize) {
        let clamped = offset.min(self.buffer.len_chars());
        self.selection = Selection::collapsed(clamped);
        self.goal_column = None;
    }

    pub fn select_range(&mut self, range: Range<usize>) {
        let len = self.buffer.len_chars();
        self.selection = Selection {
            anchor: range.start.min(len),
            head: range.end.min(len),
        };
        self.goal_column = None;
    }

    pub fn select_all(&mut self) {
        self.select_range(0..self.buffer.len_chars());
    }

    /// Select the word under the cursor (alphanumeric/underscore run).
    pub fn select_word(&mut self) {
        let len = self.buffer.len_chars();
        if len == 0 {
            return;
        }
        let pos = self.selection.head.min(len);
        // Anchor on the character at the cursor, or just before it at
        // end-of-word positions.
        let probe = if pos < len && self.buffer.char_at(pos).is_some_and(is_word_char) {
            pos
        } else if pos > 0 && self.buffer.char_at(pos - 1).is_some_and(is_word_char) {
            pos - 1
        } else {
            return;
        };
        let mut start = probe;
        while start > 0 && self.buffer.char_at(start - 1).is_some_and(is_word_char) {
            start -= 1;
        }
        let mut end = probe + 1;
        while end < len && self.buffer.char_at(end).is_some_and(is_word_char) {
            end += 1;
        }
        self.select_range(start..end);
    }

    /// Select the line containing the cursor, excluding its newline.
    pub fn select_line(&mut self) {
        let (line, _) = self.buffer.offset_to_position(self.selection.head);
        let start = self.buffer.position_to_offset(line, 0);
        let end = start + self.buffer.line_length(line);
        self.select_range(start..end);
    }

    /// Remove an arbitrary range without touching the selection beyond
    /// clamping it back into bounds. Reformatter plumbing.
    pub fn remove_range(&mut self, range: Range<usize>) {
        self.buffer.remove(range);
        let len = self.buffer.len_chars();
        self.selection.anchor = self.selection.anchor.min(len);
        self.selection.head = self.selection.head.min(len);
    }
}

impl<B: TextBufferMut> FocusTarget for FieldState<B> {
    fn text_state(&self) -> TextSnapshot {
        TextSnapshot::new(
            self.buffer.content(),
            self.selection.start(),
            self.selection.end(),
            self.selection.head,
        )
    }

    fn set_text_state(&mut self, state: &TextSnapshot) {
        self.buffer.set_content(&state.text);
        if state.selection_begin == state.selection_end {
            self.selection = Selection::collapsed(state.cursor_position);
        } else {
            // The cursor is the head; the anchor is the other end.
            let anchor = if state.cursor_position == state.selection_begin {
                state.selection_end
            } else {
                state.selection_begin
            };
            self.selection = Selection {
                anchor,
                head: state.cursor_position,
            };
        }
        self.goal_column = None;
    }

    fn selected_count(&self) -> usize {
        self.selection.len()
    }
}

/// Editable field wiring a [`FieldState`] to undo history and the numeric
/// reformatter.
#[derive(Debug, Clone)]
pub struct EditField<B: TextBufferMut> {
    state: FieldState<B>,
    history: UndoRedoManager,
    config: EditConfig,
    /// While set, `text_changed` and insert classification are inert;
    /// covers undo/redo restores and reformatter replacements.
    suppress_change: bool,
    /// Bumped on every observable content change
    revision: u64,
    /// Offset and timestamp of an in-flight mouse press
    pressed: Option<(usize, u64)>,
}

/// Single-line editable field over a string buffer.
pub type LineEdit = EditField<StringBuffer>;

/// Multi-line editable field over a rope buffer.
pub type TextArea = EditField<RopeBuffer>;

impl<B: TextBufferMut + Default> EditField<B> {
    pub fn new() -> Self {
        Self::with_config(EditConfig::default())
    }

    pub fn with_config(config: EditConfig) -> Self {
        Self {
            state: FieldState::new(B::default()),
            history: UndoRedoManager::with_max_depth(config.max_undo_depth),
            config,
            suppress_change: false,
            revision: 0,
            pressed: None,
        }
    }

    pub fn with_text(text: &str) -> Self {
        let mut field = Self::new();
        field.set_text_no_undo(text);
        field
    }
}

impl<B: TextBufferMut + Default> Default for EditField<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: TextBufferMut> EditField<B> {
    pub fn text(&self) -> String {
        self.state.content()
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    pub fn selection(&self) -> Selection {
        self.state.selection()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn config(&self) -> &EditConfig {
        &self.config
    }

    /// Route a key press: history classification first, then native
    /// editing unless the event was consumed.
    pub fn key_press(&mut self, event: &KeyEvent) -> bool {
        if self.history.on_key_press(event, &self.state) {
            return true;
        }

        match event.chord {
            // Clipboard transport is the host's job; the snapshot for these
            // was already captured during classification.
            Some(StandardChord::Cut)
            | Some(StandardChord::Copy)
            | Some(StandardChord::Paste) => return false,
            Some(StandardChord::Backspace) => {
                self.state.delete_previous();
                self.text_changed();
                return true;
            }
            Some(StandardChord::Delete) => {
                self.state.delete_next();
                self.text_changed();
                return true;
            }
            _ => {}
        }

        match event.key {
            Key::ArrowLeft => {
                self.state.move_left(event.modifiers.shift);
                true
            }
            Key::ArrowRight => {
                self.state.move_right(event.modifiers.shift);
                true
            }
            Key::ArrowUp => {
                self.state.move_up(event.modifiers.shift);
                true
            }
            Key::ArrowDown => {
                self.state.move_down(event.modifiers.shift);
                true
            }
            _ => {
                if !event.modifiers.has_command() && !event.text.is_empty() {
                    self.state.insert(&event.text);
                    self.text_changed();
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Route a key release: undo/redo chords execute here.
    pub fn key_release(&mut self, event: &KeyEvent) -> bool {
        match self.history.release_command(event) {
            Some(HistoryCommand::Undo) => {
                self.undo();
                true
            }
            Some(HistoryCommand::Redo) => {
                self.redo();
                true
            }
            None => false,
        }
    }

    /// Revert one undo step. The restore itself must not re-enter change
    /// handling, so the suppression flag is held across it.
    pub fn undo(&mut self) -> bool {
        self.suppress_change = true;
        let changed = self.history.execute_undo(&mut self.state);
        self.suppress_change = false;
        if changed {
            self.revision += 1;
        }
        changed
    }

    /// Re-apply one undone step.
    pub fn redo(&mut self) -> bool {
        self.suppress_change = true;
        let changed = self.history.execute_redo(&mut self.state);
        self.suppress_change = false;
        if changed {
            self.revision += 1;
        }
        changed
    }

    /// Programmatic insertion at the cursor. Runs atom classification
    /// unless a suppressed (reformatter-internal) change is in progress.
    pub fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.suppress_change {
            self.history.record_insert(text, &self.state);
        }
        self.state.insert(text);
        self.text_changed();
    }

    /// Delete the character before the cursor (or the selection) as one
    /// undo step.
    pub fn delete_previous_character(&mut self) {
        self.history.push_undo(&self.state);
        self.state.delete_previous();
        self.text_changed();
    }

    /// Delete the selection as one undo step. Returns whether anything
    /// was removed.
    pub fn delete_selection(&mut self) -> bool {
        if self.state.selected_count() == 0 {
            return false;
        }
        self.history.push_undo(&self.state);
        self.state.delete_selection();
        self.text_changed();
        true
    }

    /// Copy out the selected text without modifying anything.
    pub fn copy(&self) -> Option<String> {
        self.state.selected_text()
    }

    /// Cut: returns the removed selection for the host's clipboard.
    pub fn cut(&mut self) -> Option<String> {
        let removed = self.state.selected_text()?;
        self.history.push_undo(&self.state);
        self.state.delete_selection();
        self.text_changed();
        Some(removed)
    }

    /// Paste clipboard text at the cursor as one undo step.
    ///
    /// Text shaped like `name{payload}` inserts only the payload, so
    /// copied `identifier{...}` definitions paste as their body.
    pub fn paste(&mut self, clipboard: &str) {
        let payload = match BRACED_PASTE.captures(clipboard) {
            Some(caps) => match caps.get(1) {
                Some(m) => m.as_str().to_string(),
                None => clipboard.to_string(),
            },
            None => clipboard.to_string(),
        };
        if payload.is_empty() {
            return;
        }
        self.history.push_undo(&self.state);
        // Snapshot already taken; plain insertion must not push again.
        self.suppress_change = true;
        self.state.insert(&payload);
        self.suppress_change = false;
        self.text_changed();
    }

    pub fn select_all(&mut self) {
        self.state.select_all();
    }

    /// Place the cursor programmatically. Like a click, the movement marks
    /// a deferred history boundary.
    pub fn set_cursor(&mut self, offset: usize) {
        self.history.defer_next_push();
        self.state.set_cursor(offset);
    }

    pub fn select_word(&mut self) {
        self.state.select_word();
    }

    pub fn select_line(&mut self) {
        self.state.select_line();
    }

    /// Replace all content for a host-driven document load. Prior history
    /// is wiped; the emptied state is pushed as the single undoable
    /// baseline, so one undo empties the field.
    pub fn set_text_no_undo(&mut self, text: &str) {
        self.clear_no_undo();
        self.history.push_undo(&self.state);
        // The multi-character push inside insert_text de-duplicates
        // against the baseline just captured.
        self.insert_text(text);
    }

    /// Clear all content and history without recording anything.
    pub fn clear_no_undo(&mut self) {
        self.history.clear();
        self.suppress_change = true;
        self.state.set_text_state(&TextSnapshot::collapsed("", 0));
        self.suppress_change = false;
        self.text_changed();
    }

    /// Mouse press: place the cursor, remember the spot for release
    /// handling, and mark the movement as a deferred history boundary.
    pub fn mouse_press(&mut self, event: MouseEvent) {
        self.history.defer_next_push();
        self.state.set_cursor(event.offset);
        self.pressed = Some((event.offset, event.timestamp_ms));
    }

    /// Mouse release. A long press (when enabled, held past the threshold,
    /// without dragging) is reported back to the host; otherwise the cursor
    /// stays where the press put it.
    pub fn mouse_release(&mut self, event: MouseEvent) -> Option<usize> {
        let (offset, pressed_at) = self.pressed.take()?;
        let held_ms = event.timestamp_ms.saturating_sub(pressed_at);
        if self.config.support_long_press
            && held_ms >= self.config.long_press_threshold_ms
            && event.offset == offset
        {
            return Some(offset);
        }
        self.state.set_cursor(offset);
        None
    }

    /// Central change hook: every content mutation lands here. Runs the
    /// numeric reformatter (unless suppressed) and bumps the revision.
    fn text_changed(&mut self) {
        if self.suppress_change {
            return;
        }

        if self.config.numeric_thin_spaces {
            let content = self.state.content();
            if let Some(m) = regroup_near_cursor(&content, self.state.cursor()) {
                let changed = self.state.buffer.slice(m.start..m.end) != m.formatted;
                if changed {
                    tracing::trace!(start = m.start, end = m.end, "regroup literal");
                    // Replace through the normal insert path with change
                    // handling suppressed, so the rewrite is invisible to
                    // history and cannot recurse.
                    self.suppress_change = true;
                    self.state.remove_range(m.start..m.end);
                    self.state.set_cursor(m.start);
                    self.state.insert(&m.formatted);
                    self.suppress_change = false;
                }
            }
        }

        self.revision += 1;
    }
}
