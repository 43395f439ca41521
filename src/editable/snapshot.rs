//! Text state snapshots and the focus-target capability.

/// Immutable capture of the full text content plus selection and cursor
/// offsets at one instant. Equality is structural; the undo manager relies
/// on it for its same-as-top de-duplication check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSnapshot {
    pub text: String,
    /// Start of the selection range (character offset)
    pub selection_begin: usize,
    /// End of the selection range (character offset, >= selection_begin)
    pub selection_end: usize,
    /// Cursor position (character offset)
    pub cursor_position: usize,
}

impl TextSnapshot {
    pub fn new(
        text: String,
        selection_begin: usize,
        selection_end: usize,
        cursor_position: usize,
    ) -> Self {
        let len = text.chars().count();
        debug_assert!(selection_begin <= selection_end);
        debug_assert!(selection_end <= len);
        debug_assert!(cursor_position <= len);
        Self {
            text,
            selection_begin,
            selection_end,
            cursor_position,
        }
    }

    /// Snapshot with a collapsed selection at the cursor
    pub fn collapsed(text: impl Into<String>, cursor: usize) -> Self {
        Self::new(text.into(), cursor, cursor, cursor)
    }

    /// Number of selected characters
    pub fn selected_count(&self) -> usize {
        self.selection_end - self.selection_begin
    }
}

/// Capability interface over whichever concrete widget currently has focus.
///
/// The undo manager depends only on this trait; each widget backend
/// implements it, replacing the original design's runtime widget-type
/// dispatch with plain polymorphism.
pub trait FocusTarget {
    /// Capture the current live text, selection, and cursor
    fn text_state(&self) -> TextSnapshot;

    /// Restore a previously captured state
    fn set_text_state(&mut self, state: &TextSnapshot);

    /// Number of characters in the active selection
    fn selected_count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = TextSnapshot::new("abc".into(), 1, 2, 2);
        let b = TextSnapshot::new("abc".into(), 1, 2, 2);
        assert_eq!(a, b);

        let c = TextSnapshot::new("abc".into(), 1, 2, 1);
        assert_ne!(a, c);
    }

    #[test]
    fn test_collapsed() {
        let s = TextSnapshot::collapsed("hello", 3);
        assert_eq!(s.selection_begin, 3);
        assert_eq!(s.selection_end, 3);
        assert_eq!(s.cursor_position, 3);
        assert_eq!(s.selected_count(), 0);
    }

    #[test]
    fn test_selected_count() {
        let s = TextSnapshot::new("hello".into(), 1, 4, 4);
        assert_eq!(s.selected_count(), 3);
    }
}
