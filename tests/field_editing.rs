//! Field editing tests - clipboard, selection, mouse, document loads

mod common;

use atomedit::config::EditConfig;
use atomedit::editable::{
    EditField, Key, KeyEvent, LineEdit, Modifiers, MouseEvent, StandardChord, TextArea,
};
use common::{arrow, ts, type_str, undo};

// ========================================================================
// Clipboard flows
// ========================================================================

#[test]
fn test_cut_undo_redo() {
    let mut field = LineEdit::new();
    type_str(&mut field, "hello world");
    field.select_all();

    let removed = field.cut();
    assert_eq!(removed.as_deref(), Some("hello world"));
    assert_eq!(field.text(), "");

    undo(&mut field);
    assert_eq!(field.text(), "hello world");
}

#[test]
fn test_paste_is_one_undo_step() {
    let mut field = LineEdit::new();
    type_str(&mut field, "start ");
    field.paste("pasted text");
    assert_eq!(field.text(), "start pasted text");

    undo(&mut field);
    assert_eq!(field.text(), "start ");
}

#[test]
fn test_paste_extracts_braced_payload() {
    let mut field = LineEdit::new();
    field.paste("definition{a + b}");
    assert_eq!(field.text(), "a + b");
}

#[test]
fn test_paste_without_prefix_is_verbatim() {
    let mut field = LineEdit::new();
    field.paste("{a + b}");
    assert_eq!(field.text(), "{a + b}");
}

#[test]
fn test_paste_numeric_literal_gets_grouped() {
    let mut field = LineEdit::new();
    field.paste("1234567");
    assert_eq!(field.text(), ts(&["1", "234", "567"]));
}

#[test]
fn test_copy_leaves_text_alone() {
    let mut field = LineEdit::new();
    type_str(&mut field, "abc");
    field.select_all();
    assert_eq!(field.copy().as_deref(), Some("abc"));
    assert_eq!(field.text(), "abc");
    assert_eq!(field.redo_depth(), 0);
}

#[test]
fn test_clipboard_chords_left_to_host() {
    let mut field = LineEdit::new();
    type_str(&mut field, "abc");
    field.select_all();

    // The chord only captures a snapshot; the host performs the transport
    // and calls cut()/paste() itself.
    let depth = field.undo_depth();
    assert!(!field.key_press(&KeyEvent::chord(StandardChord::Paste)));
    assert_eq!(field.text(), "abc");
    assert_eq!(field.undo_depth(), depth + 1);
}

// ========================================================================
// Selection
// ========================================================================

#[test]
fn test_typing_over_selection() {
    let mut field = LineEdit::new();
    type_str(&mut field, "hello");
    field.select_all();
    type_str(&mut field, "bye");
    assert_eq!(field.text(), "bye");

    undo(&mut field);
    assert_eq!(field.text(), "hello");
}

#[test]
fn test_select_word_then_cut() {
    let mut field = LineEdit::new();
    type_str(&mut field, "foo bar_baz qux");
    // Park the cursor inside the middle word
    for _ in 0..6 {
        arrow(&mut field, Key::ArrowLeft);
    }
    field.select_word();
    assert_eq!(field.cut().as_deref(), Some("bar_baz"));
    assert_eq!(field.text(), "foo  qux");
}

#[test]
fn test_delete_selection_is_undoable() {
    let mut field = LineEdit::new();
    type_str(&mut field, "abcdef");
    field.select_all();
    assert!(field.delete_selection());
    assert_eq!(field.text(), "");

    undo(&mut field);
    assert_eq!(field.text(), "abcdef");
}

#[test]
fn test_shift_arrows_select() {
    let mut field = LineEdit::new();
    type_str(&mut field, "abcd");
    field.key_press(&KeyEvent::arrow(Key::ArrowLeft, Modifiers::SHIFT));
    field.key_press(&KeyEvent::arrow(Key::ArrowLeft, Modifiers::SHIFT));
    assert_eq!(field.copy().as_deref(), Some("cd"));
}

// ========================================================================
// Mouse
// ========================================================================

#[test]
fn test_click_places_cursor_and_splits_atom() {
    let mut field = LineEdit::new();
    type_str(&mut field, "hello");
    assert_eq!(field.undo_depth(), 1);

    field.mouse_press(MouseEvent {
        offset: 2,
        timestamp_ms: 100,
    });
    assert_eq!(
        field.mouse_release(MouseEvent {
            offset: 2,
            timestamp_ms: 180,
        }),
        None
    );
    assert_eq!(field.cursor(), 2);

    type_str(&mut field, "x");
    assert_eq!(field.text(), "hexllo");
    assert_eq!(field.undo_depth(), 2);
}

#[test]
fn test_long_press_when_enabled() {
    let mut config = EditConfig::default();
    config.support_long_press = true;
    let mut field: LineEdit = EditField::with_config(config);
    type_str(&mut field, "hello");

    field.mouse_press(MouseEvent {
        offset: 1,
        timestamp_ms: 0,
    });
    assert_eq!(field.cursor(), 1);
    assert_eq!(
        field.mouse_release(MouseEvent {
            offset: 1,
            timestamp_ms: 700,
        }),
        Some(1)
    );
}

#[test]
fn test_long_press_disabled_by_default() {
    let mut field = LineEdit::new();
    type_str(&mut field, "hello");

    field.mouse_press(MouseEvent {
        offset: 1,
        timestamp_ms: 0,
    });
    assert_eq!(
        field.mouse_release(MouseEvent {
            offset: 1,
            timestamp_ms: 700,
        }),
        None
    );
    assert_eq!(field.cursor(), 1);
}

// ========================================================================
// Document loads and multi-line fields
// ========================================================================

#[test]
fn test_load_is_the_single_undo_baseline() {
    let mut field = LineEdit::new();
    type_str(&mut field, "typed");
    field.set_text_no_undo("loaded document");
    assert_eq!(field.text(), "loaded document");
    assert_eq!(field.undo_depth(), 1);

    // One undo empties the field; the pre-load typing is unreachable
    undo(&mut field);
    assert_eq!(field.text(), "");
    undo(&mut field);
    assert_eq!(field.text(), "");
}

#[test]
fn test_clear_records_nothing() {
    let mut field = LineEdit::new();
    type_str(&mut field, "typed");
    field.clear_no_undo();
    assert_eq!(field.text(), "");
    assert!(!field.can_undo());
    assert!(!field.can_redo());
}

#[test]
fn test_select_line_then_copy() {
    let mut area = TextArea::with_text("first\nsecond\nthird");
    area.set_cursor(9);
    area.select_line();
    assert_eq!(area.copy().as_deref(), Some("second"));
}

#[test]
fn test_text_area_vertical_navigation() {
    let mut area = TextArea::with_text("alpha\nbeta\ngamma");
    area.set_cursor(0);
    area.key_press(&KeyEvent::arrow(Key::ArrowDown, Modifiers::NONE));
    area.key_press(&KeyEvent::character('X'));
    assert_eq!(area.text(), "alpha\nXbeta\ngamma");
}

#[test]
fn test_text_area_undo_works_like_line_edit() {
    let mut area = TextArea::new();
    for ch in "first second".chars() {
        area.key_press(&KeyEvent::character(ch));
    }
    assert_eq!(area.undo_depth(), 2);

    let ev = KeyEvent::chord(StandardChord::Undo);
    area.key_press(&ev);
    area.key_release(&ev);
    assert_eq!(area.text(), "first ");
}
