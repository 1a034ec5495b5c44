use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};
use typetodo::ui::components::DialogComponent;
use typetodo::ui::core::{Action, Component, DialogType};

use crate::support::{buffer_lines, key};

fn open(dialog_type: DialogType) -> DialogComponent {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(dialog_type));
    dialog
}

fn type_into(dialog: &mut DialogComponent, text: &str) {
    for c in text.chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_dialog_starts_hidden() {
    let dialog = DialogComponent::new();
    assert!(!dialog.is_visible());
    assert!(!dialog.captures_input());
}

#[test]
fn test_creation_input_editing() {
    let mut dialog = open(DialogType::TaskCreation);
    assert!(dialog.captures_input());

    type_into(&mut dialog, "ac");
    dialog.handle_key_events(key(KeyCode::Left));
    type_into(&mut dialog, "b");
    assert_eq!(dialog.input_buffer, "abc");
    assert_eq!(dialog.cursor_position, 2);

    dialog.handle_key_events(key(KeyCode::End));
    dialog.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(dialog.input_buffer, "ab");

    dialog.handle_key_events(key(KeyCode::Home));
    dialog.handle_key_events(key(KeyCode::Delete));
    assert_eq!(dialog.input_buffer, "b");
    assert_eq!(dialog.cursor_position, 0);
}

#[test]
fn test_multibyte_input_keeps_cursor_in_chars() {
    let mut dialog = open(DialogType::TaskCreation);
    type_into(&mut dialog, "café");
    assert_eq!(dialog.cursor_position, 4);

    dialog.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(dialog.input_buffer, "caf");
}

#[test]
fn test_creation_submit() {
    let mut dialog = open(DialogType::TaskCreation);

    // Blank input is not submitted and keeps the dialog open
    type_into(&mut dialog, "   ");
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert!(dialog.is_visible());

    type_into(&mut dialog, "Buy milk #shop");
    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::AddTodo(text) => assert_eq!(text, "   Buy milk #shop"),
        other => panic!("expected AddTodo, got {:?}", other),
    }
    assert!(!dialog.is_visible());
    assert!(dialog.input_buffer.is_empty());
}

#[test]
fn test_creation_escape_hides() {
    let mut dialog = open(DialogType::TaskCreation);
    type_into(&mut dialog, "draft");

    let action = dialog.handle_key_events(key(KeyCode::Esc));
    assert!(matches!(action, Action::HideDialog));
    dialog.update(action);
    assert!(!dialog.is_visible());
}

#[test]
fn test_edit_reports_every_change() {
    let mut dialog = open(DialogType::TaskEdit {
        todo_id: "t1".to_string(),
        text: "Thé #tea".to_string(),
    });
    assert_eq!(dialog.input_buffer, "Thé #tea");
    assert_eq!(dialog.cursor_position, 8);

    match dialog.handle_key_events(key(KeyCode::Char('s'))) {
        Action::ChangeEditText(text) => assert_eq!(text, "Thé #teas"),
        other => panic!("expected ChangeEditText, got {:?}", other),
    }
    // Cursor moves do not change the text
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Left)), Action::None));

    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::CommitEdit(todo_id) => assert_eq!(todo_id, "t1"),
        other => panic!("expected CommitEdit, got {:?}", other),
    }
    assert!(!dialog.is_visible());
}

#[test]
fn test_edit_escape_cancels() {
    let mut dialog = open(DialogType::TaskEdit {
        todo_id: "t1".to_string(),
        text: "Tea".to_string(),
    });
    let action = dialog.handle_key_events(key(KeyCode::Esc));
    assert!(matches!(action, Action::CancelEdit));

    // The cancel travels on to the store after closing the dialog
    assert!(matches!(dialog.update(action), Action::CancelEdit));
    assert!(!dialog.is_visible());
}

#[test]
fn test_delete_confirmation() {
    let mut dialog = open(DialogType::DeleteConfirmation {
        todo_id: "t9".to_string(),
        text: "Old task".to_string(),
    });
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None));

    match dialog.handle_key_events(key(KeyCode::Char('y'))) {
        Action::DeleteTodo(todo_id) => assert_eq!(todo_id, "t9"),
        other => panic!("expected DeleteTodo, got {:?}", other),
    }
    assert!(!dialog.is_visible());
}

#[test]
fn test_tutorial_closes_after_last_step() {
    let mut dialog = open(DialogType::Tutorial);
    let steps = dialog.tutorial.len();
    assert!(steps > 1);

    for _ in 0..steps - 1 {
        let action = dialog.handle_key_events(key(KeyCode::Enter));
        dialog.update(action);
    }
    assert!(dialog.is_visible());
    assert!(dialog.tutorial.is_last());

    let action = dialog.handle_key_events(key(KeyCode::Left));
    dialog.update(action);
    assert_eq!(dialog.tutorial.index(), steps - 2);

    for _ in 0..2 {
        let action = dialog.handle_key_events(key(KeyCode::Right));
        dialog.update(action);
    }
    assert!(!dialog.is_visible());
}

#[test]
fn test_error_dialog_scrolls_then_closes() {
    let mut dialog = open(DialogType::Error("Something broke".to_string()));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Down)), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::HideDialog));
}

#[test]
fn test_creation_dialog_renders_input() {
    let mut dialog = open(DialogType::TaskCreation);
    type_into(&mut dialog, "Water plants #home");

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            dialog.render(f, area);
        })
        .unwrap();

    let screen = buffer_lines(terminal.backend());
    assert!(screen.contains("Water plants #home"), "input missing:\n{}", screen);
}
