use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};
use typetodo::constants::EMPTY_LIST_MESSAGE;
use typetodo::store::TodoStore;
use typetodo::ui::components::task_list_item_component::TaskListItemType;
use typetodo::ui::components::TaskListComponent;
use typetodo::ui::core::{Action, Component, DialogType};

use crate::support::{buffer_lines, key, todo};

fn store(texts: &[&str]) -> TodoStore {
    let todos = texts
        .iter()
        .enumerate()
        .map(|(i, text)| todo(&format!("t{}", i + 1), text, i))
        .collect();
    let mut store = TodoStore::new();
    store.settle_load(Ok(todos)).unwrap();
    store
}

fn list(store: &TodoStore, grouped: bool) -> TaskListComponent {
    let mut list = TaskListComponent::new();
    list.update_data(store, grouped);
    list
}

fn row_texts(list: &TaskListComponent) -> Vec<String> {
    list.items
        .iter()
        .filter_map(TaskListItemType::todo)
        .map(|t| t.text.clone())
        .collect()
}

fn selected_id(list: &TaskListComponent) -> Option<String> {
    list.get_selected_todo().map(|t| t.todo_id.clone())
}

fn render(list: &mut TaskListComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            list.render(f, area);
        })
        .unwrap();
    buffer_lines(terminal.backend())
}

#[test]
fn test_navigation_wraps() {
    let store = store(&["A", "B", "C"]);
    let mut list = list(&store, false);
    assert_eq!(selected_id(&list).as_deref(), Some("t1"));

    let action = list.handle_key_events(key(KeyCode::Up));
    list.update(action);
    assert_eq!(selected_id(&list).as_deref(), Some("t3"));

    let action = list.handle_key_events(key(KeyCode::Char('j')));
    list.update(action);
    assert_eq!(selected_id(&list).as_deref(), Some("t1"));
}

#[test]
fn test_task_keys_target_selection() {
    let store = store(&["A #x", "B"]);
    let mut list = list(&store, false);
    list.update(Action::NextTask);

    match list.handle_key_events(key(KeyCode::Char(' '))) {
        Action::ToggleCompletion(id) => assert_eq!(id, "t2"),
        other => panic!("expected ToggleCompletion, got {:?}", other),
    }
    match list.handle_key_events(key(KeyCode::Char('e'))) {
        Action::StartEdit { id, text } => {
            assert_eq!(id, "t2");
            assert_eq!(text, "B");
        }
        other => panic!("expected StartEdit, got {:?}", other),
    }
    match list.handle_key_events(key(KeyCode::Char('d'))) {
        Action::ShowDialog(DialogType::DeleteConfirmation { todo_id, .. }) => assert_eq!(todo_id, "t2"),
        other => panic!("expected delete confirmation, got {:?}", other),
    }
    match list.handle_key_events(key(KeyCode::Char('t'))) {
        Action::MoveToTop(id) => assert_eq!(id, "t2"),
        other => panic!("expected MoveToTop, got {:?}", other),
    }
    assert!(matches!(
        list.handle_key_events(key(KeyCode::Char('a'))),
        Action::ShowDialog(DialogType::TaskCreation)
    ));
}

#[test]
fn test_deleted_task_leaves_list() {
    let mut store = store(&["A", "B"]);
    let _pending = store.delete("t1");
    // Deleted task is gone from the list, B is selected
    let mut list = list(&store, false);
    assert_eq!(row_texts(&list), vec!["B"]);
    assert!(matches!(
        list.handle_key_events(key(KeyCode::Char('d'))),
        Action::ShowDialog(DialogType::DeleteConfirmation { .. })
    ));
}

#[test]
fn test_shift_moves_into_neighbour_slot() {
    let store = store(&["A", "B", "C"]);
    let mut list = list(&store, false);

    // Nothing above the first task
    assert!(matches!(list.handle_key_events(key(KeyCode::Char('K'))), Action::None));

    match list.handle_key_events(key(KeyCode::Char('J'))) {
        Action::ReorderTodo { id, new_position } => {
            assert_eq!(id, "t1");
            assert_eq!(new_position, 1);
        }
        other => panic!("expected ReorderTodo, got {:?}", other),
    }
}

#[test]
fn test_move_mode_previews_and_drops() {
    let store = store(&["A", "B", "C"]);
    let mut list = list(&store, false);

    assert!(matches!(list.handle_key_events(key(KeyCode::Char('m'))), Action::None));
    assert!(list.is_moving());
    assert!(list.captures_input());

    list.handle_key_events(key(KeyCode::Down));
    list.handle_key_events(key(KeyCode::Char('j')));
    // Clamped at the bottom
    list.handle_key_events(key(KeyCode::Down));
    assert_eq!(row_texts(&list), vec!["B", "C", "A"]);

    match list.handle_key_events(key(KeyCode::Enter)) {
        Action::ReorderTodo { id, new_position } => {
            assert_eq!(id, "t1");
            assert_eq!(new_position, 2);
        }
        other => panic!("expected ReorderTodo, got {:?}", other),
    }
    assert!(!list.is_moving());
}

#[test]
fn test_move_mode_escape_restores_order() {
    let store = store(&["A", "B", "C"]);
    let mut list = list(&store, false);

    list.handle_key_events(key(KeyCode::Char('m')));
    list.handle_key_events(key(KeyCode::Down));
    assert!(matches!(list.handle_key_events(key(KeyCode::Esc)), Action::None));

    assert!(!list.is_moving());
    assert_eq!(row_texts(&list), vec!["A", "B", "C"]);
    assert_eq!(selected_id(&list).as_deref(), Some("t1"));
}

#[test]
fn test_drop_in_place_is_not_a_reorder() {
    let store = store(&["A", "B"]);
    let mut list = list(&store, false);

    list.handle_key_events(key(KeyCode::Char('m')));
    assert!(matches!(list.handle_key_events(key(KeyCode::Char('m'))), Action::None));
    assert!(!list.is_moving());
}

#[test]
fn test_grouped_view_has_headers_and_refuses_moves() {
    let store = store(&["Milk #shop", "Bread #shop #home", "Call mom"]);
    let mut list = list(&store, true);
    assert!(list.is_grouped());

    let headers = list
        .items
        .iter()
        .filter(|item| matches!(item, TaskListItemType::Header(_)))
        .count();
    assert_eq!(headers, 3);
    // Tasks with several tags appear under each of them
    assert_eq!(row_texts(&list).len(), 4);

    assert!(matches!(list.handle_key_events(key(KeyCode::Char('m'))), Action::ShowInfo(_)));
    assert!(matches!(list.handle_key_events(key(KeyCode::Char('K'))), Action::ShowInfo(_)));
    assert!(!list.is_moving());
}

#[test]
fn test_selection_follows_task_across_updates() {
    let mut store = store(&["A", "B", "C"]);
    let mut list = list(&store, false);
    list.update(Action::NextTask);
    list.update(Action::NextTask);
    assert_eq!(selected_id(&list).as_deref(), Some("t3"));

    let _pending = store.move_to_top("t3");
    list.update_data(&store, false);
    assert_eq!(selected_id(&list).as_deref(), Some("t3"));
    assert_eq!(row_texts(&list), vec!["C", "A", "B"]);
}

#[test]
fn test_render_empty_and_filled() {
    let empty = store(&[]);
    let mut list = list(&empty, false);
    assert!(render(&mut list).contains("Your task list is empty"));
    assert!(EMPTY_LIST_MESSAGE.starts_with("Your task list is empty"));

    let store = store(&["Water plants #home"]);
    list.update_data(&store, false);
    let screen = render(&mut list);
    assert!(screen.contains("Water plants"), "task missing:\n{}", screen);
    assert!(screen.contains("Tasks"));
}
