use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};
use typetodo::store::{TagFilter, TodoStore};
use typetodo::ui::components::FilterBarComponent;
use typetodo::ui::core::{Action, Component};

use crate::support::{buffer_lines, key, todo};

fn store() -> TodoStore {
    let mut store = TodoStore::new();
    store
        .settle_load(Ok(vec![
            todo("t1", "Buy milk #shop", 0),
            todo("t2", "Bread #shop #home", 1),
            todo("t3", "Call mom", 2),
        ]))
        .unwrap();
    store
}

fn bar(store: &TodoStore) -> FilterBarComponent {
    let mut bar = FilterBarComponent::new();
    bar.update_data(store);
    bar.on_focus();
    bar
}

#[test]
fn test_chips_follow_tag_counts() {
    let store = store();
    let bar = bar(&store);

    let chips: Vec<(&str, usize)> = bar.chips.iter().map(|c| (c.tag.as_str(), c.count)).collect();
    assert_eq!(chips, vec![("home", 1), ("shop", 2)]);
    assert!(bar.chips.iter().all(|c| c.state.is_none()));
    assert_eq!(bar.selected_index, 0);
}

#[test]
fn test_selection_wraps_around_chips() {
    let store = store();
    let mut bar = bar(&store);

    assert!(matches!(bar.handle_key_events(key(KeyCode::Left)), Action::None));
    assert_eq!(bar.selected_index, 2);
    bar.handle_key_events(key(KeyCode::Right));
    assert_eq!(bar.selected_index, 0);
}

#[test]
fn test_toggle_selected_chip() {
    let mut store = store();
    let mut bar = bar(&store);

    // First chip is the no-tags filter
    assert!(matches!(
        bar.handle_key_events(key(KeyCode::Enter)),
        Action::ToggleNoTagsFilter
    ));

    bar.handle_key_events(key(KeyCode::Right));
    bar.handle_key_events(key(KeyCode::Right));
    let tag = match bar.handle_key_events(key(KeyCode::Char(' '))) {
        Action::ToggleTagFilter(tag) => tag,
        other => panic!("expected ToggleTagFilter, got {:?}", other),
    };
    assert_eq!(tag, "shop");

    store.toggle_tag_filter(&tag);
    bar.update_data(&store);
    assert_eq!(bar.chips[1].state, Some(TagFilter::Include));

    store.toggle_tag_filter(&tag);
    bar.update_data(&store);
    assert_eq!(bar.chips[1].state, Some(TagFilter::Exclude));
}

#[test]
fn test_shortcuts() {
    let store = store();
    let mut bar = bar(&store);

    assert!(matches!(bar.handle_key_events(key(KeyCode::Char('n'))), Action::ToggleNoTagsFilter));
    assert!(matches!(bar.handle_key_events(key(KeyCode::Char('c'))), Action::ClearFilters));
    assert!(matches!(bar.handle_key_events(key(KeyCode::Esc)), Action::ToggleFocus));
    assert!(matches!(bar.handle_key_events(key(KeyCode::Char('z'))), Action::None));
}

#[test]
fn test_selection_clamped_when_tags_disappear() {
    let mut store = store();
    let mut bar = bar(&store);
    bar.selected_index = 2;

    let _ = store.delete("t1");
    let _ = store.delete("t2");
    bar.update_data(&store);
    assert!(bar.chips.is_empty());
    assert_eq!(bar.selected_index, 0);
}

#[test]
fn test_render_lists_chips() {
    let store = store();
    let mut bar = bar(&store);

    let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            bar.render(f, area);
        })
        .unwrap();

    let screen = buffer_lines(terminal.backend());
    assert!(screen.contains("#shop 2"), "chip missing:\n{}", screen);
    assert!(screen.contains("#home 1"));
    assert!(screen.contains("No tags"));
}
