use ratatui::{backend::TestBackend, Terminal};
use typetodo::store::TodoStore;
use typetodo::ui::components::HeaderComponent;
use typetodo::ui::core::Component;

use crate::support::{buffer_lines, todo};

fn render(header: &mut HeaderComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            header.render(f, area);
        })
        .unwrap();
    buffer_lines(terminal.backend())
}

#[test]
fn test_header_shows_loading_until_data_arrives() {
    let mut header = HeaderComponent::new();
    assert!(header.loading);
    assert!(render(&mut header).contains("Loading..."));
}

#[test]
fn test_header_summary_and_progress() {
    let mut store = TodoStore::new();
    let mut done = todo("t1", "Done", 0);
    done.completed = true;
    store
        .settle_load(Ok(vec![done, todo("t2", "Open", 1), todo("t3", "Also open", 2), todo("t4", "Later", 3)]))
        .unwrap();

    let mut header = HeaderComponent::new();
    header.update_data(&store, false);

    assert_eq!(header.summary(), "1/4 tasks completed");
    assert!((header.progress - 25.0).abs() < f64::EPSILON);

    let screen = render(&mut header);
    assert!(screen.contains("TypeToDo"));
    assert!(screen.contains("1/4 tasks completed"), "summary missing:\n{}", screen);
}

#[test]
fn test_header_empty_list() {
    let mut store = TodoStore::new();
    store.settle_load(Ok(Vec::new())).unwrap();

    let mut header = HeaderComponent::new();
    header.update_data(&store, false);
    assert_eq!(header.summary(), "0/0 tasks completed");
    assert_eq!(header.progress, 0.0);
}
