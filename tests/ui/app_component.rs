use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use typetodo::api::ApiError;
use typetodo::constants::{
    ERROR_ADD_FAILED, ERROR_DELETE_FAILED, LOADING_MESSAGE, SIGN_IN_REQUIRED, SUCCESS_ALL_COMPLETE, SUCCESS_TASK_ADDED,
    SUCCESS_TASK_DELETED,
};
use typetodo::notifications::NotificationLevel;
use typetodo::settings::SettingsService;
use typetodo::ui::core::{DialogType, FocusArea};
use typetodo::ui::AppComponent;

use crate::support::{
    build_app, drain, loaded_app, press, process_once, render_to_string, settings, type_text, FakeApi,
};

fn messages(app: &AppComponent) -> Vec<String> {
    app.notifications()
        .visible()
        .iter()
        .map(|n| n.message.clone())
        .collect()
}

fn texts(app: &AppComponent) -> Vec<String> {
    app.store().todos().iter().map(|t| t.text.clone()).collect()
}

#[tokio::test]
async fn test_initial_load_fills_list_and_header() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(FakeApi::with_todos(&["Buy milk #shop", "Walk the dog"]));
    let mut app = loaded_app(api, &dir).await;

    assert!(app.store().is_loaded());
    assert_eq!(texts(&app), vec!["Buy milk #shop", "Walk the dog"]);
    assert_eq!(app.store().tag_counts().get("shop"), 1);

    let screen = render_to_string(&mut app, 100, 30);
    assert!(screen.contains("0/2 tasks completed"), "header missing:\n{}", screen);
    assert!(screen.contains("Buy milk"));
    assert!(screen.contains("#shop 1"), "filter chip missing:\n{}", screen);
}

#[tokio::test]
async fn test_header_stops_loading_once_load_is_handled() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(FakeApi::with_todos(&["Buy milk"]));
    let mut app = build_app(api, settings(&dir, false));
    app.trigger_initial_load();
    assert!(render_to_string(&mut app, 100, 30).contains(LOADING_MESSAGE));

    // One pass, whether or not the finished task has been cleaned up yet
    tokio::time::sleep(Duration::from_millis(50)).await;
    process_once(&mut app).await;
    let screen = render_to_string(&mut app, 100, 30);
    assert!(screen.contains("0/1 tasks completed"), "header still loading:\n{}", screen);
    assert!(!screen.contains(LOADING_MESSAGE));

    // A reload is accepted right away
    press(&mut app, KeyCode::Char('r')).await;
    assert!(render_to_string(&mut app, 100, 30).contains(LOADING_MESSAGE));
    drain(&mut app).await;
    assert!(render_to_string(&mut app, 100, 30).contains("0/1 tasks completed"));
}

#[tokio::test]
async fn test_add_through_dialog_replaces_temporary_task() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(FakeApi::with_todos(&["Buy milk #shop"]));
    let mut app = loaded_app(api, &dir).await;

    press(&mut app, KeyCode::Char('a')).await;
    assert_eq!(app.dialog(), Some(&DialogType::TaskCreation));

    type_text(&mut app, "Call mom #family").await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.dialog(), None);

    // Shown before the server answers
    let added = &app.store().todos()[1];
    assert!(added.is_temporary());
    assert_eq!(added.tags, vec!["family".to_string()]);

    drain(&mut app).await;
    let added = &app.store().todos()[1];
    assert_eq!(added.todo_id, "srv-100");
    assert_eq!(app.store().tag_counts().get("family"), 1);
    assert!(messages(&app).contains(&SUCCESS_TASK_ADDED.to_string()));
}

#[tokio::test]
async fn test_failed_add_restores_list_and_notifies() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(FakeApi::with_todos(&["Buy milk #shop"]));
    let mut app = loaded_app(api.clone(), &dir).await;

    api.fail_with(Some(ApiError::Http {
        status: 500,
        body: "boom".to_string(),
    }));
    press(&mut app, KeyCode::Char('a')).await;
    type_text(&mut app, "Lost #gone").await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.store().todos().len(), 2);

    drain(&mut app).await;
    assert_eq!(texts(&app), vec!["Buy milk #shop"]);
    assert_eq!(app.store().tag_counts().get("gone"), 0);

    let latest = app.notifications().visible()[0].clone();
    assert_eq!(latest.level, NotificationLevel::Error);
    assert_eq!(latest.message, ERROR_ADD_FAILED);
}

#[tokio::test]
async fn test_unauthorized_load_asks_to_sign_in() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(FakeApi::failing(&["Buy milk"], ApiError::Unauthorized));
    let mut app = build_app(api, settings(&dir, false));

    app.trigger_initial_load();
    drain(&mut app).await;

    assert!(app.store().todos().is_empty());
    assert_eq!(app.dialog(), Some(&DialogType::Error(SIGN_IN_REQUIRED.to_string())));

    // Any key closes the error dialog
    press(&mut app, KeyCode::Char('x')).await;
    assert_eq!(app.dialog(), None);
}

#[tokio::test]
async fn test_tab_moves_focus_between_list_and_filter_bar() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(FakeApi::with_todos(&["Buy milk #shop"]));
    let mut app = loaded_app(api, &dir).await;

    assert_eq!(app.focus(), FocusArea::TaskList);
    press(&mut app, KeyCode::Tab).await;
    assert_eq!(app.focus(), FocusArea::FilterBar);

    // Select the #shop chip and include it
    press(&mut app, KeyCode::Right).await;
    press(&mut app, KeyCode::Char(' ')).await;
    assert!(app.store().filter_mode().is_active());

    press(&mut app, KeyCode::Esc).await;
    assert_eq!(app.focus(), FocusArea::TaskList);

    press(&mut app, KeyCode::Char('c')).await;
    assert!(!app.store().filter_mode().is_active());
}

#[tokio::test]
async fn test_completing_every_task_celebrates_once() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(FakeApi::with_todos(&["One", "Two"]));
    let mut app = loaded_app(api, &dir).await;

    press(&mut app, KeyCode::Char(' ')).await;
    assert!(app.notifications().is_empty());

    // "One" sinks below "Two" once completed; selection follows it, so wrap to the top
    press(&mut app, KeyCode::Char('j')).await;
    press(&mut app, KeyCode::Char(' ')).await;
    drain(&mut app).await;

    assert_eq!(app.store().completed_count(), 2);
    let celebrations: Vec<_> = app
        .notifications()
        .visible()
        .into_iter()
        .filter(|n| n.level == NotificationLevel::Celebration)
        .collect();
    assert_eq!(celebrations.len(), 1);
    assert_eq!(celebrations[0].message, SUCCESS_ALL_COMPLETE);

    // Wide enough that the toast in the top-right corner leaves the gauge label visible
    let screen = render_to_string(&mut app, 200, 30);
    assert!(screen.contains("2/2 tasks completed"), "header missing:\n{}", screen);
    assert!(screen.contains(SUCCESS_ALL_COMPLETE));
}

#[tokio::test]
async fn test_edit_dialog_rewrites_text_and_tags() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(FakeApi::with_todos(&["Buy milk #shop"]));
    let mut app = loaded_app(api, &dir).await;

    press(&mut app, KeyCode::Char('e')).await;
    assert!(matches!(app.dialog(), Some(DialogType::TaskEdit { .. })));
    assert!(app.store().edit_session().is_some());

    type_text(&mut app, " #urgent").await;
    assert_eq!(
        app.store().edit_session().map(|s| s.text().to_string()),
        Some("Buy milk #shop #urgent".to_string())
    );

    press(&mut app, KeyCode::Enter).await;
    drain(&mut app).await;

    assert_eq!(texts(&app), vec!["Buy milk #shop #urgent"]);
    assert_eq!(app.store().tag_counts().get("urgent"), 1);
    assert!(app.store().edit_session().is_none());
}

#[tokio::test]
async fn test_escape_cancels_edit() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(FakeApi::with_todos(&["Buy milk #shop"]));
    let mut app = loaded_app(api, &dir).await;

    press(&mut app, KeyCode::Char('e')).await;
    type_text(&mut app, " later").await;
    press(&mut app, KeyCode::Esc).await;

    assert_eq!(app.dialog(), None);
    assert!(app.store().edit_session().is_none());
    assert_eq!(texts(&app), vec!["Buy milk #shop"]);
}

#[tokio::test]
async fn test_delete_asks_for_confirmation() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(FakeApi::with_todos(&["Buy milk #shop", "Walk the dog"]));
    let mut app = loaded_app(api, &dir).await;

    press(&mut app, KeyCode::Char('d')).await;
    assert!(matches!(app.dialog(), Some(DialogType::DeleteConfirmation { .. })));

    // Declining keeps the task
    press(&mut app, KeyCode::Char('n')).await;
    assert_eq!(app.store().todos().len(), 2);

    press(&mut app, KeyCode::Char('d')).await;
    press(&mut app, KeyCode::Char('y')).await;
    assert_eq!(texts(&app), vec!["Walk the dog"]);

    drain(&mut app).await;
    assert_eq!(app.store().tag_counts().get("shop"), 0);
    assert!(messages(&app).contains(&SUCCESS_TASK_DELETED.to_string()));
}

#[tokio::test]
async fn test_failed_delete_puts_task_back() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(FakeApi::with_todos(&["Buy milk #shop", "Walk the dog"]));
    let mut app = loaded_app(api.clone(), &dir).await;

    api.fail_with(Some(ApiError::Network("offline".to_string())));
    press(&mut app, KeyCode::Char('d')).await;
    press(&mut app, KeyCode::Enter).await;
    drain(&mut app).await;

    assert_eq!(texts(&app), vec!["Buy milk #shop", "Walk the dog"]);
    assert!(messages(&app).contains(&ERROR_DELETE_FAILED.to_string()));
}

#[tokio::test]
async fn test_undo_removes_last_added_task() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(FakeApi::with_todos(&["Buy milk"]));
    let mut app = loaded_app(api, &dir).await;

    press(&mut app, KeyCode::Char('u')).await;
    assert!(messages(&app).contains(&"Nothing to undo".to_string()));

    press(&mut app, KeyCode::Char('a')).await;
    type_text(&mut app, "Oops").await;
    press(&mut app, KeyCode::Enter).await;
    drain(&mut app).await;
    assert_eq!(app.store().todos().len(), 2);

    press(&mut app, KeyCode::Char('u')).await;
    drain(&mut app).await;
    assert_eq!(texts(&app), vec!["Buy milk"]);
    assert_eq!(app.store().last_added(), None);
}

#[tokio::test]
async fn test_move_to_top_and_shift_reorder_the_list() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(FakeApi::with_todos(&["A", "B", "C"]));
    let mut app = loaded_app(api, &dir).await;

    press(&mut app, KeyCode::Char('j')).await;
    press(&mut app, KeyCode::Char('j')).await;
    press(&mut app, KeyCode::Char('t')).await;
    assert_eq!(texts(&app), vec!["C", "A", "B"]);

    // Selection follows "C" to the top; J swaps it down again
    press(&mut app, KeyCode::Char('J')).await;
    drain(&mut app).await;
    assert_eq!(texts(&app), vec!["A", "C", "B"]);
    let orders: Vec<usize> = app.store().todos().iter().map(|t| t.order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
}

#[tokio::test]
async fn test_grouped_view_refuses_to_move() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(FakeApi::with_todos(&["A #x", "B"]));
    let mut app = loaded_app(api, &dir).await;

    press(&mut app, KeyCode::Char('g')).await;
    assert!(app.is_grouped());

    press(&mut app, KeyCode::Char('m')).await;
    assert_eq!(app.notifications().visible()[0].level, NotificationLevel::Info);
    assert_eq!(texts(&app), vec!["A #x", "B"]);

    let screen = render_to_string(&mut app, 100, 30);
    assert!(screen.contains("[by tag]"));
}

#[tokio::test]
async fn test_first_run_shows_tutorial_once() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(FakeApi::with_todos(&[]));
    let mut app = build_app(api, settings(&dir, true));

    app.trigger_initial_load();
    assert_eq!(app.dialog(), Some(&DialogType::Tutorial));

    let reloaded = SettingsService::load(dir.path().join("settings.toml"));
    assert!(reloaded.has_seen_tutorial());

    press(&mut app, KeyCode::Esc).await;
    assert_eq!(app.dialog(), None);
    drain(&mut app).await;
}

#[tokio::test]
async fn test_theme_toggle_is_persisted() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(FakeApi::with_todos(&["A"]));
    let mut app = loaded_app(api, &dir).await;
    let was_dark = app.theme().dark;

    press(&mut app, KeyCode::Char('T')).await;
    assert_eq!(app.theme().dark, !was_dark);

    let reloaded = SettingsService::load(dir.path().join("settings.toml"));
    assert_eq!(reloaded.dark_mode(), !was_dark);
}

#[tokio::test]
async fn test_help_dialog_and_quit() {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(FakeApi::with_todos(&["A"]));
    let mut app = loaded_app(api, &dir).await;

    press(&mut app, KeyCode::Char('h')).await;
    assert_eq!(app.dialog(), Some(&DialogType::Help));

    // 'q' is swallowed while a dialog is open
    press(&mut app, KeyCode::Char('q')).await;
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Esc).await;
    press(&mut app, KeyCode::Char('q')).await;
    assert!(app.should_quit());
}
