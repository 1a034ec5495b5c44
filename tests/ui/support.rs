#![allow(dead_code)]

//! Shared fixtures for the UI tests: an in-memory API and helpers to drive
//! the app component with keys and render it into a `TestBackend`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tempfile::TempDir;
use typetodo::api::{ApiError, TodoApi};
use typetodo::config::Config;
use typetodo::entities::{CreateTodoPayload, EditTodoPayload, Todo};
use typetodo::logger::Logger;
use typetodo::settings::SettingsService;
use typetodo::tags::extract_tags;
use typetodo::ui::core::{Component, EventType};
use typetodo::ui::AppComponent;

/// Backend double. Every call fails with `error` when it is set.
pub struct FakeApi {
    pub todos: Vec<Todo>,
    pub error: Mutex<Option<ApiError>>,
    next_id: AtomicUsize,
}

impl FakeApi {
    pub fn with_todos(texts: &[&str]) -> Self {
        let todos = texts
            .iter()
            .enumerate()
            .map(|(order, text)| todo(&format!("t{}", order + 1), text, order))
            .collect();
        Self {
            todos,
            error: Mutex::new(None),
            next_id: AtomicUsize::new(100),
        }
    }

    pub fn failing(texts: &[&str], error: ApiError) -> Self {
        let api = Self::with_todos(texts);
        api.fail_with(Some(error));
        api
    }

    pub fn fail_with(&self, error: Option<ApiError>) {
        *self.error.lock().unwrap() = error;
    }

    fn check(&self) -> Result<(), ApiError> {
        match self.error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TodoApi for FakeApi {
    async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        self.check()?;
        Ok(self.todos.clone())
    }

    async fn create_todo(&self, payload: CreateTodoPayload) -> Result<Todo, ApiError> {
        self.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(todo(&format!("srv-{}", id), &payload.text, 0))
    }

    async fn update_todo(&self, _todo_id: &str, _payload: EditTodoPayload) -> Result<Option<Todo>, ApiError> {
        self.check()?;
        Ok(None)
    }

    async fn delete_todo(&self, _todo_id: &str) -> Result<(), ApiError> {
        self.check()
    }

    async fn reorder_todo(&self, _todo_id: &str, _new_position: usize) -> Result<(), ApiError> {
        self.check()
    }
}

pub fn todo(id: &str, text: &str, order: usize) -> Todo {
    let now = Utc::now();
    Todo {
        todo_id: id.to_string(),
        text: text.to_string(),
        completed: false,
        tags: extract_tags(text),
        order,
        created_at: now,
        updated_at: now,
    }
}

/// Settings in a temp dir; the tutorial is marked seen unless `first_run`.
pub fn settings(dir: &TempDir, first_run: bool) -> SettingsService {
    let mut settings = SettingsService::load(dir.path().join("settings.toml"));
    if !first_run {
        settings.mark_tutorial_seen().expect("settings are writable");
    }
    settings
}

pub fn build_app(api: Arc<FakeApi>, settings: SettingsService) -> AppComponent {
    let config = Config::default();
    AppComponent::new(&config, api, settings, Logger::new())
}

/// App with the initial load already settled
pub async fn loaded_app(api: Arc<FakeApi>, dir: &TempDir) -> AppComponent {
    let mut app = build_app(api, settings(dir, false));
    app.trigger_initial_load();
    drain(&mut app).await;
    app
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub async fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(key(code)))
        .await
        .expect("key handling never fails");
}

pub async fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c)).await;
    }
}

/// Feed every background result back into the app until nothing is in flight
pub async fn drain(app: &mut AppComponent) {
    for _ in 0..200 {
        tokio::time::sleep(Duration::from_millis(10)).await;
        process_once(app).await;
        if app.active_task_count() == 0 {
            break;
        }
    }
    // A task may finish between receiving and cleanup
    process_once(app).await;
}

/// One pass of the UI loop's background handling
pub async fn process_once(app: &mut AppComponent) {
    for action in app.process_background_actions() {
        let action = app.update(action);
        app.handle_app_action(action).await;
    }
}

/// Render the app and return the screen, one line per row
pub fn render_to_string(app: &mut AppComponent, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test backend");
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .expect("draw");
    buffer_lines(terminal.backend())
}

pub fn buffer_lines(backend: &TestBackend) -> String {
    let buffer = backend.buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
