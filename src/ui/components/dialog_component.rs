//! Modal dialog component.
//!
//! One dialog is open at a time. Text dialogs (new task, edit task) own an
//! input buffer with a cursor; long-content dialogs (help, logs, info, error)
//! share a scroll state; the tutorial walks through its fixed steps.
//!
//! While the edit dialog is open every keystroke is reported as
//! [`Action::ChangeEditText`] so the store's edit session always holds the
//! working copy.

use crate::icons::IconService;
use crate::logger::Logger;
use crate::tutorial::Tutorial;
use crate::ui::components::dialogs::{system_dialogs, task_dialogs, tutorial_dialog, ScrollState};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    /// Cursor position in chars
    pub cursor_position: usize,
    pub scroll: ScrollState,
    pub tutorial: Tutorial,
    pub icons: IconService,
    pub theme: Theme,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            cursor_position: 0,
            scroll: ScrollState::default(),
            tutorial: Tutorial::new(),
            icons: IconService::default(),
            theme: Theme::default(),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.scroll.reset();
    }

    fn byte_index(&self, char_position: usize) -> usize {
        self.input_buffer
            .char_indices()
            .nth(char_position)
            .map_or(self.input_buffer.len(), |(index, _)| index)
    }

    /// Apply an editing key to the input buffer. Returns true when the text changed.
    fn edit_input(&mut self, code: KeyCode) -> bool {
        let char_count = self.input_buffer.chars().count();
        match code {
            KeyCode::Char(c) => {
                let byte_pos = self.byte_index(self.cursor_position);
                self.input_buffer.insert(byte_pos, c);
                self.cursor_position += 1;
                true
            }
            KeyCode::Backspace if self.cursor_position > 0 => {
                self.cursor_position -= 1;
                let byte_pos = self.byte_index(self.cursor_position);
                self.input_buffer.remove(byte_pos);
                true
            }
            KeyCode::Delete if self.cursor_position < char_count => {
                let byte_pos = self.byte_index(self.cursor_position);
                self.input_buffer.remove(byte_pos);
                true
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(char_count);
                false
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                false
            }
            KeyCode::End => {
                self.cursor_position = char_count;
                false
            }
            _ => false,
        }
    }

    fn handle_submit(&mut self) -> Action {
        if self.input_buffer.trim().is_empty() {
            return Action::None;
        }

        let action = match &self.dialog_type {
            Some(DialogType::TaskCreation) => Action::AddTodo(self.input_buffer.clone()),
            Some(DialogType::TaskEdit { todo_id, .. }) => Action::CommitEdit(todo_id.clone()),
            _ => return Action::None,
        };
        self.clear_dialog();
        action
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('h') => Action::HideDialog,
                code => {
                    self.scroll.handle_key(code);
                    Action::None
                }
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                code => {
                    self.scroll.handle_key(code);
                    Action::None
                }
            },
            Some(DialogType::Info(_)) | Some(DialogType::Error(_)) => {
                if self.scroll.handle_key(key.code) {
                    Action::None
                } else {
                    Action::HideDialog
                }
            }
            Some(DialogType::Tutorial) => match key.code {
                KeyCode::Right | KeyCode::Enter | KeyCode::Char('l') | KeyCode::Char(' ') => Action::TutorialNext,
                KeyCode::Left => Action::TutorialPrev,
                KeyCode::Esc | KeyCode::Char('q') => Action::HideDialog,
                _ => Action::None,
            },
            Some(DialogType::DeleteConfirmation { todo_id, .. }) => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => {
                    let action = Action::DeleteTodo(todo_id.clone());
                    self.clear_dialog();
                    action
                }
                KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
                _ => Action::None,
            },
            Some(DialogType::TaskCreation) => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => self.handle_submit(),
                code => {
                    self.edit_input(code);
                    Action::None
                }
            },
            Some(DialogType::TaskEdit { .. }) => match key.code {
                KeyCode::Esc => Action::CancelEdit,
                KeyCode::Enter => self.handle_submit(),
                code => {
                    if self.edit_input(code) {
                        Action::ChangeEditText(self.input_buffer.clone())
                    } else {
                        Action::None
                    }
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                match &dialog_type {
                    DialogType::TaskEdit { text, .. } => {
                        self.input_buffer = text.clone();
                        self.cursor_position = text.chars().count();
                    }
                    DialogType::Tutorial => self.tutorial.restart(),
                    _ => {}
                }
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog | Action::CancelEdit => {
                self.clear_dialog();
                action
            }
            Action::TutorialNext => {
                if !self.tutorial.next() {
                    self.clear_dialog();
                }
                Action::None
            }
            Action::TutorialPrev => {
                self.tutorial.previous();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::TaskCreation => task_dialogs::render_task_creation_dialog(
                f,
                rect,
                &self.theme,
                &self.input_buffer,
                self.cursor_position,
            ),
            DialogType::TaskEdit { .. } => task_dialogs::render_task_edit_dialog(
                f,
                rect,
                &self.icons,
                &self.theme,
                &self.input_buffer,
                self.cursor_position,
            ),
            DialogType::DeleteConfirmation { text, .. } => {
                system_dialogs::render_delete_confirmation_dialog(f, rect, &self.icons, &self.theme, &text);
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &self.theme, &mut self.scroll),
            DialogType::Logs => {
                system_dialogs::render_logs_dialog(f, rect, &self.theme, self.logger.as_ref(), &mut self.scroll);
            }
            DialogType::Tutorial => tutorial_dialog::render_tutorial_dialog(f, rect, &self.theme, &self.tutorial),
            DialogType::Error(message) => {
                system_dialogs::render_error_dialog(f, rect, &self.icons, &self.theme, &message, &mut self.scroll);
            }
            DialogType::Info(message) => {
                system_dialogs::render_info_dialog(f, rect, &self.icons, &self.theme, &message, &mut self.scroll);
            }
        }
    }

    fn captures_input(&self) -> bool {
        self.is_visible()
    }
}
