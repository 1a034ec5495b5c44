use super::common::{create_dialog_block, create_instructions_paragraph, render_scrollable_text, shortcuts};
use super::scroll_behavior::ScrollState;
use crate::constants::DIALOG_TITLE_LOGS;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

const HELP_TEXT: &str = r"
TYPETODO - Hashtag Task List
============================

NAVIGATION
----------
j/k, ↑/↓    Move selection down/up
Tab         Switch between task list and tag filter bar
Esc         Close dialog or dismiss the newest notification

TASKS
-----
a           Add a task (write #hashtags in the text to tag it)
e           Edit selected task
Space/x     Toggle completion
d           Delete task (with confirmation)
u           Undo the last added task

ORDERING
--------
m           Pick up the selected task, j/k to move it, Enter to drop, Esc to cancel
K/J         Move selected task up/down by one
t           Move selected task to the top

TAG FILTER (after Tab)
----------------------
←/→         Select a tag
Space       Cycle tag: off -> include -> exclude -> off
n           Cycle 'No tags': off -> only untagged -> only tagged -> off
c           Clear all filters (also works from the task list)

DISPLAY
-------
g           Group tasks by tag
T           Toggle dark mode
i           Change icon theme
r           Reload from server

GENERAL
-------
h           Toggle this help
?           Show the tutorial
G           Show logs
q, Ctrl+C   Quit

Press 'Esc' or 'h' to close this help panel
";

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService, theme: &Theme, text: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!("{} Confirm Delete", icons.warning()), theme.red, theme);
    let inner = block.inner(dialog_area);
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(2), Constraint::Length(1)]).split(inner);

    let message = Paragraph::new(format!("Delete \"{}\"?", text))
        .style(Style::default().fg(theme.text_bright))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let instructions = [
        ("Enter/y", Color::Green, " Delete"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ];

    f.render_widget(block, dialog_area);
    f.render_widget(message, chunks[1]);
    f.render_widget(create_instructions_paragraph(&instructions, theme), chunks[2]);
}

/// Shared body of the info and error dialogs
fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: String,
    color: Color,
    message: &str,
    scroll: &mut ScrollState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(title, color, theme);
    let inner = block.inner(dialog_area);
    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    let instructions = Paragraph::new("Press any key to continue • j/k to scroll if needed")
        .style(Style::default().fg(theme.dim))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    render_scrollable_text(f, chunks[0], message, scroll, theme);
    f.render_widget(instructions, chunks[1]);
}

pub fn render_info_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    theme: &Theme,
    message: &str,
    scroll: &mut ScrollState,
) {
    let title = format!("{} Info", icons.info());
    render_message_dialog(f, area, theme, title, theme.blue, message, scroll);
}

pub fn render_error_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    theme: &Theme,
    message: &str,
    scroll: &mut ScrollState,
) {
    let title = format!("{} Error", icons.error());
    render_message_dialog(f, area, theme, title, theme.red, message, scroll);
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, theme: &Theme, scroll: &mut ScrollState) {
    let help_area = LayoutManager::centered_rect(80, 85, area);
    f.render_widget(Clear, help_area);

    let block = create_dialog_block("Help - Press 'Esc' or 'h' to close".to_string(), theme.accent, theme)
        .title_alignment(Alignment::Center);
    let inner = block.inner(help_area);

    f.render_widget(block, help_area);
    render_scrollable_text(f, inner, HELP_TEXT, scroll, theme);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, theme: &Theme, logger: Option<&Logger>, scroll: &mut ScrollState) {
    let logs_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, logs_area);

    let logs = logger.map(Logger::get_logs).unwrap_or_default();
    let logs_content = if logs.is_empty() {
        "No logs yet".to_string()
    } else {
        logs.join("\n")
    };

    let block =
        create_dialog_block(DIALOG_TITLE_LOGS.to_string(), theme.accent, theme).title_alignment(Alignment::Center);
    let inner = block.inner(logs_area);

    f.render_widget(block, logs_area);
    render_scrollable_text(f, inner, &logs_content, scroll, theme);
}
