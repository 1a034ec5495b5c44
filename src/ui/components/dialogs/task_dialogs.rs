use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::icons::IconService;
use crate::tags::extract_tags;
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Theme;
use crate::utils::color::tag_color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Live preview of the tags the input will carry
fn tag_preview<'a>(input_buffer: &str, theme: &Theme) -> Paragraph<'a> {
    let tags = extract_tags(input_buffer);
    let mut spans = vec![Span::styled("Tags: ", Style::default().fg(theme.dim))];
    if tags.is_empty() {
        spans.push(Span::styled("none", Style::default().fg(theme.dim)));
    }
    for tag in tags {
        spans.push(Span::styled(format!("#{} ", tag), Style::default().fg(tag_color(&tag))));
    }
    Paragraph::new(Line::from(spans))
}

fn render_text_dialog(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: String,
    confirm_label: &'static str,
    input_buffer: &str,
    cursor_position: usize,
) {
    let dialog_area = LayoutManager::centered_rect_lines(65, 10, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block(title, theme.accent, theme);
    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Input field (borders + content)
            Constraint::Length(1), // Tag preview
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let instructions = [
        ("Enter", theme.green, confirm_label),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ];

    f.render_widget(main_block, dialog_area);
    f.render_widget(
        create_input_paragraph(input_buffer, cursor_position, "Task", theme),
        chunks[0],
    );
    f.render_widget(tag_preview(input_buffer, theme), chunks[1]);
    f.render_widget(create_instructions_paragraph(&instructions, theme), chunks[3]);
}

pub fn render_task_creation_dialog(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    input_buffer: &str,
    cursor_position: usize,
) {
    render_text_dialog(
        f,
        area,
        theme,
        "New Task".to_string(),
        " Add Task",
        input_buffer,
        cursor_position,
    );
}

pub fn render_task_edit_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    theme: &Theme,
    input_buffer: &str,
    cursor_position: usize,
) {
    render_text_dialog(
        f,
        area,
        theme,
        format!("{} Edit Task", icons.info()),
        " Save",
        input_buffer,
        cursor_position,
    );
}
