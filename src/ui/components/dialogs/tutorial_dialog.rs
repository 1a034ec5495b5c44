use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::tutorial::Tutorial;
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_tutorial_dialog(f: &mut Frame, area: Rect, theme: &Theme, tutorial: &Tutorial) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 11, area);
    f.render_widget(Clear, dialog_area);

    let step = tutorial.current();
    let title = format!("Tutorial {}/{}", tutorial.index() + 1, tutorial.len());
    let block = create_dialog_block(title, theme.purple, theme);
    let inner = block.inner(dialog_area);
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(2),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(inner);

    let heading = Paragraph::new(step.title)
        .style(Style::default().fg(theme.text_bright).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    let body = Paragraph::new(step.body)
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let next_label = if tutorial.is_last() { " Finish" } else { " Next" };
    let instructions = [
        ("←", theme.accent, " Back"),
        shortcuts::SEPARATOR,
        ("→/Enter", theme.green, next_label),
        shortcuts::SEPARATOR,
        ("Esc", theme.red, " Skip"),
    ];

    f.render_widget(block, dialog_area);
    f.render_widget(heading, chunks[0]);
    f.render_widget(body, chunks[2]);
    f.render_widget(create_instructions_paragraph(&instructions, theme), chunks[3]);
}
