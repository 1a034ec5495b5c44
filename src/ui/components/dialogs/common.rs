use super::scroll_behavior::ScrollState;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: String, color: Color, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(color))
        .style(theme.base())
}

/// Creates an input field with a block cursor at `cursor_position` (in chars)
pub fn create_input_paragraph<'a>(
    input_buffer: &str,
    cursor_position: usize,
    field_title: &str,
    theme: &Theme,
) -> Paragraph<'a> {
    let byte_index = input_buffer
        .char_indices()
        .nth(cursor_position)
        .map_or(input_buffer.len(), |(index, _)| index);
    let (before, after) = input_buffer.split_at(byte_index);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(theme.text_bright))
        .border_style(Style::default().fg(theme.border));

    Paragraph::new(Line::from(vec![
        Span::raw(before.to_string()),
        Span::styled("█", Style::default().fg(theme.accent)),
        Span::raw(after.to_string()),
    ]))
    .block(input_block)
    .style(Style::default().fg(theme.text_bright))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut], theme: &Theme) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(theme.dim)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Render `content` inside `area`, showing the window selected by `scroll`
/// and a scrollbar when it does not fit.
pub fn render_scrollable_text(f: &mut Frame, area: Rect, content: &str, scroll: &mut ScrollState, theme: &Theme) {
    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = area.height as usize;
    let offset = scroll.clamp(total_lines, visible_height);

    let visible_text = lines
        .iter()
        .skip(offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(theme.dim))
            .thumb_style(Style::default().fg(theme.text_bright));

        f.render_stateful_widget(scrollbar, area, &mut scroll.scrollbar);
    }
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::InstructionShortcut;
    use ratatui::style::Color;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
}
