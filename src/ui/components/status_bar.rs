//! Status bar component

use crate::ui::core::FocusArea;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// What the status bar should describe this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusContext {
    pub focus: FocusArea,
    pub moving: bool,
    pub pending_requests: usize,
}

/// One-line key hints at the bottom of the screen
pub struct StatusBar;

impl StatusBar {
    #[must_use]
    pub fn text(context: StatusContext) -> String {
        let hints = if context.moving {
            "j/k: move • Enter: drop • Esc: cancel"
        } else if context.focus == FocusArea::FilterBar {
            "←/→: select tag • Space: toggle • n: no tags • c: clear • Tab: back to tasks"
        } else {
            "a: add • e: edit • Space: toggle • d: delete • m: move • Tab: filter • h: help • q: quit"
        };

        if context.pending_requests > 0 {
            format!("⟳ {} pending • {}", context.pending_requests, hints)
        } else {
            hints.to_string()
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, context: StatusContext, theme: &Theme) {
        let color = if context.moving {
            theme.yellow
        } else {
            theme.dim
        };

        let status_bar = Paragraph::new(Self::text(context))
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).bg(theme.background));

        f.render_widget(status_bar, area);
    }
}
