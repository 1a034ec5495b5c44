use crate::constants::{APP_TITLE, LOADING_MESSAGE};
use crate::icons::IconService;
use crate::store::TodoStore;
use crate::ui::core::{actions::Action, Component};
use crate::ui::theme::Theme;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Title line and completion gauge
pub struct HeaderComponent {
    pub completed: usize,
    pub total: usize,
    /// Percentage in `[0, 100]`
    pub progress: f64,
    pub loading: bool,
    pub icons: IconService,
    pub theme: Theme,
}

impl Default for HeaderComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderComponent {
    pub fn new() -> Self {
        Self {
            completed: 0,
            total: 0,
            progress: 0.0,
            loading: true,
            icons: IconService::default(),
            theme: Theme::default(),
        }
    }

    pub fn update_data(&mut self, store: &TodoStore, loading: bool) {
        self.completed = store.completed_count();
        self.total = store.todos().len();
        self.progress = store.progress();
        self.loading = loading;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    /// "3/5 tasks completed"
    pub fn summary(&self) -> String {
        format!("{}/{} tasks completed", self.completed, self.total)
    }
}

impl Component for HeaderComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false))
            .style(self.theme.base());
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::horizontal([Constraint::Length(28), Constraint::Min(10)]).split(inner);

        let mode = if self.theme.dark { "dark" } else { "light" };
        let title = Paragraph::new(Line::from(vec![
            Span::styled(APP_TITLE, self.theme.title_style()),
            Span::styled(format!(" ({})", mode), Style::default().fg(self.theme.dim)),
        ]));
        f.render_widget(title, chunks[0]);

        let label = if self.loading {
            LOADING_MESSAGE.to_string()
        } else if self.total > 0 && self.completed == self.total {
            format!("{} {}", self.icons.celebration(), self.summary())
        } else {
            self.summary()
        };

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(self.theme.green).bg(self.theme.border))
            .label(Span::styled(
                label,
                Style::default().fg(self.theme.text_bright).add_modifier(Modifier::BOLD),
            ))
            .ratio((self.progress / 100.0).clamp(0.0, 1.0));
        f.render_widget(gauge, chunks[1]);
    }
}
