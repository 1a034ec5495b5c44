use crate::icons::IconService;
use crate::notifications::{Notification, NotificationCenter, NotificationLevel};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Theme;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Stack of toasts in the top-right corner, newest on top
pub struct NotificationComponent {
    pub visible: Vec<Notification>,
    pub overflow: usize,
    pub icons: IconService,
    pub theme: Theme,
}

impl Default for NotificationComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationComponent {
    pub fn new() -> Self {
        Self {
            visible: Vec::new(),
            overflow: 0,
            icons: IconService::default(),
            theme: Theme::default(),
        }
    }

    pub fn update_data(&mut self, center: &NotificationCenter) {
        self.visible = center.visible().into_iter().cloned().collect();
        self.overflow = center.overflow();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    fn level_icon(&self, level: NotificationLevel) -> &'static str {
        match level {
            NotificationLevel::Info => self.icons.info(),
            NotificationLevel::Success => self.icons.success(),
            NotificationLevel::Error => self.icons.error(),
            NotificationLevel::Celebration => self.icons.celebration(),
        }
    }

    fn level_color(&self, level: NotificationLevel) -> ratatui::style::Color {
        match level {
            NotificationLevel::Info => self.theme.blue,
            NotificationLevel::Success => self.theme.green,
            NotificationLevel::Error => self.theme.red,
            NotificationLevel::Celebration => self.theme.purple,
        }
    }
}

impl Component for NotificationComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.visible.is_empty() {
            return;
        }

        let slots = self.visible.len() + usize::from(self.overflow > 0);
        let area = LayoutManager::notification_area(rect, slots);

        for (index, notification) in self.visible.iter().enumerate() {
            let y = area.y + u16::try_from(index * 3).unwrap_or(u16::MAX);
            if y + 3 > area.y + area.height {
                break;
            }
            let toast_area = Rect::new(area.x, y, area.width, 3);
            let color = self.level_color(notification.level);

            let toast = Paragraph::new(format!(
                "{} {}",
                self.level_icon(notification.level),
                notification.message
            ))
            .style(Style::default().fg(self.theme.text_bright).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color))
                    .style(self.theme.base()),
            );

            f.render_widget(Clear, toast_area);
            f.render_widget(toast, toast_area);
        }

        if self.overflow > 0 {
            let y = area.y + u16::try_from(self.visible.len() * 3).unwrap_or(u16::MAX);
            if y + 3 <= area.y + area.height {
                let more_area = Rect::new(area.x, y, area.width, 3);
                let more = Paragraph::new(format!("+{} more", self.overflow))
                    .style(Style::default().fg(self.theme.dim))
                    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
                f.render_widget(Clear, more_area);
                f.render_widget(more, more_area);
            }
        }
    }
}
