use crossterm::event::KeyCode;
use ratatui::widgets::ScrollbarState;

/// Lines skipped by PageUp/PageDown
const PAGE_SIZE: usize = 10;

/// Vertical scroll position of a long-content dialog
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    pub offset: usize,
    pub scrollbar: ScrollbarState,
}

impl ScrollState {
    pub fn reset(&mut self) {
        self.offset = 0;
        self.scrollbar = ScrollbarState::new(0);
    }

    /// Apply a navigation key. Returns false for keys that do not scroll.
    ///
    /// Offsets are clamped against the content length when rendering.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        self.offset = match code {
            KeyCode::Up | KeyCode::Char('k') => self.offset.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.offset.saturating_add(1),
            KeyCode::PageUp => self.offset.saturating_sub(PAGE_SIZE),
            KeyCode::PageDown => self.offset.saturating_add(PAGE_SIZE),
            KeyCode::Home => 0,
            KeyCode::End => usize::MAX,
            _ => return false,
        };
        self.scrollbar = self.scrollbar.position(self.offset);
        true
    }

    /// Clamp the offset to the content and sync the scrollbar, returning the clamped offset
    pub fn clamp(&mut self, total_lines: usize, visible_height: usize) -> usize {
        let max_scroll = total_lines.saturating_sub(visible_height);
        self.offset = self.offset.min(max_scroll);
        self.scrollbar = self
            .scrollbar
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(self.offset);
        self.offset
    }
}
