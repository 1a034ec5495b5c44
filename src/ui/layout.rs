//! Layout management and calculations

use crate::constants::{FILTER_BAR_HEIGHT, HEADER_HEIGHT, NOTIFICATION_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

/// The four horizontal bands of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub header: Rect,
    pub filter_bar: Rect,
    pub task_list: Rect,
    pub status_bar: Rect,
}

impl LayoutManager {
    /// Split the screen: progress header, tag filter bar, task list, one-line status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> MainLayout {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(FILTER_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        MainLayout {
            header: chunks[0],
            filter_bar: chunks[1],
            task_list: chunks[2],
            status_bar: chunks[3],
        }
    }

    /// Area for the notification stack: top-right corner, three lines per notification
    #[must_use]
    pub fn notification_area(area: Rect, count: usize) -> Rect {
        let width = NOTIFICATION_WIDTH.min(area.width);
        let height = u16::try_from(count.saturating_mul(3)).unwrap_or(u16::MAX).min(area.height);
        Rect::new(area.x + area.width.saturating_sub(width), area.y, width, height)
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
