use crate::entities::Todo;
use crate::icons::IconService;
use crate::tags::split_tagged;
use crate::ui::theme::Theme;
use crate::utils::color::tag_color;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem as RatatuiListItem,
};

/// Trait for items that can be displayed in a task list
pub trait ListItem {
    /// Render this item as a ratatui ListItem
    fn render(&self, selected: bool, theme: &Theme) -> RatatuiListItem<'static>;

    /// Whether this item can be selected by the user
    fn is_selectable(&self) -> bool;
}

/// Enum representing different types of items that can appear in the task list
#[derive(Debug, Clone)]
pub enum TaskListItemType {
    Task(Box<TaskItem>),
    Header(HeaderItem),
    Separator(SeparatorItem),
}

impl TaskListItemType {
    /// The task behind this row, if it is one
    #[must_use]
    pub fn todo(&self) -> Option<&Todo> {
        match self {
            Self::Task(item) => Some(&item.todo),
            _ => None,
        }
    }
}

impl ListItem for TaskListItemType {
    fn render(&self, selected: bool, theme: &Theme) -> RatatuiListItem<'static> {
        match self {
            Self::Task(item) => item.render(selected, theme),
            Self::Header(item) => item.render(selected, theme),
            Self::Separator(item) => item.render(selected, theme),
        }
    }

    fn is_selectable(&self) -> bool {
        match self {
            Self::Task(item) => item.is_selectable(),
            Self::Header(item) => item.is_selectable(),
            Self::Separator(item) => item.is_selectable(),
        }
    }
}

/// Per-row display flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskRowState {
    /// A delete for this task is waiting for the server
    pub deleting: bool,
    /// The task is picked up in move mode
    pub moving: bool,
}

/// A task item component
#[derive(Debug, Clone)]
pub struct TaskItem {
    pub todo: Todo,
    pub state: TaskRowState,
    pub icons: IconService,
}

impl TaskItem {
    pub fn new(todo: Todo, state: TaskRowState, icons: IconService) -> Self {
        Self { todo, state, icons }
    }

    fn status_icon(&self) -> &'static str {
        if self.todo.is_temporary() || self.state.deleting {
            self.icons.task_pending_sync()
        } else if self.todo.completed {
            self.icons.task_completed()
        } else {
            self.icons.task_pending()
        }
    }
}

impl ListItem for TaskItem {
    fn render(&self, selected: bool, theme: &Theme) -> RatatuiListItem<'static> {
        let mut line_spans = Vec::new();

        if self.state.moving {
            line_spans.push(Span::styled(
                format!("{} ", self.icons.grip()),
                Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD),
            ));
        }

        let status_style = if self.todo.completed {
            Style::default().fg(theme.green)
        } else if selected {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        line_spans.push(Span::styled(format!("{} ", self.status_icon()), status_style));

        let mut content_style = if self.todo.completed {
            Style::default().fg(theme.dim).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(theme.text)
        };
        if selected {
            content_style = content_style.add_modifier(Modifier::BOLD);
        }

        // Hashtags keep their palette color, the rest follows the content style
        for (segment, is_tag) in split_tagged(&self.todo.text) {
            if is_tag {
                let tag = segment.trim_start_matches('#');
                line_spans.push(Span::styled(
                    segment.to_string(),
                    content_style.fg(tag_color(tag)).add_modifier(Modifier::BOLD),
                ));
            } else {
                line_spans.push(Span::styled(segment.to_string(), content_style));
            }
        }

        RatatuiListItem::new(Line::from(line_spans))
    }

    fn is_selectable(&self) -> bool {
        true
    }
}

/// A group header in the grouped-by-tag view
#[derive(Debug, Clone)]
pub struct HeaderItem {
    pub icon: &'static str,
    pub text: String,
    pub count: usize,
    /// Tag behind the header, `None` for the untagged group
    pub tag: Option<String>,
}

impl HeaderItem {
    pub fn new(icon: &'static str, text: String, count: usize, tag: Option<String>) -> Self {
        Self { icon, text, count, tag }
    }
}

impl ListItem for HeaderItem {
    fn render(&self, _selected: bool, theme: &Theme) -> RatatuiListItem<'static> {
        let color = self.tag.as_deref().map_or(theme.dim, tag_color);
        RatatuiListItem::new(Line::from(vec![
            Span::styled(
                format!("{} {}", self.icon, self.text),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" ({})", self.count), Style::default().fg(theme.dim)),
        ]))
    }

    fn is_selectable(&self) -> bool {
        false
    }
}

/// Blank line between groups
#[derive(Debug, Clone, Default)]
pub struct SeparatorItem;

impl ListItem for SeparatorItem {
    fn render(&self, _selected: bool, _theme: &Theme) -> RatatuiListItem<'static> {
        RatatuiListItem::new(Line::from(""))
    }

    fn is_selectable(&self) -> bool {
        false
    }
}
