//! Horizontal bar of tag chips driving the tag filter.
//!
//! The first chip is the "no tags" filter, followed by every known tag with
//! its usage count. `Space`/`Enter` cycles the selected chip, `n` cycles the
//! no-tags filter directly and `c` clears everything.

use crate::constants::NO_TAGS_FILTER_LABEL;
use crate::icons::IconService;
use crate::store::{NoTagsFilter, TagFilter, TodoStore};
use crate::ui::core::{actions::Action, Component};
use crate::ui::theme::Theme;
use crate::utils::color::tag_color;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One tag chip: name, number of tasks carrying it, current filter state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub tag: String,
    pub count: usize,
    pub state: Option<TagFilter>,
}

pub struct FilterBarComponent {
    pub chips: Vec<TagChip>,
    pub no_tags: Option<NoTagsFilter>,
    /// 0 is the no-tags chip, `i + 1` is `chips[i]`
    pub selected_index: usize,
    pub icons: IconService,
    pub theme: Theme,
    focused: bool,
}

impl Default for FilterBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterBarComponent {
    pub fn new() -> Self {
        Self {
            chips: Vec::new(),
            no_tags: None,
            selected_index: 0,
            icons: IconService::default(),
            theme: Theme::default(),
            focused: false,
        }
    }

    pub fn update_data(&mut self, store: &TodoStore) {
        self.chips = store
            .known_tags()
            .into_iter()
            .map(|tag| TagChip {
                count: store.tag_counts().get(&tag),
                state: store.tag_filter_state(&tag),
                tag,
            })
            .collect();
        self.no_tags = store.filter_mode().no_tags_state();
        self.selected_index = self.selected_index.min(self.chips.len());
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn chip_count(&self) -> usize {
        self.chips.len() + 1
    }

    fn toggle_selected(&self) -> Action {
        match self.selected_index {
            0 => Action::ToggleNoTagsFilter,
            index => self
                .chips
                .get(index - 1)
                .map_or(Action::None, |chip| Action::ToggleTagFilter(chip.tag.clone())),
        }
    }

    fn state_icon(&self, state: Option<TagFilter>) -> &'static str {
        match state {
            Some(TagFilter::Include) => self.icons.filter_include(),
            Some(TagFilter::Exclude) => self.icons.filter_exclude(),
            None => self.icons.filter_neutral(),
        }
    }

    fn chip_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        let selected = |index: usize| self.focused && self.selected_index == index;

        // RequireNone keeps untagged tasks, RequireSome drops them
        let no_tags_icon = match self.no_tags {
            Some(NoTagsFilter::RequireNone) => self.icons.filter_include(),
            Some(NoTagsFilter::RequireSome) => self.icons.filter_exclude(),
            None => self.icons.filter_neutral(),
        };
        let mut style = if self.no_tags.is_some() {
            Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.dim)
        };
        if selected(0) {
            style = style.bg(self.theme.selection_bg).add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!(" {}{} ", no_tags_icon, NO_TAGS_FILTER_LABEL), style));

        for (index, chip) in self.chips.iter().enumerate() {
            spans.push(Span::raw(" "));
            let mut style = Style::default().fg(tag_color(&chip.tag));
            match chip.state {
                Some(TagFilter::Include) => style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                Some(TagFilter::Exclude) => style = style.add_modifier(Modifier::CROSSED_OUT | Modifier::DIM),
                None => {}
            }
            if selected(index + 1) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(
                format!(" {}#{} {} ", self.state_icon(chip.state), chip.tag, chip.count),
                style,
            ));
        }

        spans
    }
}

impl Component for FilterBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left => {
                self.selected_index = if self.selected_index == 0 {
                    self.chip_count() - 1
                } else {
                    self.selected_index - 1
                };
                Action::None
            }
            KeyCode::Right => {
                self.selected_index = (self.selected_index + 1) % self.chip_count();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('n') => Action::ToggleNoTagsFilter,
            KeyCode::Char('c') => Action::ClearFilters,
            KeyCode::Esc => Action::ToggleFocus,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = if self.focused {
            " Filter - ←/→ select, Space toggle, n no-tags, c clear "
        } else {
            " Filter (Tab) "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, self.theme.title_style()))
            .border_style(self.theme.border_style(self.focused))
            .style(self.theme.base());

        let paragraph = Paragraph::new(Line::from(self.chip_spans())).block(block);
        f.render_widget(paragraph, rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
