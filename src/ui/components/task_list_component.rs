use crate::constants::{EMPTY_FILTER_MESSAGE, EMPTY_LIST_MESSAGE, UNTAGGED_GROUP_TITLE};
use crate::entities::Todo;
use crate::icons::IconService;
use crate::store::TodoStore;
use crate::ui::components::task_list_item_component::{
    HeaderItem, ListItem, SeparatorItem, TaskItem, TaskListItemType, TaskRowState,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem as RatatuiListItem, ListState},
    Frame,
};
use std::collections::HashSet;

/// A task picked up with `m`, previewed at `target` until dropped
#[derive(Debug, Clone, PartialEq, Eq)]
struct MoveState {
    todo_id: String,
    origin: usize,
    target: usize,
}

pub struct TaskListComponent {
    pub items: Vec<TaskListItemType>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub icons: IconService,
    pub theme: Theme,
    /// Visible tasks in display order
    flat: Vec<Todo>,
    /// Store position of each entry of `flat`
    positions: Vec<usize>,
    groups: Vec<(Option<String>, Vec<Todo>)>,
    deleting: HashSet<String>,
    grouped: bool,
    empty_message: &'static str,
    move_state: Option<MoveState>,
    focused: bool,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            icons: IconService::default(),
            theme: Theme::default(),
            flat: Vec::new(),
            positions: Vec::new(),
            groups: Vec::new(),
            deleting: HashSet::new(),
            grouped: false,
            empty_message: EMPTY_LIST_MESSAGE,
            move_state: None,
            focused: true,
        }
    }

    /// Refresh rows from the store, keeping the selection on the same task when possible
    pub fn update_data(&mut self, store: &TodoStore, grouped: bool) {
        let selected_id = self.get_selected_todo().map(|todo| todo.todo_id.clone());

        self.grouped = grouped;
        self.flat = store.visible().into_iter().cloned().collect();
        self.positions = self
            .flat
            .iter()
            .map(|todo| store.position_of(&todo.todo_id).unwrap_or_default())
            .collect();
        self.groups = if grouped {
            store
                .grouped()
                .into_iter()
                .map(|group| (group.tag, group.todos.into_iter().cloned().collect()))
                .collect()
        } else {
            Vec::new()
        };
        self.deleting = self
            .flat
            .iter()
            .filter(|todo| store.is_deleting(&todo.todo_id))
            .map(|todo| todo.todo_id.clone())
            .collect();
        self.empty_message = if store.todos().is_empty() {
            EMPTY_LIST_MESSAGE
        } else {
            EMPTY_FILTER_MESSAGE
        };

        // The picked-up task may have moved or vanished underneath us
        if let Some(mut state) = self.move_state.take() {
            if !grouped {
                if let Some(origin) = self.flat.iter().position(|todo| todo.todo_id == state.todo_id) {
                    state.origin = origin;
                    state.target = state.target.min(self.flat.len().saturating_sub(1));
                    self.move_state = Some(state);
                }
            }
        }

        self.rebuild_items();

        if let Some(id) = selected_id {
            if let Some(index) = self.selectable_todos().iter().position(|todo| todo.todo_id == id) {
                self.selected_index = index;
            }
        }
        if let Some(state) = &self.move_state {
            self.selected_index = state.target;
        }
        self.update_list_state();
    }

    fn rebuild_items(&mut self) {
        let mut items = Vec::new();

        if self.grouped {
            for (index, (tag, todos)) in self.groups.iter().enumerate() {
                if index > 0 {
                    items.push(TaskListItemType::Separator(SeparatorItem));
                }
                let (icon, title) = match tag {
                    Some(tag) => (self.icons.tag_group(), format!("#{}", tag)),
                    None => (self.icons.untagged_group(), UNTAGGED_GROUP_TITLE.to_string()),
                };
                items.push(TaskListItemType::Header(HeaderItem::new(
                    icon,
                    title,
                    todos.len(),
                    tag.clone(),
                )));
                for todo in todos {
                    items.push(self.task_row(todo));
                }
            }
        } else {
            let mut order: Vec<&Todo> = self.flat.iter().collect();
            if let Some(state) = &self.move_state {
                if state.origin < order.len() {
                    let picked = order.remove(state.origin);
                    order.insert(state.target.min(order.len()), picked);
                }
            }
            for todo in order {
                items.push(self.task_row(todo));
            }
        }

        self.items = items;
    }

    fn task_row(&self, todo: &Todo) -> TaskListItemType {
        let state = TaskRowState {
            deleting: self.deleting.contains(&todo.todo_id),
            moving: self
                .move_state
                .as_ref()
                .is_some_and(|state| state.todo_id == todo.todo_id),
        };
        TaskListItemType::Task(Box::new(TaskItem::new(todo.clone(), state, self.icons.clone())))
    }

    /// Row indices of selectable items
    fn selectable_rows(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_selectable())
            .map(|(row, _)| row)
            .collect()
    }

    fn selectable_todos(&self) -> Vec<&Todo> {
        self.items.iter().filter_map(TaskListItemType::todo).collect()
    }

    fn update_list_state(&mut self) {
        let rows = self.selectable_rows();
        if rows.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= rows.len() {
                self.selected_index = rows.len() - 1;
            }
            self.list_state.select(Some(rows[self.selected_index]));
        }
    }

    pub fn get_selected_todo(&self) -> Option<&Todo> {
        self.selectable_rows()
            .get(self.selected_index)
            .and_then(|row| self.items.get(*row))
            .and_then(TaskListItemType::todo)
    }

    pub fn is_grouped(&self) -> bool {
        self.grouped
    }

    pub fn is_moving(&self) -> bool {
        self.move_state.is_some()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
        self.rebuild_items();
    }

    /// Store position the task at visible index `index` currently holds
    fn position_at(&self, index: usize) -> Option<usize> {
        self.positions.get(index).copied()
    }

    fn handle_move_keys(&mut self, key: KeyEvent) -> Action {
        let Some(state) = self.move_state.as_mut() else {
            return Action::None;
        };

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                state.target = (state.target + 1).min(self.flat.len().saturating_sub(1));
                self.selected_index = state.target;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                state.target = state.target.saturating_sub(1);
                self.selected_index = state.target;
            }
            KeyCode::Enter | KeyCode::Char('m') => {
                let dropped = self.move_state.take();
                self.rebuild_items();
                self.update_list_state();
                return match dropped {
                    Some(state) if state.target != state.origin => match self.position_at(state.target) {
                        Some(new_position) => Action::ReorderTodo {
                            id: state.todo_id,
                            new_position,
                        },
                        None => Action::None,
                    },
                    _ => Action::None,
                };
            }
            KeyCode::Esc => {
                if let Some(state) = self.move_state.take() {
                    self.selected_index = state.origin;
                }
            }
            _ => return Action::None,
        }

        self.rebuild_items();
        self.update_list_state();
        Action::None
    }

    fn start_move(&mut self) -> Action {
        if self.grouped {
            return Action::ShowInfo("Switch to the list view with 'g' to reorder tasks".to_string());
        }
        if let Some(todo_id) = self.get_selected_todo().map(|todo| todo.todo_id.clone()) {
            self.move_state = Some(MoveState {
                todo_id,
                origin: self.selected_index,
                target: self.selected_index,
            });
            self.rebuild_items();
            self.update_list_state();
        }
        Action::None
    }

    /// Move the selected task into the slot of its visible neighbour
    fn shift(&self, up: bool) -> Action {
        if self.grouped {
            return Action::ShowInfo("Switch to the list view with 'g' to reorder tasks".to_string());
        }
        let Some(todo) = self.get_selected_todo() else {
            return Action::None;
        };
        let neighbour = if up {
            self.selected_index.checked_sub(1)
        } else {
            Some(self.selected_index + 1)
        };
        match neighbour.and_then(|index| self.position_at(index)) {
            Some(new_position) => Action::ReorderTodo {
                id: todo.todo_id.clone(),
                new_position,
            },
            None => Action::None,
        }
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.is_moving() {
            return self.handle_move_keys(key);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('x') => match self.get_selected_todo() {
                Some(todo) => Action::ToggleCompletion(todo.todo_id.clone()),
                None => Action::None,
            },
            KeyCode::Char('e') => match self.get_selected_todo() {
                Some(todo) => Action::StartEdit {
                    id: todo.todo_id.clone(),
                    text: todo.text.clone(),
                },
                None => Action::None,
            },
            KeyCode::Char('d') => match self.get_selected_todo() {
                Some(todo) if !self.deleting.contains(&todo.todo_id) => {
                    Action::ShowDialog(DialogType::DeleteConfirmation {
                        todo_id: todo.todo_id.clone(),
                        text: todo.text.clone(),
                    })
                }
                _ => Action::None,
            },
            KeyCode::Char('a') => Action::ShowDialog(DialogType::TaskCreation),
            KeyCode::Char('m') => self.start_move(),
            KeyCode::Char('K') => self.shift(true),
            KeyCode::Char('J') => self.shift(false),
            KeyCode::Char('t') => match self.get_selected_todo() {
                Some(todo) => Action::MoveToTop(todo.todo_id.clone()),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::ScrollUp => Action::PreviousTask,
            MouseEventKind::ScrollDown => Action::NextTask,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                let count = self.selectable_rows().len();
                if count > 0 && !self.is_moving() {
                    self.selected_index = (self.selected_index + 1) % count;
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                let count = self.selectable_rows().len();
                if count > 0 && !self.is_moving() {
                    self.selected_index = if self.selected_index == 0 {
                        count - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let mut title = vec![Span::styled(
            format!(" {} Tasks ", self.icons.tasks_title()),
            self.theme.title_style(),
        )];
        if self.grouped {
            title.push(Span::styled("[by tag] ", Style::default().fg(self.theme.dim)));
        }
        if self.is_moving() {
            title.push(Span::styled("[moving] ", Style::default().fg(self.theme.yellow)));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title))
            .border_style(self.theme.border_style(self.focused))
            .style(self.theme.base());

        if self.items.is_empty() {
            let empty_list = List::new(vec![RatatuiListItem::new(Span::styled(
                self.empty_message,
                Style::default().fg(self.theme.dim),
            ))])
            .block(block);

            f.render_stateful_widget(empty_list, rect, &mut self.list_state);
        } else {
            let selected_row = self.list_state.selected();
            let items: Vec<RatatuiListItem> = self
                .items
                .iter()
                .enumerate()
                .map(|(row, item)| item.render(Some(row) == selected_row, &self.theme))
                .collect();

            let tasks_list = List::new(items)
                .block(block)
                .highlight_style(self.theme.highlight_style());

            f.render_stateful_widget(tasks_list, rect, &mut self.list_state);
        }
    }

    fn captures_input(&self) -> bool {
        self.is_moving()
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
