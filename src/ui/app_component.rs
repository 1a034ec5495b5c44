use crate::api::{ApiError, TodoApi};
use crate::config::Config;
use crate::constants::{
    ERROR_SETTINGS_SAVE_FAILED, SIGN_IN_REQUIRED, SUCCESS_ALL_COMPLETE, SUCCESS_TASK_ADDED, SUCCESS_TASK_DELETED,
};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::notifications::{NotificationCenter, NotificationLevel};
use crate::settings::SettingsService;
use crate::store::{CompletionWatcher, StoreError, TodoStore};
use crate::ui::components::{
    DialogComponent, FilterBarComponent, HeaderComponent, NotificationComponent, StatusBar, StatusContext,
    TaskListComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, FocusArea},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct AppComponent {
    // Component composition
    header: HeaderComponent,
    filter_bar: FilterBarComponent,
    task_list: TaskListComponent,
    dialog: DialogComponent,
    notifications_view: NotificationComponent,

    // Application state
    store: TodoStore,
    notifications: NotificationCenter,
    settings: SettingsService,
    watcher: CompletionWatcher,
    icons: IconService,
    theme: Theme,
    focus: FocusArea,
    group_by_tag: bool,
    mouse_enabled: bool,

    // Services
    api: Arc<dyn TodoApi>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, api: Arc<dyn TodoApi>, settings: SettingsService, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let icons = IconService::new(config.ui.icon_theme);
        let theme = Theme::for_mode(settings.dark_mode());

        let mut task_list = TaskListComponent::new();
        task_list.on_focus();
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            header: HeaderComponent::new(),
            filter_bar: FilterBarComponent::new(),
            task_list,
            dialog,
            notifications_view: NotificationComponent::new(),
            store: TodoStore::new(),
            notifications: NotificationCenter::from_config(&config.notifications),
            settings,
            watcher: CompletionWatcher::new(),
            icons,
            theme,
            focus: FocusArea::TaskList,
            group_by_tag: config.ui.group_by_tag,
            mouse_enabled: config.ui.mouse_enabled,
            api,
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
        };
        app.apply_appearance();
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn focus(&self) -> FocusArea {
        self.focus
    }

    pub fn is_grouped(&self) -> bool {
        self.group_by_tag
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn mouse_enabled(&self) -> bool {
        self.mouse_enabled
    }

    /// The open dialog, if any
    pub fn dialog(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Start the initial load and open the tutorial on first run
    pub fn trigger_initial_load(&mut self) {
        self.logger.log("AppComponent: Starting initial load");
        self.start_load();

        if !self.settings.has_seen_tutorial() {
            self.logger.log("AppComponent: First run, showing tutorial");
            self.dialog.update(Action::ShowDialog(DialogType::Tutorial));
            if let Err(e) = self.settings.mark_tutorial_seen() {
                self.logger.log(format!("Settings: {}: {:#}", ERROR_SETTINGS_SAVE_FAILED, e));
            }
        }
        self.sync_component_data();
    }

    fn start_load(&mut self) {
        if self.task_manager.is_loading() {
            self.logger.log("Load already in progress, ignoring");
            return;
        }
        self.task_manager.spawn_load(self.api.clone());
    }

    /// Push theme and icons to every component
    fn apply_appearance(&mut self) {
        self.header.set_theme(self.theme);
        self.filter_bar.set_theme(self.theme);
        self.task_list.set_theme(self.theme);
        self.dialog.set_theme(self.theme);
        self.notifications_view.set_theme(self.theme);

        self.header.set_icons(self.icons.clone());
        self.filter_bar.set_icons(self.icons.clone());
        self.task_list.set_icons(self.icons.clone());
        self.dialog.set_icons(self.icons.clone());
        self.notifications_view.set_icons(self.icons.clone());
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        let loading = self.task_manager.is_loading() || !self.store.is_loaded();
        self.header.update_data(&self.store, loading);
        self.filter_bar.update_data(&self.store);
        self.task_list.update_data(&self.store, self.group_by_tag);
        self.notifications_view.update_data(&self.notifications);
    }

    fn set_focus(&mut self, focus: FocusArea) {
        self.focus = focus;
        match focus {
            FocusArea::TaskList => {
                self.filter_bar.on_blur();
                self.task_list.on_focus();
            }
            FocusArea::FilterBar => {
                self.task_list.on_blur();
                self.filter_bar.on_focus();
            }
        }
    }

    fn focused_component(&mut self) -> &mut dyn Component {
        match self.focus {
            FocusArea::TaskList => &mut self.task_list,
            FocusArea::FilterBar => &mut self.filter_bar,
        }
    }

    /// Report a failed store operation. Local state is already reverted.
    fn report_store_error(&mut self, error: &StoreError) {
        self.logger.log(format!("Store: {}", error));
        match error.api_error() {
            ApiError::Unauthorized | ApiError::Token(_) => {
                self.dialog
                    .update(Action::ShowDialog(DialogType::Error(SIGN_IN_REQUIRED.to_string())));
            }
            _ => {
                self.notifications.error(error.user_message());
            }
        }
    }

    fn check_all_complete(&mut self) {
        if self.watcher.observe(self.store.todos()) {
            self.logger.log("Progress: every task is complete");
            self.notifications
                .push(NotificationLevel::Celebration, SUCCESS_ALL_COMPLETE);
        }
    }

    fn delete_todo(&mut self, todo_id: &str) {
        match self.store.delete(todo_id) {
            Some(pending) => {
                self.logger.log(format!("Task: Deleting {}", todo_id));
                self.task_manager.spawn_delete(self.api.clone(), pending);
            }
            None => self.logger.log(format!("Task: Nothing to delete for {}", todo_id)),
        }
    }

    fn reorder_todo(&mut self, todo_id: &str, new_position: usize) {
        match self.store.reorder(todo_id, new_position) {
            Some(pending) => {
                self.logger
                    .log(format!("Task: Moving {} to position {}", todo_id, pending.new_position()));
                self.task_manager.spawn_reorder(self.api.clone(), pending);
            }
            None => self.logger.log(format!("Task: {} already at position {}", todo_id, new_position)),
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Tutorial),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('T') => Action::ToggleTheme,
            KeyCode::Char('g') => Action::ToggleGrouping,
            KeyCode::Char('u') => Action::UndoLastAdd,
            KeyCode::Char('i') => Action::CycleIcons,
            KeyCode::Char('r') => Action::Reload,
            KeyCode::Char('c') => Action::ClearFilters,
            KeyCode::Tab | KeyCode::BackTab => Action::ToggleFocus,
            KeyCode::Esc => Action::DismissNotification,
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::ToggleFocus => {
                let next = match self.focus {
                    FocusArea::TaskList => FocusArea::FilterBar,
                    FocusArea::FilterBar => FocusArea::TaskList,
                };
                self.set_focus(next);
            }

            // Task operations
            Action::AddTodo(text) => match self.store.add(&text) {
                Some(pending) => {
                    self.logger.log(format!("Task: Adding '{}' as {}", text.trim(), pending.temp_id()));
                    self.task_manager.spawn_add(self.api.clone(), pending);
                }
                None => self.logger.log("Task: Ignoring blank add"),
            },
            Action::ToggleCompletion(todo_id) => {
                if let Some(pending) = self.store.toggle_completion(&todo_id) {
                    self.logger.log(format!("Task: Toggling completion of {}", todo_id));
                    self.task_manager.spawn_edit(self.api.clone(), pending);
                }
            }
            Action::DeleteTodo(todo_id) => self.delete_todo(&todo_id),
            Action::ReorderTodo { id, new_position } => self.reorder_todo(&id, new_position),
            Action::MoveToTop(todo_id) => self.reorder_todo(&todo_id, 0),
            Action::UndoLastAdd => match self.store.last_added().map(str::to_string) {
                Some(todo_id) => {
                    self.logger.log(format!("Task: Undoing add of {}", todo_id));
                    self.delete_todo(&todo_id);
                }
                None => {
                    self.notifications.info("Nothing to undo");
                }
            },

            // Edit session
            Action::StartEdit { id, text } => {
                self.logger.log(format!("Task: Editing {}", id));
                self.store.start_edit(&id, &text);
                self.dialog
                    .update(Action::ShowDialog(DialogType::TaskEdit { todo_id: id, text }));
            }
            Action::ChangeEditText(text) => self.store.change_edit_text(&text),
            Action::CommitEdit(todo_id) => {
                if let Some(pending) = self.store.commit_edit(&todo_id) {
                    self.logger.log(format!("Task: Saving text of {}", todo_id));
                    self.task_manager.spawn_edit(self.api.clone(), pending);
                }
            }
            Action::CancelEdit => {
                self.logger.log("Task: Edit cancelled");
                self.store.cancel_edit();
            }

            // Filters and display
            Action::ToggleTagFilter(tag) => {
                self.store.toggle_tag_filter(&tag);
                self.logger.log(format!("Filter: {:?}", self.store.filter_mode()));
            }
            Action::ToggleNoTagsFilter => {
                self.store.toggle_no_tags_filter();
                self.logger.log(format!("Filter: {:?}", self.store.filter_mode()));
            }
            Action::ClearFilters => {
                self.store.clear_filters();
                self.logger.log("Filter: cleared");
            }
            Action::ToggleGrouping => {
                self.group_by_tag = !self.group_by_tag;
                self.logger.log(format!("Display: group by tag = {}", self.group_by_tag));
            }
            Action::ToggleTheme => {
                if let Err(e) = self.settings.toggle_dark_mode() {
                    self.logger.log(format!("Settings: {}: {:#}", ERROR_SETTINGS_SAVE_FAILED, e));
                    self.notifications.error(ERROR_SETTINGS_SAVE_FAILED);
                }
                self.theme = Theme::for_mode(self.settings.dark_mode());
                self.apply_appearance();
            }
            Action::CycleIcons => {
                self.icons.cycle_icon_theme();
                self.logger.log(format!("Display: icon theme {:?}", self.icons.theme()));
                self.apply_appearance();
            }

            // Network
            Action::Reload => {
                self.logger.log("Reloading task list");
                self.start_load();
            }
            Action::Loaded(result) => {
                self.task_manager.finish_load();
                match self.store.settle_load(result) {
                    Ok(()) => {
                        self.logger.log(format!("Loaded {} tasks", self.store.todos().len()));
                        self.watcher.prime(self.store.todos());
                    }
                    Err(e) => self.report_store_error(&e),
                }
            }
            Action::AddSettled { pending, result } => match self.store.settle_add(pending, result) {
                Ok(()) => {
                    self.notifications.success(SUCCESS_TASK_ADDED);
                }
                Err(e) => self.report_store_error(&e),
            },
            Action::EditSettled { pending, result } => {
                if let Err(e) = self.store.settle_edit(pending, result) {
                    self.report_store_error(&e);
                }
            }
            Action::DeleteSettled { pending, result } => match self.store.settle_delete(pending, result) {
                Ok(()) => {
                    self.notifications.success(SUCCESS_TASK_DELETED);
                }
                Err(e) => self.report_store_error(&e),
            },
            Action::ReorderSettled { pending, result } => {
                if let Err(e) = self.store.settle_reorder(pending, result) {
                    self.report_store_error(&e);
                }
            }

            // UI
            Action::ShowDialog(dialog_type) => {
                self.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
                self.dialog.update(Action::ShowDialog(dialog_type));
            }
            Action::HideDialog => {
                self.logger.log("Dialog: Hiding current dialog");
            }
            Action::ShowInfo(message) => {
                self.notifications.info(message);
            }
            Action::DismissNotification => {
                self.notifications.dismiss_latest();
            }
            Action::NextTask | Action::PreviousTask | Action::TutorialNext | Action::TutorialPrev | Action::None => {}
        }

        self.check_all_complete();
        self.sync_component_data();
        Action::None
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            self.logger.log(format!("Background: Received action {:?}", action));
            actions.push(action);
        }

        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            self.logger.log(format!(
                "Background: Cleaned up {} finished tasks",
                completed_tasks.len()
            ));
        }

        actions
    }

    /// Drop expired notifications. Returns true if the screen needs a redraw.
    pub fn expire_notifications(&mut self) -> bool {
        let expired = self.notifications.tick();
        if expired {
            self.notifications_view.update_data(&self.notifications);
        }
        expired
    }

    /// Check if any background operations are running
    pub fn is_busy(&self) -> bool {
        self.task_manager.task_count() > 0
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Mouse(mouse) => {
                if self.mouse_enabled && !self.dialog.is_visible() {
                    self.task_list.handle_mouse_event(mouse)
                } else {
                    Action::None
                }
            }
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.handle_global_key(key)
                } else {
                    let component = self.focused_component();
                    let captures = component.captures_input();
                    let action = component.handle_key_events(key);
                    if captures || !matches!(action, Action::None) {
                        action
                    } else {
                        self.handle_global_key(key)
                    }
                }
            }
            EventType::Tick => {
                self.expire_notifications();
                Action::None
            }
            EventType::Resize(_, _) | EventType::Render | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action).await;

        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Routing goes through handle_event; this only covers global keys
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let layout = LayoutManager::main_layout(rect);

        self.header.render(f, layout.header);
        self.filter_bar.render(f, layout.filter_bar);
        self.task_list.render(f, layout.task_list);
        StatusBar::render(
            f,
            layout.status_bar,
            StatusContext {
                focus: self.focus,
                moving: self.task_list.is_moving(),
                pending_requests: self.task_manager.task_count(),
            },
            &self.theme,
        );

        if !self.store.is_loaded() && self.task_manager.is_loading() {
            self.render_loading_impl(f, rect);
        }

        self.notifications_view.render(f, rect);

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}

impl AppComponent {
    /// Render the loading indicator shown until the first load settles
    fn render_loading_impl(&self, f: &mut Frame, rect: Rect) {
        use crate::constants::LOADING_MESSAGE;
        use ratatui::{
            layout::Alignment,
            style::Style,
            text::{Line, Span},
            widgets::{Block, Borders, Clear, Paragraph},
        };

        let popup_area = LayoutManager::centered_rect_lines(30, 3, rect);

        let content = Paragraph::new(Line::from(Span::styled(
            format!("⟳ {}", LOADING_MESSAGE),
            Style::default().fg(self.theme.yellow),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(self.theme.yellow).bg(self.theme.background)),
        );

        f.render_widget(Clear, popup_area);
        f.render_widget(content, popup_area);
    }
}
