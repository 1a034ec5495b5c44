use crate::api::ApiError;
use crate::entities::Todo;
use crate::store::{PendingAdd, PendingDelete, PendingEdit, PendingReorder};

/// Which pane receives list keys when no dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusArea {
    #[default]
    TaskList,
    FilterBar,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,
    ToggleFocus,

    // Task operations
    AddTodo(String),
    ToggleCompletion(String),
    DeleteTodo(String),
    ReorderTodo {
        id: String,
        new_position: usize,
    },
    MoveToTop(String),
    UndoLastAdd,

    // Edit session
    StartEdit {
        id: String,
        text: String,
    },
    ChangeEditText(String),
    CommitEdit(String),
    CancelEdit,

    // Filters and display
    ToggleTagFilter(String),
    ToggleNoTagsFilter,
    ClearFilters,
    ToggleGrouping,
    ToggleTheme,
    CycleIcons,

    // Network results
    Reload,
    Loaded(Result<Vec<Todo>, ApiError>),
    AddSettled {
        pending: PendingAdd,
        result: Result<Todo, ApiError>,
    },
    EditSettled {
        pending: PendingEdit,
        result: Result<Option<Todo>, ApiError>,
    },
    DeleteSettled {
        pending: PendingDelete,
        result: Result<(), ApiError>,
    },
    ReorderSettled {
        pending: PendingReorder,
        result: Result<(), ApiError>,
    },

    // UI actions
    ShowDialog(DialogType),
    HideDialog,
    ShowInfo(String),
    TutorialNext,
    TutorialPrev,
    DismissNotification,
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    TaskCreation,
    TaskEdit { todo_id: String, text: String },
    DeleteConfirmation { todo_id: String, text: String },
    Help,
    Logs,
    Tutorial,
    Error(String),
    Info(String),
}
