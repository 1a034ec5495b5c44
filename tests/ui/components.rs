#[path = "components/dialog_component.rs"]
mod dialog_component;

#[path = "components/filter_bar_component.rs"]
mod filter_bar_component;

#[path = "components/header_component.rs"]
mod header_component;

#[path = "components/task_list_component.rs"]
mod task_list_component;
