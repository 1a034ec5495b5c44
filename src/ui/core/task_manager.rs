//! Background network work.
//!
//! Each API call runs on its own tokio task and reports back by sending a
//! settlement [`Action`] over an unbounded channel drained by the UI loop.
//! Calls may finish in any order.

use super::actions::Action;
use crate::api::TodoApi;
use crate::store::{PendingAdd, PendingDelete, PendingEdit, PendingReorder};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
    /// Load whose `Loaded` result has not been handled yet
    load_task: Option<TaskId>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
                load_task: None,
            },
            rx,
        )
    }

    fn spawn<Fut>(&mut self, description: String, operation: Fut) -> TaskId
    where
        Fut: Future<Output = Action> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            let action = operation.await;
            // The receiver is gone only while shutting down
            if action_sender.send(action).is_err() {
                log::debug!("Dropping background result: UI loop has stopped");
            }
        });

        log::debug!("Spawned background task {}: {}", task_id, description);
        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Fetch the whole list. Loading lasts until [`TaskManager::finish_load`].
    pub fn spawn_load(&mut self, api: Arc<dyn TodoApi>) -> TaskId {
        let task_id = self.spawn("Load to-dos".to_string(), async move {
            Action::Loaded(api.list_todos().await)
        });
        self.load_task = Some(task_id);
        task_id
    }

    /// Mark the load as settled once its `Loaded` action has been handled
    pub fn finish_load(&mut self) -> Option<TaskId> {
        self.load_task.take()
    }

    pub fn spawn_add(&mut self, api: Arc<dyn TodoApi>, pending: PendingAdd) -> TaskId {
        let description = format!("Add {}", pending.temp_id());
        self.spawn(description, async move {
            let result = pending.send(&*api).await;
            Action::AddSettled { pending, result }
        })
    }

    pub fn spawn_edit(&mut self, api: Arc<dyn TodoApi>, pending: PendingEdit) -> TaskId {
        let description = format!("Edit {}", pending.todo_id());
        self.spawn(description, async move {
            let result = pending.send(&*api).await;
            Action::EditSettled { pending, result }
        })
    }

    pub fn spawn_delete(&mut self, api: Arc<dyn TodoApi>, pending: PendingDelete) -> TaskId {
        let description = format!("Delete {}", pending.todo_id());
        self.spawn(description, async move {
            let result = pending.send(&*api).await;
            Action::DeleteSettled { pending, result }
        })
    }

    pub fn spawn_reorder(&mut self, api: Arc<dyn TodoApi>, pending: PendingReorder) -> TaskId {
        let description = format!("Reorder {} to {}", pending.todo_id(), pending.new_position());
        self.spawn(description, async move {
            let result = pending.send(&*api).await;
            Action::ReorderSettled { pending, result }
        })
    }

    /// Forget tasks whose handle has finished, returning their descriptions
    pub fn cleanup_finished_tasks(&mut self) -> Vec<String> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        finished
            .into_iter()
            .filter_map(|id| self.tasks.remove(&id))
            .map(|task| {
                log::debug!(
                    "Background task {} finished after {:?}",
                    task.id,
                    task.started_at.elapsed()
                );
                task.description
            })
            .collect()
    }

    /// Whether the initial or a manual reload is still unsettled
    pub fn is_loading(&self) -> bool {
        self.load_task.is_some()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        self.load_task = None;
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all_tasks();
    }
}
