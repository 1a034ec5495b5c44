use std::sync::Arc;
use std::time::Duration;

use typetodo::api::ApiError;
use typetodo::store::TodoStore;
use typetodo::ui::core::{Action, TaskManager};

use crate::support::FakeApi;

async fn next_action(rx: &mut tokio::sync::mpsc::UnboundedReceiver<Action>) -> Action {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("background task reported in time")
        .expect("channel open")
}

#[tokio::test]
async fn test_load_reports_over_channel() {
    let (mut manager, mut rx) = TaskManager::new();
    let api = Arc::new(FakeApi::with_todos(&["A #x", "B"]));

    let load_id = manager.spawn_load(api);
    assert!(manager.is_loading());
    assert_eq!(manager.task_count(), 1);

    match next_action(&mut rx).await {
        Action::Loaded(Ok(todos)) => assert_eq!(todos.len(), 2),
        other => panic!("expected Loaded, got {:?}", other),
    }

    tokio::time::sleep(Duration::from_millis(20)).await;
    let finished = manager.cleanup_finished_tasks();
    assert_eq!(finished, vec!["Load to-dos".to_string()]);
    assert_eq!(manager.task_count(), 0);

    // Still loading until the result has been handled
    assert!(manager.is_loading());
    assert_eq!(manager.finish_load(), Some(load_id));
    assert!(!manager.is_loading());
}

#[tokio::test]
async fn test_handled_load_ends_loading_before_cleanup() {
    let (mut manager, mut rx) = TaskManager::new();
    let api = Arc::new(FakeApi::with_todos(&["A"]));

    manager.spawn_load(api.clone());
    assert!(matches!(next_action(&mut rx).await, Action::Loaded(Ok(_))));

    // The handle may not have finished yet; the settled result is what counts
    manager.finish_load();
    assert!(!manager.is_loading());

    let reload_id = manager.spawn_load(api);
    assert!(manager.is_loading());
    assert_eq!(manager.finish_load(), Some(reload_id));
}

#[tokio::test]
async fn test_add_is_not_a_load() {
    let (mut manager, _rx) = TaskManager::new();
    let api = Arc::new(FakeApi::with_todos(&[]));
    let mut store = TodoStore::new();
    store.settle_load(Ok(Vec::new())).unwrap();

    let pending = store.add("Load the dishwasher").expect("non-blank text");
    manager.spawn_add(api, pending);
    assert!(!manager.is_loading());
    assert_eq!(manager.finish_load(), None);
}

#[tokio::test]
async fn test_add_settlement_carries_ticket() {
    let (mut manager, mut rx) = TaskManager::new();
    let api = Arc::new(FakeApi::with_todos(&[]));
    let mut store = TodoStore::new();
    store.settle_load(Ok(Vec::new())).unwrap();

    let pending = store.add("Buy milk #shop").expect("non-blank text");
    let temp_id = pending.temp_id().to_string();
    manager.spawn_add(api, pending);
    assert!(!manager.is_loading());

    match next_action(&mut rx).await {
        Action::AddSettled { pending, result } => {
            assert_eq!(pending.temp_id(), temp_id);
            store.settle_add(pending, result).unwrap();
        }
        other => panic!("expected AddSettled, got {:?}", other),
    }
    assert_eq!(store.todos()[0].todo_id, "srv-100");
}

#[tokio::test]
async fn test_failures_arrive_as_settlements() {
    let (mut manager, mut rx) = TaskManager::new();
    let api = Arc::new(FakeApi::failing(&["A"], ApiError::Network("offline".to_string())));
    let mut store = TodoStore::new();
    store.settle_load(Ok(vec![crate::support::todo("t1", "A", 0)])).unwrap();

    let pending = store.delete("t1").expect("task exists");
    manager.spawn_delete(api, pending);

    match next_action(&mut rx).await {
        Action::DeleteSettled { pending, result } => {
            assert!(store.settle_delete(pending, result).is_err());
        }
        other => panic!("expected DeleteSettled, got {:?}", other),
    }
    assert_eq!(store.todos().len(), 1);
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let (mut manager, _rx) = TaskManager::new();
    let api = Arc::new(FakeApi::with_todos(&["A"]));
    manager.spawn_load(api.clone());
    manager.spawn_load(api);
    assert_eq!(manager.task_count(), 2);

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
    assert!(!manager.is_loading());
}
