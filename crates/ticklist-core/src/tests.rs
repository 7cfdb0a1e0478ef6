//! End-to-End List Scenarios
//!
//! Drives the pure operations and the record codec together the way the
//! UI store does: mutate, persist, reload, view.

use crate::ops;
use crate::{from_records, to_records, Filter, Task, TaskId};

/// Allocate ids the way the UI store does: sequentially from the load point.
struct IdAlloc(TaskId);

impl IdAlloc {
    fn next(&mut self) -> TaskId {
        let id = self.0;
        self.0 += 1;
        id
    }
}

#[test]
fn test_add_toggle_filter_remove_scenario() {
    let mut ids = IdAlloc(0);
    let tasks: Vec<Task> = Vec::new();

    let tasks = ops::add(&tasks, ids.next(), "Buy milk").unwrap();
    let tasks = ops::add(&tasks, ids.next(), "Walk dog").unwrap();
    assert_eq!(tasks.len(), 2);

    let first_id = tasks[0].id;
    let tasks = ops::toggle(&tasks, first_id);

    let done = ops::filtered(&tasks, Filter::Completed);
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].text, "Buy milk");
    assert!(done[0].completed);

    let second_id = tasks[1].id;
    let tasks = ops::remove(&tasks, second_id);

    let all = ops::filtered(&tasks, Filter::All);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].text, "Buy milk");
    assert!(all[0].completed);
}

#[test]
fn test_mutate_persist_reload_cycle() {
    let mut ids = IdAlloc(0);
    let tasks = ops::add(&[], ids.next(), "Buy milk").unwrap();
    let tasks = ops::add(&tasks, ids.next(), "Walk dog").unwrap();
    let tasks = ops::toggle(&tasks, 1);

    // save then load, as a fresh page would
    let json = serde_json::to_string(&to_records(&tasks)).unwrap();
    let restored = from_records(serde_json::from_str(&json).unwrap());

    assert_eq!(restored.len(), 2);
    assert_eq!(restored[0].text, "Buy milk");
    assert!(!restored[0].completed);
    assert_eq!(restored[1].text, "Walk dog");
    assert!(restored[1].completed);

    // allocation resumes after the loaded tasks
    let mut ids = IdAlloc(restored.len() as TaskId);
    let next = ops::add(&restored, ids.next(), "Water plants").unwrap();
    assert_eq!(next.last().unwrap().id, 2);
}
