use todolist_core::{Task, TaskValidationError};
use uuid::Uuid;

#[test]
fn task_new_sets_defaults() {
    let before = now_ms();
    let task = Task::new("buy milk");
    let after = now_ms();

    assert!(!task.id.is_nil());
    assert_eq!(task.content, "buy milk");
    assert!(task.created_at_ms >= before);
    assert!(task.created_at_ms <= after);
}

#[test]
fn task_ids_are_unique_per_construction() {
    let first = Task::new("a");
    let second = Task::new("a");
    assert_ne!(first.id, second.id);
}

#[test]
fn validate_rejects_empty_content() {
    let task = Task::new("");
    assert_eq!(task.validate(), Err(TaskValidationError::EmptyContent));
}

#[test]
fn validate_rejects_nil_id() {
    let task = Task::with_parts(Uuid::nil(), "content", 0);
    assert_eq!(task.validate(), Err(TaskValidationError::NilId));
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let task = Task::with_parts(id, "ship release", 1_700_000_000_000);

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["content"], "ship release");
    assert_eq!(json["created_at_ms"], 1_700_000_000_000_i64);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

fn now_ms() -> i64 {
    i64::try_from(
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_millis(),
    )
    .unwrap()
}
