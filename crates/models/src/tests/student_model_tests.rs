use sea_orm::DbErr;
use serde_json::json;

use crate::student::{self, Model, StudentChanges, StudentDraft, StudentStatus};

#[test]
fn draft_without_status_becomes_active() {
    let draft: StudentDraft =
        serde_json::from_value(json!({"name": "Ana", "email": "ana@x.com", "course": "CS"})).unwrap();
    let record = Model::from_draft(draft);
    assert_eq!(record.status, StudentStatus::Active);
    assert_eq!(record.name.as_deref(), Some("Ana"));
}

#[test]
fn draft_keeps_explicit_status() {
    let draft: StudentDraft = serde_json::from_value(json!({"name": "Bo", "status": "Inactive"})).unwrap();
    assert_eq!(Model::from_draft(draft).status, StudentStatus::Inactive);
}

#[test]
fn missing_fields_serialize_as_null() {
    let record = Model::from_draft(StudentDraft::default());
    let value = serde_json::to_value(&record).unwrap();
    assert!(value["name"].is_null());
    assert!(value["email"].is_null());
    assert!(value["course"].is_null());
    assert_eq!(value["status"], "Active");
    assert_eq!(value["_id"], record.id.to_string());
    assert!(value.get("id").is_none());
}

#[test]
fn stored_document_without_status_reads_as_active() {
    let record = Model::from_draft(StudentDraft::default());
    let mut value = serde_json::to_value(&record).unwrap();
    value.as_object_mut().unwrap().remove("status");
    let back: Model = serde_json::from_value(value).unwrap();
    assert_eq!(back.status, StudentStatus::Active);
}

#[test]
fn fresh_records_get_distinct_ids() {
    let a = Model::from_draft(StudentDraft::default());
    let b = Model::from_draft(StudentDraft::default());
    assert_ne!(a.id, b.id);
}

#[test]
fn apply_touches_contact_fields_only() {
    let mut record = Model::from_draft(StudentDraft {
        name: Some("Ana".into()),
        email: Some("ana@x.com".into()),
        course: Some("CS".into()),
        status: Some(StudentStatus::Inactive),
    });
    let id = record.id;
    record.apply(StudentChanges { name: Some(Some("Ana B.".into())), email: None, course: None });
    assert_eq!(record.id, id);
    assert_eq!(record.status, StudentStatus::Inactive);
    assert_eq!(record.name.as_deref(), Some("Ana B."));
    assert_eq!(record.email.as_deref(), Some("ana@x.com"));
}

#[test]
fn changes_payload_ignores_status() {
    let changes: StudentChanges =
        serde_json::from_value(json!({"name": "X", "status": "Inactive"})).unwrap();
    assert_eq!(changes.name, Some(Some("X".into())));
    assert!(!changes.is_empty());
    assert!(StudentChanges::default().is_empty());
}

#[test]
fn parse_id_rejects_garbage() {
    assert!(student::parse_id("not-an-id").is_err());
    let id = uuid::Uuid::new_v4();
    assert_eq!(student::parse_id(&id.to_string()).unwrap(), id);
}

#[test]
fn null_in_changes_clears_but_missing_key_keeps() {
    let changes: StudentChanges =
        serde_json::from_value(json!({"name": null, "email": "a@x.com"})).unwrap();
    assert_eq!(changes.name, Some(None));
    assert_eq!(changes.email, Some(Some("a@x.com".into())));
    assert_eq!(changes.course, None);

    let mut record = Model::from_draft(StudentDraft {
        name: Some("Ana".into()),
        email: Some("ana@x.com".into()),
        course: Some("CS".into()),
        status: None,
    });
    record.apply(changes);
    assert_eq!(record.name, None);
    assert_eq!(record.email.as_deref(), Some("a@x.com"));
    assert_eq!(record.course.as_deref(), Some("CS"));
}

#[test]
fn changes_serialize_only_present_keys() {
    let changes = StudentChanges { name: Some(None), ..Default::default() };
    assert_eq!(serde_json::to_value(&changes).unwrap(), json!({"name": null}));
}

#[test]
fn update_racing_a_delete_is_a_miss() {
    assert!(student::updated_or_missing(Err(DbErr::RecordNotUpdated)).unwrap().is_none());
    assert!(student::updated_or_missing(Err(DbErr::Custom("boom".into()))).is_err());
}
