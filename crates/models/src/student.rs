//! Student record entity and its store operations.
//!
//! Wire shape follows the document-store convention: the id travels as `_id`,
//! missing text fields are `null`, and `status` is `"Active"` unless the
//! creator said otherwise.

use chrono::Utc;
use sea_orm::sea_query::StringLen;
use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum StudentStatus {
    #[default]
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Inactive")]
    Inactive,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
    #[serde(default)]
    pub status: StudentStatus,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Create payload. Every field may be absent; absent text is stored as null.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub status: Option<StudentStatus>,
}

/// Update payload. Status is deliberately absent: it never changes after creation.
///
/// Outer `None`: key missing, field unchanged. `Some(None)`: explicit `null`, field cleared.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentChanges {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub course: Option<Option<String>>,
}

// Only called for keys that are present, so `null` lands as `Some(None)`.
fn present<'de, D>(d: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(d).map(Some)
}

impl StudentChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.course.is_none()
    }
}

impl Model {
    /// Build a fresh record from a draft, assigning id, status default and timestamp.
    pub fn from_draft(draft: StudentDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            email: draft.email,
            course: draft.course,
            status: draft.status.unwrap_or_default(),
            created_at: Utc::now().into(),
        }
    }

    /// Overwrite the contact fields present in `changes`; id and status stay put.
    pub fn apply(&mut self, changes: StudentChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(course) = changes.course {
            self.course = course;
        }
    }
}

/// Parse a path id. Anything that is not a UUID is rejected rather than treated as missing.
pub fn parse_id(raw: &str) -> Result<Uuid, ModelError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| ModelError::Validation(format!("invalid student id `{raw}`")))
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn create(db: &DatabaseConnection, draft: StudentDraft) -> Result<Model, ModelError> {
    let record = Model::from_draft(draft);
    let am = ActiveModel {
        id: Set(record.id),
        name: Set(record.name),
        email: Set(record.email),
        course: Set(record.course),
        status: Set(record.status),
        created_at: Set(record.created_at),
    };
    Ok(am.insert(db).await?)
}

/// Returns `None` when no record has this id.
pub async fn update_contact(
    db: &DatabaseConnection,
    id: Uuid,
    changes: StudentChanges,
) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    if changes.is_empty() {
        return Ok(Some(found));
    }
    let mut am: ActiveModel = found.into();
    if let Some(name) = changes.name {
        am.name = Set(name);
    }
    if let Some(email) = changes.email {
        am.email = Set(email);
    }
    if let Some(course) = changes.course {
        am.course = Set(course);
    }
    updated_or_missing(am.update(db).await)
}

/// A row deleted between the lookup and the update is a miss, not a failure.
pub(crate) fn updated_or_missing(res: Result<Model, DbErr>) -> Result<Option<Model>, ModelError> {
    match res {
        Ok(m) => Ok(Some(m)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Returns the record as it was before removal, or `None` when it did not exist.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let res = Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        // removed concurrently between the read and the delete
        return Ok(None);
    }
    Ok(Some(found))
}
