use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use models::student::{Model, StudentChanges, StudentDraft};
use uuid::Uuid;

use crate::{errors::ServiceError, storage::json_document_store::JsonDocumentStore};

use super::repository::StudentRepository;

/// Student records kept as an ordered JSON document file.
#[derive(Clone)]
pub struct JsonStudentRepository {
    docs: Arc<JsonDocumentStore<Model>>,
}

impl JsonStudentRepository {
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        Ok(Self { docs: JsonDocumentStore::open(path).await? })
    }
}

#[async_trait]
impl StudentRepository for JsonStudentRepository {
    fn backend(&self) -> &'static str {
        "file"
    }

    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        Ok(self.docs.list().await)
    }

    async fn create(&self, draft: StudentDraft) -> Result<Model, ServiceError> {
        let record = Model::from_draft(draft);
        self.docs.insert(record.clone()).await?;
        Ok(record)
    }

    async fn update(&self, id: Uuid, changes: StudentChanges) -> Result<Option<Model>, ServiceError> {
        self.docs.update_first(|s| s.id == id, |s| s.apply(changes)).await
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Model>, ServiceError> {
        self.docs.remove_first(|s| s.id == id).await
    }
}
