use std::sync::Arc;

use models::student::{self, Model, StudentChanges, StudentDraft};
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;

use super::repository::StudentRepository;

/// Application service in front of the record store.
/// Parses path ids and logs every write; otherwise a straight pass-through.
pub struct StudentService<R: StudentRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: StudentRepository + ?Sized> Clone for StudentService<R> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo) }
    }
}

impl<R: StudentRepository + ?Sized> StudentService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub fn backend(&self) -> &'static str {
        self.repo.backend()
    }

    #[instrument(skip(self), fields(backend = self.repo.backend()))]
    pub async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        let rows = self.repo.list().await?;
        info!(count = rows.len(), "listed students");
        Ok(rows)
    }

    #[instrument(skip(self, draft), fields(backend = self.repo.backend()))]
    pub async fn create(&self, draft: StudentDraft) -> Result<Model, ServiceError> {
        let created = self.repo.create(draft).await?;
        info!(id = %created.id, status = ?created.status, "created student");
        Ok(created)
    }

    /// `Ok(None)` when no record carries `raw_id`.
    #[instrument(skip(self, changes), fields(backend = self.repo.backend()))]
    pub async fn update(&self, raw_id: &str, changes: StudentChanges) -> Result<Option<Model>, ServiceError> {
        let id = student::parse_id(raw_id)?;
        let updated = self.repo.update(id, changes).await?;
        match &updated {
            Some(m) => info!(id = %m.id, "updated student"),
            None => warn!(%id, "update target not found"),
        }
        Ok(updated)
    }

    /// `Ok(None)` when no record carries `raw_id`.
    #[instrument(skip(self), fields(backend = self.repo.backend()))]
    pub async fn delete(&self, raw_id: &str) -> Result<Option<Model>, ServiceError> {
        let id = student::parse_id(raw_id)?;
        let deleted = self.repo.delete(id).await?;
        match &deleted {
            Some(m) => info!(id = %m.id, "deleted student"),
            None => warn!(%id, "delete target not found"),
        }
        Ok(deleted)
    }
}
