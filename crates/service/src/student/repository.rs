use async_trait::async_trait;
use models::student::{self, Model, StudentChanges, StudentDraft};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::ServiceError;

/// The four record store operations. Not-found is `Ok(None)`, never an error.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
    async fn list(&self) -> Result<Vec<Model>, ServiceError>;
    async fn create(&self, draft: StudentDraft) -> Result<Model, ServiceError>;
    async fn update(&self, id: Uuid, changes: StudentChanges) -> Result<Option<Model>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<Option<Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        Ok(student::list(&self.db).await?)
    }

    async fn create(&self, draft: StudentDraft) -> Result<Model, ServiceError> {
        Ok(student::create(&self.db, draft).await?)
    }

    async fn update(&self, id: Uuid, changes: StudentChanges) -> Result<Option<Model>, ServiceError> {
        Ok(student::update_contact(&self.db, id, changes).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Model>, ServiceError> {
        Ok(student::delete(&self.db, id).await?)
    }
}
