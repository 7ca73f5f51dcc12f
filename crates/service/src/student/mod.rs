//! Student record store seam and the service wrapped around it.

pub mod file_repo;
pub mod repository;
pub mod service;

use std::sync::Arc;

use configs::{DatabaseConfig, StoreLocation};
use migration::MigratorTrait;
use tracing::info;

pub use file_repo::JsonStudentRepository;
pub use repository::{SeaOrmStudentRepository, StudentRepository};
pub use service::StudentService;

/// Open the repository named by `database.url`.
///
/// Postgres URLs get a pooled sea-orm connection with migrations applied;
/// `file://` URLs get the JSON document store.
pub async fn open_repository(cfg: &DatabaseConfig) -> anyhow::Result<Arc<dyn StudentRepository>> {
    match cfg.location()? {
        StoreLocation::Postgres(_) => {
            let db = models::db::connect_with_config(cfg).await?;
            migration::Migrator::up(&db, None).await?;
            info!(backend = "postgres", "record store ready");
            Ok(Arc::new(SeaOrmStudentRepository { db }))
        }
        StoreLocation::File(path) => {
            common::env::ensure_parent_dir(&path).await?;
            let repo = JsonStudentRepository::open(&path).await?;
            info!(backend = "file", path = %path.display(), "record store ready");
            Ok(Arc::new(repo))
        }
    }
}
