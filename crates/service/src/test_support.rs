#![cfg(test)]
use std::path::PathBuf;

use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use crate::student::JsonStudentRepository;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Database connection for DB-backed tests; `None` when no database is configured.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    MIGRATED
        .get_or_init(|| async {
            let db = models::db::connect().await.expect("connect db for migration");
            migration::Migrator::up(&db, None).await.expect("migrate up");
        })
        .await;
    Ok(Some(models::db::connect().await?))
}

/// JSON-backed repository on a fresh temp file.
pub async fn temp_repo() -> Result<(JsonStudentRepository, PathBuf), anyhow::Error> {
    let path = std::env::temp_dir()
        .join("student_records_tests")
        .join(format!("{}.json", uuid::Uuid::new_v4()));
    let repo = JsonStudentRepository::open(&path).await?;
    Ok((repo, path))
}
