//! Create `student` table.
//! name/email/course are nullable: the service stores whatever the client sent.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(uuid(Student::Id).primary_key())
                    .col(text_null(Student::Name))
                    .col(text_null(Student::Email))
                    .col(text_null(Student::Course))
                    .col(string_len(Student::Status, 16).not_null().default("Active"))
                    .col(timestamp_with_time_zone(Student::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        // Listing orders by insertion time
        manager
            .create_index(
                Index::create()
                    .name("idx_student_created_at")
                    .table(Student::Table)
                    .col(Student::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Student::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Student {
    Table,
    Id,
    Name,
    Email,
    Course,
    Status,
    CreatedAt,
}
