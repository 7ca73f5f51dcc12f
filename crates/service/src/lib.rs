//! Service layer for student records.
//! - `student::StudentRepository` is the seam between the HTTP layer and the record store.
//! - Two stores implement it: sea-orm (Postgres) and a JSON document file.
//! - `student::StudentService` adds id parsing and structured logging on top.

pub mod errors;
pub mod storage;
pub mod student;
#[cfg(test)]
pub mod test_support;
