//! Storage abstractions for service layer
//!
//! File-backed document collection used when no database is configured.

pub mod json_document_store;
