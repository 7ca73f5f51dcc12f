//! Client side of the student records tool.
//!
//! `api` talks to the record service, `controller` owns the cached list and
//! the modal state, `form` holds what the user typed, and `view` turns the
//! controller state into text rows and summary stats.

pub mod api;
pub mod controller;
pub mod errors;
pub mod form;
pub mod record;
pub mod view;

pub use api::{HttpRecordApi, RecordApi};
pub use controller::{ListController, ModalState, WriteAction, WriteOutcome};
pub use errors::ClientError;
pub use form::{FormError, StudentForm};
pub use record::{Student, StudentPayload};
