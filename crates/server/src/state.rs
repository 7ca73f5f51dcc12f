use std::sync::Arc;

use configs::ErrorStatus;
use service::student::{StudentRepository, StudentService};

/// Shared handler state: the record service plus the error reporting policy.
#[derive(Clone)]
pub struct ServerState {
    pub students: StudentService<dyn StudentRepository>,
    pub error_status: ErrorStatus,
}

impl ServerState {
    pub fn new(repo: Arc<dyn StudentRepository>, error_status: ErrorStatus) -> Self {
        Self { students: StudentService::new(repo), error_status }
    }
}
