use thiserror::Error;

use crate::form::FormError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with an error body, whatever the status code said.
    #[error("{error}: {message} (status {status})")]
    Store { status: u16, error: String, message: String },
    #[error("unexpected response (status {status}): {detail}")]
    Decode { status: u16, detail: String },
    #[error("invalid form: {0}")]
    InvalidForm(#[from] FormError),
    #[error("no {0} modal is open")]
    NoModal(&'static str),
    #[error("a modal is already open")]
    ModalBusy,
}
