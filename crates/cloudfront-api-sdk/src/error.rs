//! Error types for CloudFront API handlers

use thiserror::Error;

/// Errors raised while serving handler invocations
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("IPC error: {0}")]
    Ipc(String),

    #[error("Invalid invocation: {0}")]
    InvalidInvocation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HandlerError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::InvalidInvocation(_) => 400,
            _ => 500,
        }
    }

    /// Convert to a Response
    pub fn to_response(&self) -> crate::Response {
        match self.status_code() {
            400 => crate::Response::bad_request(self.to_string()),
            _ => crate::Response::internal_error(self.to_string()),
        }
    }
}

impl From<HandlerError> for crate::Response {
    fn from(err: HandlerError) -> Self {
        err.to_response()
    }
}
