//! Error types for the editor

use thiserror::Error;

use crate::store::AuditViolation;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("mutation failed: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("malformed layout payload: {0}")]
    MalformedPayload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for EditorError {
    fn from(e: serde_json::Error) -> Self {
        EditorError::MalformedPayload(e.to_string())
    }
}

impl From<AuditViolation> for EditorError {
    fn from(v: AuditViolation) -> Self {
        EditorError::MalformedPayload(v.to_string())
    }
}
