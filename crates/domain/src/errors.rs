use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    #[error("Entity not found: {entity}")]
    NotFound { entity: String },

    #[error("Forbidden action: {action}")]
    Forbidden { action: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid payload: expected {expected}")]
    InvalidPayload { expected: String },
}
