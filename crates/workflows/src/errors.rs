use api_client::ApiError;
use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum WorkflowError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Patient not found")]
    PatientNotFound,

    #[error("Invalid patient record")]
    InvalidRecord(#[source] domain::Error),
}
