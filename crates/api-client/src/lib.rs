//! MedInsight backend API client

/// Outbound HTTP client
pub mod client;

/// Endpoint settings read from the environment
pub mod config;

/// Bearer token sources
pub mod credentials;

/// Normalized request failures
pub mod error;

/// Backend routes and the public allow-list
pub mod routes;

pub use client::{ApiClient, PatientApi};
pub use config::ApiConfig;
pub use credentials::{CredentialProvider, FileCredentials, MemoryCredentials};
pub use error::{ApiError, ApiErrorKind, ClientError};
pub use routes::Route;
