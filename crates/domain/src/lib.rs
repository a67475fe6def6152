//! MedInsight Domain Models

/// Canonical patient view-model and backend field coalescing
pub mod patients;

/// Medication drafts, prescription form and submission payload
pub mod prescriptions;

/// Domain errors
pub mod errors;

pub use errors::Error;
pub use patients::{PatientRecord, NOT_AVAILABLE};
pub use prescriptions::{DraftField, MedicationDraft, PrescriptionForm, SubmissionPayload};
