/// Editable medication entry
pub mod draft;

/// Ordered set of drafts backing the prescription form
pub mod form;

/// Request body for a prescription submission
pub mod payload;

pub use draft::{DraftField, MedicationDraft};
pub use form::PrescriptionForm;
pub use payload::{MedicationItem, SubmissionPayload};
