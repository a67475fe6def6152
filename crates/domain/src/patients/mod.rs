/// Displayable values and date rendering
pub mod display;

/// Ordered synonym table for backend field names
pub mod fields;

/// Canonical patient record
pub mod record;

/// Read-only reminder records
pub mod reminders;

pub use display::{display_value, format_date, format_timestamp};
pub use fields::{FieldSynonyms, NOT_AVAILABLE};
pub use record::{CurrentMedication, MedicationSummary, PatientRecord};
pub use reminders::{MedicalReminder, MedicationReminder};
