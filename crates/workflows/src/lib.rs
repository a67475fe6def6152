//! Portal workflows: patient lookup, prescription submission and the session
//! that ties them together.

/// Workflow errors
pub mod errors;

/// Request tokens and the in-flight gate
pub mod gate;

/// Patient lookup
pub mod lookup;

/// Result of triggering a workflow
pub mod outcome;

/// Prescription submission
pub mod prescription;

/// Session state shared by the portal front end
pub mod session;

pub use errors::WorkflowError;
pub use lookup::PatientLookup;
pub use outcome::{Ignored, Outcome};
pub use prescription::{PrescriptionSubmission, Submitted};
pub use session::{Banner, Session};
