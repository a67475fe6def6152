use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use api_client::PatientApi;
use domain::{DraftField, MedicationDraft, PrescriptionForm, SubmissionPayload};
use serde_json::Value;

use crate::{
    errors::WorkflowError,
    gate::{InFlight, RequestTokens},
    outcome::{Ignored, Outcome},
};

/// A batch the backend accepted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Submitted {
    /// The drafts that were sent, as the clinician entered them.
    pub medications: Vec<MedicationDraft>,
    /// Raw backend response.
    pub response: Value,
}

pub type SubmissionResult = Result<Submitted, WorkflowError>;

/// Owns the prescription form and sends its valid drafts as one batch.
pub struct PrescriptionSubmission {
    api: Arc<dyn PatientApi>,
    form: Mutex<PrescriptionForm>,
    tokens: RequestTokens,
    in_flight: InFlight,
}

impl PrescriptionSubmission {
    pub fn new(api: Arc<dyn PatientApi>) -> Self {
        Self {
            api,
            form: Mutex::new(PrescriptionForm::new()),
            tokens: RequestTokens::default(),
            in_flight: InFlight::default(),
        }
    }

    fn form(&self) -> MutexGuard<'_, PrescriptionForm> {
        self.form.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn drafts(&self) -> Vec<MedicationDraft> {
        self.form().drafts().to_vec()
    }

    pub fn add_draft(&self) -> usize {
        self.form().add_draft()
    }

    pub fn remove_draft(&self, index: usize) -> Result<MedicationDraft, domain::Error> {
        self.form().remove_draft(index)
    }

    pub fn update_draft(
        &self,
        index: usize,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<(), domain::Error> {
        self.form().update_draft(index, field, value)
    }

    pub fn is_submittable(&self) -> bool {
        self.form().is_submittable()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_active()
    }

    /// Reset the form and drop the result of any submission in flight.
    pub fn discard(&self) {
        self.tokens.invalidate();
        self.form().reset();
    }

    /// Send every valid draft for `patient_id` in one request.
    ///
    /// Invalid drafts are left out silently. On success the form resets to a
    /// single empty draft; on failure it is left as it was.
    pub async fn submit(&self, patient_id: &str) -> Outcome<SubmissionResult> {
        let Some(_guard) = self.in_flight.try_enter() else {
            tracing::debug!("Submission for {} ignored, another is in flight", patient_id);
            return Outcome::Ignored(Ignored::InProgress);
        };

        let medications = self.form().valid_drafts();
        let Some(payload) = SubmissionPayload::from_drafts(patient_id, &medications) else {
            return Outcome::Ignored(Ignored::NothingToSubmit);
        };

        let token = self.tokens.issue();
        tracing::info!(
            "Submitting {} medication(s) for patient {}",
            payload.medications.len(),
            patient_id
        );

        let result = self.api.submit_medications(&payload).await;

        if !self.tokens.is_current(token) {
            tracing::info!("Discarding stale submission result for {}", patient_id);
            return Outcome::Stale;
        }

        match result {
            Ok(response) => {
                self.form().reset();
                tracing::info!("Prescription saved for patient {}", patient_id);
                Outcome::Completed(Ok(Submitted {
                    medications,
                    response,
                }))
            }
            Err(e) => {
                tracing::warn!("Prescription for {} failed: {}", patient_id, e);
                Outcome::Completed(Err(e.into()))
            }
        }
    }
}
