use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use api_client::PatientApi;
use chrono::{DateTime, Duration, Utc};
use domain::{DraftField, MedicationDraft, PatientRecord};

use crate::{
    lookup::{LookupResult, PatientLookup},
    outcome::{Ignored, Outcome},
    prescription::{PrescriptionSubmission, SubmissionResult},
};

/// How long a success banner stays up.
pub const SUCCESS_BANNER_SECS: i64 = 5;

/// A message that disappears on its own.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Banner {
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

impl Banner {
    pub fn new(message: impl Into<String>, raised_at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            expires_at: raised_at + Duration::seconds(SUCCESS_BANNER_SECS),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Default)]
struct SessionState {
    patient: Option<PatientRecord>,
    error: Option<String>,
    success: Option<Banner>,
}

/// Transient state of one portal session: the patient on screen, the
/// prescription form and the banners.
pub struct Session {
    lookup: PatientLookup,
    prescriptions: PrescriptionSubmission,
    state: Mutex<SessionState>,
}

impl Session {
    pub fn new(api: Arc<dyn PatientApi>) -> Self {
        Self {
            lookup: PatientLookup::new(api.clone()),
            prescriptions: PrescriptionSubmission::new(api),
            state: Mutex::new(SessionState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn patient(&self) -> Option<PatientRecord> {
        self.state().patient.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    pub fn success_message(&self) -> Option<String> {
        self.success_message_at(Utc::now())
    }

    pub fn success_message_at(&self, now: DateTime<Utc>) -> Option<String> {
        let mut state = self.state();
        if state.success.as_ref().is_some_and(|b| b.is_expired_at(now)) {
            state.success = None;
        }
        state.success.as_ref().map(|b| b.message.clone())
    }

    pub fn dismiss_success(&self) {
        self.state().success = None;
    }

    pub fn is_loading(&self) -> bool {
        self.lookup.is_searching()
    }

    pub fn is_saving(&self) -> bool {
        self.prescriptions.is_submitting()
    }

    pub fn can_save(&self) -> bool {
        self.state().patient.is_some() && self.prescriptions.is_submittable() && !self.is_saving()
    }

    pub fn drafts(&self) -> Vec<MedicationDraft> {
        self.prescriptions.drafts()
    }

    pub fn add_medication(&self) -> usize {
        self.prescriptions.add_draft()
    }

    pub fn remove_medication(&self, index: usize) -> Result<MedicationDraft, domain::Error> {
        self.prescriptions.remove_draft(index)
    }

    pub fn update_medication(
        &self,
        index: usize,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<(), domain::Error> {
        self.prescriptions.update_draft(index, field, value)
    }

    /// Look a patient up and show the result.
    ///
    /// A failed lookup clears the patient on screen and the form with it.
    pub async fn search(&self, patient_id: &str) -> Outcome<LookupResult> {
        let outcome = self.lookup.lookup(patient_id).await;

        if let Outcome::Completed(result) = &outcome {
            match result {
                Ok(record) => {
                    let mut state = self.state();
                    state.patient = Some(record.clone());
                    state.error = None;
                }
                Err(e) => {
                    {
                        let mut state = self.state();
                        state.patient = None;
                        state.error = Some(e.to_string());
                    }
                    self.prescriptions.discard();
                }
            }
        }

        outcome
    }

    /// Submit the prescription for the patient on screen.
    ///
    /// A failure keeps both the patient and the drafts.
    pub async fn save(&self) -> Outcome<SubmissionResult> {
        let Some(patient) = self.patient() else {
            return Outcome::Ignored(Ignored::NoPatient);
        };

        let outcome = self.prescriptions.submit(&patient.id).await;

        if let Outcome::Completed(result) = &outcome {
            let mut state = self.state();
            match result {
                Ok(_) => {
                    state.error = None;
                    state.success = Some(Banner::new(
                        format!("Prescription saved successfully for {}", patient.name),
                        Utc::now(),
                    ));
                }
                Err(e) => state.error = Some(e.to_string()),
            }
        }

        outcome
    }

    /// Back to an empty screen. Anything still in flight is discarded when it
    /// lands.
    pub fn reset_patient(&self) {
        self.lookup.invalidate();
        self.prescriptions.discard();
        *self.state() = SessionState::default();
    }
}
