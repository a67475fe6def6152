use std::sync::Arc;

use api_client::PatientApi;
use domain::PatientRecord;
use serde_json::Value;

use crate::{
    errors::WorkflowError,
    gate::{InFlight, RequestTokens},
    outcome::{Ignored, Outcome},
};

pub type LookupResult = Result<PatientRecord, WorkflowError>;

/// Fetches a patient and maps the payload to a [`PatientRecord`].
///
/// Every call goes to the backend; nothing is cached.
pub struct PatientLookup {
    api: Arc<dyn PatientApi>,
    tokens: RequestTokens,
    in_flight: InFlight,
}

impl PatientLookup {
    pub fn new(api: Arc<dyn PatientApi>) -> Self {
        Self {
            api,
            tokens: RequestTokens::default(),
            in_flight: InFlight::default(),
        }
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight.is_active()
    }

    /// Drop the result of any lookup still in flight.
    pub fn invalidate(&self) {
        self.tokens.invalidate();
    }

    pub async fn lookup(&self, patient_id: &str) -> Outcome<LookupResult> {
        if patient_id.trim().is_empty() {
            return Outcome::Ignored(Ignored::BlankIdentifier);
        }

        let Some(_guard) = self.in_flight.try_enter() else {
            tracing::debug!("Lookup for {} ignored, another is in flight", patient_id);
            return Outcome::Ignored(Ignored::InProgress);
        };

        let token = self.tokens.issue();
        tracing::info!("Looking up patient {}", patient_id);

        let result = match self.api.fetch_patient(patient_id).await {
            Ok(data) => to_record(&data, patient_id),
            Err(e) => Err(WorkflowError::from(e)),
        };

        if !self.tokens.is_current(token) {
            tracing::info!("Discarding stale lookup for {}", patient_id);
            return Outcome::Stale;
        }

        match &result {
            Ok(record) => tracing::info!("Found patient {}", record.id),
            Err(e) => tracing::warn!("Lookup for {} failed: {}", patient_id, e),
        }

        Outcome::Completed(result)
    }
}

fn to_record(data: &Value, patient_id: &str) -> LookupResult {
    if data.is_null() {
        return Err(WorkflowError::PatientNotFound);
    }
    PatientRecord::from_raw(data, patient_id).map_err(WorkflowError::InvalidRecord)
}
