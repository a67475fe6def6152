#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use api_client::{ApiError, ApiErrorKind, PatientApi};
use async_trait::async_trait;
use domain::{DraftField, SubmissionPayload};
use serde_json::{json, Value};
use tokio::sync::Notify;
use workflows::PrescriptionSubmission;

/// In-memory backend. With `hold` set, every call parks until `release`.
#[derive(Default)]
pub struct FakeApi {
    pub fetches: AtomicUsize,
    pub submissions: Mutex<Vec<SubmissionPayload>>,
    patient: Mutex<Option<Result<Value, ApiError>>>,
    submit: Mutex<Option<Result<Value, ApiError>>>,
    hold: bool,
    started: Notify,
    release: Notify,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holding() -> Self {
        Self {
            hold: true,
            ..Self::default()
        }
    }

    pub fn with_patient(self, result: Result<Value, ApiError>) -> Self {
        *self.patient.lock().unwrap() = Some(result);
        self
    }

    pub fn with_submit(self, result: Result<Value, ApiError>) -> Self {
        *self.submit.lock().unwrap() = Some(result);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn submitted(&self) -> Vec<SubmissionPayload> {
        self.submissions.lock().unwrap().clone()
    }

    /// Resolves once a call has reached the backend.
    pub async fn started(&self) {
        self.started.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }

    async fn park(&self) {
        self.started.notify_one();
        if self.hold {
            self.release.notified().await;
        }
    }
}

#[async_trait]
impl PatientApi for FakeApi {
    async fn fetch_patient(&self, _patient_id: &str) -> Result<Value, ApiError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.park().await;
        self.patient
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(json!({"name": "Default Patient"})))
    }

    async fn submit_medications(&self, payload: &SubmissionPayload) -> Result<Value, ApiError> {
        self.submissions.lock().unwrap().push(payload.clone());
        self.park().await;
        self.submit
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(json!({"success": true})))
    }
}

pub fn server_error(message: &str) -> ApiError {
    ApiError {
        kind: ApiErrorKind::Status,
        status: Some(500),
        message: message.to_string(),
    }
}

pub fn fill(submission: &PrescriptionSubmission, index: usize, values: [&str; 6]) {
    for (field, value) in DraftField::ALL.into_iter().zip(values) {
        submission.update_draft(index, field, value).unwrap();
    }
}
