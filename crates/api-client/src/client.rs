use std::sync::Arc;

use async_trait::async_trait;
use domain::SubmissionPayload;
use reqwest::{StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use ulid::Ulid;

use crate::{
    config::ApiConfig,
    credentials::CredentialProvider,
    error::{ApiError, ClientError},
    routes::Route,
};

pub const FETCH_PATIENT_FALLBACK: &str = "Failed to fetch patient information";
pub const SUBMIT_MEDICATIONS_FALLBACK: &str = "Failed to save medication reminder";

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Backend operations the portal workflows depend on.
#[async_trait]
pub trait PatientApi: Send + Sync {
    /// The `data` member of the lookup response, `Value::Null` when absent.
    async fn fetch_patient(&self, patient_id: &str) -> Result<Value, ApiError>;

    /// The raw response body of the submission.
    async fn submit_medications(&self, payload: &SubmissionPayload) -> Result<Value, ApiError>;
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Arc<dyn CredentialProvider>,
}

impl ApiClient {
    pub fn new(
        config: &ApiConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason,
        };

        let base_url = Url::parse(&config.base_url).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, route: &Route) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(route.segments());
        }
        url
    }

    /// Perform one request against `route`.
    ///
    /// A bearer token is attached unless the route is public. A 401 from any
    /// route drops the stored token. A 2xx never fails: its body is parsed as
    /// JSON, kept as a string when it is not JSON, and an empty body reads as
    /// `Value::Null`.
    pub async fn send<B>(
        &self,
        route: &Route,
        body: Option<&B>,
        fallback: &str,
    ) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request_id = Ulid::new().to_string();
        let method = route.method();
        let path = route.path();

        let mut request = self
            .http
            .request(method.clone(), self.url_for(route))
            .header(REQUEST_ID_HEADER, &request_id);

        if !route.is_public() {
            if let Some(token) = self.credentials.get() {
                request = request.bearer_auth(token);
            }
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::info!("{} {} [{}]", method, path, request_id);

        let response = request.send().await.map_err(|e| {
            tracing::warn!("{} {} [{}] failed: {}", method, path, request_id, e);
            ApiError::from_transport(&e, fallback)
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            tracing::warn!("{} {} [{}] body read failed: {}", method, path, request_id, e);
            ApiError::from_transport(&e, fallback)
        })?;

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(
                "{} {} [{}] unauthorized, clearing stored token",
                method,
                path,
                request_id
            );
            self.credentials.clear();
        }

        if !status.is_success() {
            let body: Option<Value> = serde_json::from_slice(&bytes).ok();
            let err = ApiError::from_status(status.as_u16(), body.as_ref());
            tracing::warn!("{} {} [{}] -> {}: {}", method, path, request_id, status, err);
            return Err(err);
        }

        tracing::info!("{} {} [{}] -> {}", method, path, request_id, status);

        Ok(success_body(&bytes))
    }
}

/// Any 2xx body is a success: JSON when it parses, otherwise the raw text.
fn success_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[async_trait]
impl PatientApi for ApiClient {
    async fn fetch_patient(&self, patient_id: &str) -> Result<Value, ApiError> {
        let body = self
            .send(
                &Route::patient_info(patient_id),
                None::<&Value>,
                FETCH_PATIENT_FALLBACK,
            )
            .await?;

        Ok(body.get("data").cloned().unwrap_or(Value::Null))
    }

    async fn submit_medications(&self, payload: &SubmissionPayload) -> Result<Value, ApiError> {
        tracing::debug!(
            "Submitting {} medication(s) for {}",
            payload.medications.len(),
            payload.patient_id
        );

        self.send(
            &Route::AddMedicationReminder,
            Some(payload),
            SUBMIT_MEDICATIONS_FALLBACK,
        )
        .await
    }
}
