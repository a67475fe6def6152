use reqwest::Method;

/// Path prefixes that never carry a bearer token.
pub const PUBLIC_ROUTES: &[&str] = &["/patient_info/", "/add_medication_reminder"];

/// A backend endpoint, relative to the configured base URL.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Route {
    PatientInfo { patient_id: String },
    AddMedicationReminder,
    /// Any other endpoint under the base URL, e.g. `/profile`.
    Other { method: Method, path: String },
}

impl Route {
    pub fn patient_info(patient_id: impl Into<String>) -> Self {
        Self::PatientInfo {
            patient_id: patient_id.into(),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Route::PatientInfo { .. } => Method::GET,
            Route::AddMedicationReminder => Method::POST,
            Route::Other { method, .. } => method.clone(),
        }
    }

    /// Unencoded path segments below the base URL.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Route::PatientInfo { patient_id } => vec!["patient_info", patient_id.as_str()],
            Route::AddMedicationReminder => vec!["add_medication_reminder"],
            Route::Other { path, .. } => path.split('/').filter(|s| !s.is_empty()).collect(),
        }
    }

    pub fn path(&self) -> String {
        format!("/{}", self.segments().join("/"))
    }

    pub fn is_public(&self) -> bool {
        let path = self.path();
        PUBLIC_ROUTES.iter().any(|prefix| path.starts_with(prefix))
    }
}
