use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1/users";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// File-backed token storage; in-memory when unset.
    pub token_file: Option<PathBuf>,
    /// Token to seed in-memory storage with.
    pub auth_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            token_file: None,
            auth_token: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from any variable source; blank values count as unset.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| var(key).filter(|value| !value.trim().is_empty());

        let base_url = var("MEDINSIGHT_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL.to_string());

        let timeout = var("MEDINSIGHT_API_TIMEOUT_MS")
            .and_then(|ms| ms.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            base_url,
            timeout,
            token_file: var("MEDINSIGHT_TOKEN_FILE").map(PathBuf::from),
            auth_token: var("MEDINSIGHT_AUTH_TOKEN"),
        }
    }
}
