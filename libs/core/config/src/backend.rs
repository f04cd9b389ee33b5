use crate::{env_or_default, env_required, ConfigError, FromEnv};
use std::fmt;
use std::time::Duration;

/// Connection settings for the hosted record backend.
///
/// The public key is a client credential; it is redacted from `Debug` output.
#[derive(Clone)]
pub struct BackendConfig {
    pub project_id: String,
    pub public_key: String,
    /// Base URL of the record API, without trailing slash
    pub api_url: String,
    pub timeout: Duration,
}

impl BackendConfig {
    pub fn new(project_id: String, public_key: String, api_url: String) -> Self {
        Self {
            project_id,
            public_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("project_id", &self.project_id)
            .field("public_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl FromEnv for BackendConfig {
    /// Reads from environment variables:
    /// - BACKEND_PROJECT_ID, BACKEND_PUBLIC_KEY, BACKEND_API_URL: required
    /// - BACKEND_TIMEOUT_SECS: defaults to 30
    fn from_env() -> Result<Self, ConfigError> {
        let project_id = env_required("BACKEND_PROJECT_ID")?;
        let public_key = env_required("BACKEND_PUBLIC_KEY")?;
        let api_url = env_required("BACKEND_API_URL")?;
        let timeout_secs: u64 = env_or_default("BACKEND_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "BACKEND_TIMEOUT_SECS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self::new(project_id, public_key, api_url)
            .with_timeout(Duration::from_secs(timeout_secs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 4] = [
        "BACKEND_PROJECT_ID",
        "BACKEND_PUBLIC_KEY",
        "BACKEND_API_URL",
        "BACKEND_TIMEOUT_SECS",
    ];

    #[test]
    fn test_backend_config_from_env_success() {
        temp_env::with_vars(
            [
                ("BACKEND_PROJECT_ID", Some("proj-123")),
                ("BACKEND_PUBLIC_KEY", Some("pk_live_abc")),
                ("BACKEND_API_URL", Some("https://records.example.com/v1/")),
                ("BACKEND_TIMEOUT_SECS", None),
            ],
            || {
                let config = BackendConfig::from_env().unwrap();
                assert_eq!(config.project_id, "proj-123");
                assert_eq!(config.public_key, "pk_live_abc");
                assert_eq!(config.api_url, "https://records.example.com/v1");
                assert_eq!(config.timeout, Duration::from_secs(30));
            },
        );
    }

    #[test]
    fn test_backend_config_from_env_missing_project() {
        temp_env::with_vars(VARS.map(|key| (key, None::<&str>)), || {
            let err = BackendConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("BACKEND_PROJECT_ID"));
            assert!(err.to_string().contains("required"));
        });
    }

    #[test]
    fn test_backend_config_from_env_missing_key() {
        temp_env::with_vars(
            [
                ("BACKEND_PROJECT_ID", Some("proj-123")),
                ("BACKEND_PUBLIC_KEY", None),
                ("BACKEND_API_URL", Some("http://localhost:9000")),
            ],
            || {
                let err = BackendConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("BACKEND_PUBLIC_KEY"));
            },
        );
    }

    #[test]
    fn test_backend_config_invalid_timeout() {
        temp_env::with_vars(
            [
                ("BACKEND_PROJECT_ID", Some("proj-123")),
                ("BACKEND_PUBLIC_KEY", Some("pk")),
                ("BACKEND_API_URL", Some("http://localhost:9000")),
                ("BACKEND_TIMEOUT_SECS", Some("soon")),
            ],
            || {
                let err = BackendConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("BACKEND_TIMEOUT_SECS"));
            },
        );
    }

    #[test]
    fn test_backend_config_debug_redacts_key() {
        let config = BackendConfig::new(
            "proj".to_string(),
            "pk_secret_value".to_string(),
            "http://localhost".to_string(),
        );
        let debug = format!("{:?}", config);
        assert!(!debug.contains("pk_secret_value"));
        assert!(debug.contains("<redacted>"));
    }
}
