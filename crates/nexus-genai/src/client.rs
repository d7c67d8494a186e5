//! HTTPS client for the hosted generation API

use std::time::Duration;

use url::Url;

use nexus_core::prelude::*;

use crate::protocol::{self, WireRequest};
use crate::request::{GenerateRequest, GenerateResponse};
use crate::service::GenerationService;

/// Default REST base for the hosted API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables consulted for the API key, in order
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

/// Generation client speaking the `generateContent` REST protocol
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    /// Variable the key was expected in, reported when it is missing
    api_key_env: String,
}

impl GeminiClient {
    /// Create a client with an explicit API key.
    pub fn new(api_key: impl Into<String>, base_url: Url, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self {
            http,
            base_url,
            api_key: api_key.into().trim().to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }

    /// Client without a key; every request fails with [`Error::MissingApiKey`].
    ///
    /// Lets the UI start and report the problem per action instead of refusing to launch.
    pub fn unauthenticated(env_var: &str, base_url: Url, timeout: Duration) -> Self {
        let mut client = Self::new(String::new(), base_url, timeout);
        client.api_key_env = env_var.to_string();
        client
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Create a client reading the key from `env_var`, then `API_KEY`.
    ///
    /// Returns [`Error::MissingApiKey`] when neither is set to a non-empty value.
    pub fn from_env(env_var: &str, base_url: Url, timeout: Duration) -> Result<Self> {
        let key = std::env::var(env_var)
            .ok()
            .or_else(|| std::env::var(FALLBACK_API_KEY_ENV).ok())
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::missing_api_key(env_var))?;
        let mut client = Self::new(key, base_url, timeout);
        client.api_key_env = env_var.to_string();
        Ok(client)
    }

    /// Endpoint URL for a model
    pub fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.as_str().trim_end_matches('/'),
            model
        )
    }
}

impl GenerationService for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        if self.api_key.is_empty() {
            return Err(Error::missing_api_key(&self.api_key_env));
        }

        let url = self.endpoint(&request.model);
        let body = WireRequest::from(&request);
        debug!(model = %request.model, "Sending generation request");

        let res = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::generation(format!("request failed: {}", e)))?;

        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| Error::generation(format!("failed to read reply: {}", e)))?;

        if !status.is_success() {
            warn!(model = %request.model, status = status.as_u16(), "Generation request rejected");
            return Err(Error::GenerationStatus {
                status: status.as_u16(),
                body: protocol::error_message(&text),
            });
        }

        let response = protocol::parse_response(&text)?;
        debug!(
            model = %request.model,
            chars = response.text.len(),
            sources = response.sources.len(),
            "Generation reply received"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

    fn base() -> Url {
        Url::parse(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn test_endpoint_formatting() {
        let client = GeminiClient::new("k", base(), DEFAULT_TIMEOUT);
        assert_eq!(
            client.endpoint("gemini-3-flash-preview"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let url = Url::parse("http://localhost:8080/v1/").unwrap();
        let client = GeminiClient::new("k", url, DEFAULT_TIMEOUT);
        assert_eq!(
            client.endpoint("m"),
            "http://localhost:8080/v1/models/m:generateContent"
        );
    }

    #[test]
    fn test_api_key_is_trimmed() {
        let client = GeminiClient::new("  secret \n", base(), DEFAULT_TIMEOUT);
        assert_eq!(client.api_key, "secret");
    }

    #[tokio::test]
    async fn test_unauthenticated_client_fails_without_sending() {
        let client = GeminiClient::unauthenticated("MY_KEY", base(), DEFAULT_TIMEOUT);
        assert!(!client.has_api_key());
        let err = client
            .generate(GenerateRequest::text("m", "hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingApiKey { ref env_var } if env_var == "MY_KEY"));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_primary_variable() {
        std::env::set_var("NEXUS_TEST_KEY", "abc");
        let client = GeminiClient::from_env("NEXUS_TEST_KEY", base(), DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.api_key, "abc");
        std::env::remove_var("NEXUS_TEST_KEY");
    }

    #[test]
    #[serial]
    fn test_from_env_missing_key() {
        std::env::remove_var("NEXUS_TEST_MISSING");
        std::env::remove_var(FALLBACK_API_KEY_ENV);
        let err = GeminiClient::from_env("NEXUS_TEST_MISSING", base(), DEFAULT_TIMEOUT).unwrap_err();
        assert!(matches!(err, Error::MissingApiKey { .. }));
    }

    #[test]
    #[serial]
    fn test_from_env_falls_back_to_api_key() {
        std::env::remove_var("NEXUS_TEST_UNSET");
        std::env::set_var(FALLBACK_API_KEY_ENV, "fallback");
        let client = GeminiClient::from_env("NEXUS_TEST_UNSET", base(), DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.api_key, "fallback");
        std::env::remove_var(FALLBACK_API_KEY_ENV);
    }
}
