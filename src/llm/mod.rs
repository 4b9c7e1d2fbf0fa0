//! LLM: generative API adapter behind the catalog endpoint.
//!
//! DESIGN
//! ======
//! `LlmClient` wraps the Gemini HTTP client and the configured model name and
//! implements the provider-neutral [`LlmGenerate`] trait. Callers hold it as
//! `Arc<dyn LlmGenerate>` so tests can substitute a mock.

pub mod config;
pub mod gemini;
pub mod types;

use config::LlmConfig;
pub use types::LlmGenerate;
use types::{GenerateRequest, GenerateResponse, LlmError};

// =============================================================================
// CLIENT
// =============================================================================

/// Configured Gemini client.
///
/// Built from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: gemini::GeminiClient,
    model: String,
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// - `LLM_API_KEY_ENV`: name of env var holding the API key (default `API_KEY`)
    /// - `LLM_MODEL`: model name (default `gemini-2.5-flash`)
    /// - `LLM_BASE_URL`: API base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner = gemini::GeminiClient::new(config.api_key, config.base_url, config.timeouts)?;
        Ok(Self { inner, model: config.model })
    }

    /// Return the configured model name (e.g. `"gemini-2.5-flash"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmGenerate for LlmClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, LlmError> {
        self.inner.generate(&self.model, request).await
    }
}
