//! Completion port - Interface to the text-generation provider

use async_trait::async_trait;

/// Sampling settings sent with a completion request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionSettings {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionSettings {
    /// Fixed settings used for every creature prompt
    pub const fn creature() -> Self {
        Self {
            temperature: 0.6,
            max_tokens: 400,
        }
    }
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self::creature()
    }
}

/// A rendered prompt plus the settings to sample it with
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub settings: CompletionSettings,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            settings: CompletionSettings::creature(),
        }
    }
}

/// Failure of a provider call (completion or image)
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// No API credential is configured; no request was sent
    #[error("provider credential is not configured")]
    NotConfigured,
    /// The provider answered with a non-success status
    #[error("provider returned {status}: {payload}")]
    Api {
        status: u16,
        payload: serde_json::Value,
    },
    /// The request never produced a response (network, TLS, timeout)
    #[error("provider request failed: {0}")]
    Transport(String),
    /// The provider answered 2xx but not with the documented body
    #[error("unexpected provider response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    /// HTTP status reported by the provider, when it got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The provider's own `error.message`, if its payload carries one
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            Self::Api { payload, .. } => payload
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str()),
            _ => None,
        }
    }
}

/// Port for text completion
///
/// Implementations return the top choice's text, trimmed of surrounding
/// whitespace.
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Whether a credential is available; checked before any call
    fn is_configured(&self) -> bool;

    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError>;
}
