//! Application configuration

use std::env;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Clone)]
pub struct AppConfig {
    /// Provider API key; requests fail with a configuration error without it
    pub openai_api_key: Option<String>,
    /// Provider API base URL (OpenAI-compatible)
    pub openai_base_url: String,
    /// Model used for creature completions
    pub openai_completion_model: String,
    /// Size requested from the image endpoint
    pub openai_image_size: String,

    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY")
                .ok()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_completion_model: env::var("OPENAI_COMPLETION_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo-instruct".to_string()),
            openai_image_size: env::var("OPENAI_IMAGE_SIZE")
                .unwrap_or_else(|_| "512x512".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}

// Debug never prints the API key.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_completion_model", &self.openai_completion_model)
            .field("openai_image_size", &self.openai_image_size)
            .field("server_port", &self.server_port)
            .finish()
    }
}
