//! OpenAI-compatible client for creature completions and images

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::{
    CompletionPort, CompletionRequest, ImageGenerationPort, ProviderError,
};

/// Client for the completions and image generation APIs
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    completion_model: String,
    image_size: String,
}

impl OpenAiClient {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        completion_model: &str,
        image_size: &str,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            completion_model: completion_model.to_string(),
            image_size: image_size.to_string(),
        }
    }

    /// Request a completion and return the top choice's trimmed text
    pub async fn create_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<String, ProviderError> {
        let api_key = self.api_key()?;

        let body = CompletionBody {
            model: &self.completion_model,
            prompt: &request.prompt,
            temperature: request.settings.temperature,
            max_tokens: request.settings.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let completion: CompletionResponse = read_success(response).await?;
        first_choice_text(completion)
    }

    /// Request a single image and return its URL
    pub async fn create_image(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self.api_key()?;

        let body = ImageBody {
            prompt,
            n: 1,
            size: &self.image_size,
        };

        let response = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let images: ImageResponse = read_success(response).await?;
        first_image_url(images)
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.api_key.as_deref().ok_or(ProviderError::NotConfigured)
    }
}

#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

#[derive(Debug, Serialize)]
struct ImageBody<'a> {
    prompt: &'a str,
    n: u32,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}

fn transport_error(err: reqwest::Error) -> ProviderError {
    ProviderError::Transport(err.to_string())
}

/// Decode a 2xx body, or turn anything else into `ProviderError::Api`
async fn read_success<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ProviderError> {
    let status = response.status();
    let text = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
        return Err(ProviderError::Api {
            status: status.as_u16(),
            payload: error_payload(&text),
        });
    }

    serde_json::from_str(&text).map_err(|e| ProviderError::MalformedResponse(e.to_string()))
}

fn error_payload(text: &str) -> serde_json::Value {
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
}

fn first_choice_text(response: CompletionResponse) -> Result<String, ProviderError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.text.trim().to_string())
        .ok_or_else(|| ProviderError::MalformedResponse("completion has no choices".to_string()))
}

fn first_image_url(response: ImageResponse) -> Result<String, ProviderError> {
    response
        .data
        .into_iter()
        .find_map(|image| image.url)
        .ok_or_else(|| ProviderError::MalformedResponse("image response has no url".to_string()))
}

// =============================================================================
// Port Implementations
// =============================================================================

#[async_trait]
impl CompletionPort for OpenAiClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        self.create_completion(&request).await
    }
}

#[async_trait]
impl ImageGenerationPort for OpenAiClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate_image(&self, prompt: &str) -> Result<String, ProviderError> {
        self.create_image(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_completion_body_shape() {
        let request = CompletionRequest::new("Create a creature");
        let body = CompletionBody {
            model: "gpt-3.5-turbo-instruct",
            prompt: &request.prompt,
            temperature: request.settings.temperature,
            max_tokens: request.settings.max_tokens,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["prompt"], "Create a creature");
        assert_eq!(value["max_tokens"], 400);
        assert!((value["temperature"].as_f64().unwrap() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_first_choice_is_trimmed() {
        let response: CompletionResponse = serde_json::from_value(json!({
            "choices": [{ "text": "\n\n{\"name\": \"Dire Wolf\"}\n" }, { "text": "ignored" }]
        }))
        .unwrap();
        assert_eq!(first_choice_text(response).unwrap(), "{\"name\": \"Dire Wolf\"}");
    }

    #[test]
    fn test_empty_choices_is_malformed() {
        let response = CompletionResponse { choices: vec![] };
        assert!(matches!(
            first_choice_text(response),
            Err(ProviderError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_first_image_url() {
        let response: ImageResponse = serde_json::from_value(json!({
            "created": 1,
            "data": [{ "url": "https://images.example/1.png" }]
        }))
        .unwrap();
        assert_eq!(first_image_url(response).unwrap(), "https://images.example/1.png");
    }

    #[test]
    fn test_error_payload_keeps_json_or_text() {
        assert_eq!(
            error_payload(r#"{"error":{"message":"bad key"}}"#)["error"]["message"],
            "bad key"
        );
        assert_eq!(error_payload("Bad Gateway"), json!("Bad Gateway"));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        // Unroutable base URL: reaching the network would be a transport error.
        let client = OpenAiClient::new("http://0.0.0.0:1", None, "model", "512x512");

        assert!(!CompletionPort::is_configured(&client));
        assert!(matches!(
            client.create_completion(&CompletionRequest::new("prompt")).await,
            Err(ProviderError::NotConfigured)
        ));
        assert!(matches!(
            client.create_image("a wolf").await,
            Err(ProviderError::NotConfigured)
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = OpenAiClient::new("https://api.openai.com/v1/", Some("k".into()), "m", "s");
        assert_eq!(client.base_url, "https://api.openai.com/v1");
        assert!(ImageGenerationPort::is_configured(&client));
    }
}
