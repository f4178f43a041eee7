//! Shared application state

use std::sync::Arc;

use crate::application::ports::outbound::{CompletionPort, ImageGenerationPort};
use crate::application::services::CreatureGenerationService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::openai::OpenAiClient;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub creature_service: CreatureGenerationService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let client = Arc::new(OpenAiClient::new(
            &config.openai_base_url,
            config.openai_api_key.clone(),
            &config.openai_completion_model,
            &config.openai_image_size,
        ));

        Self::with_providers(config, client.clone(), client)
    }

    /// Build state around explicit provider ports
    pub fn with_providers(
        config: AppConfig,
        completion: Arc<dyn CompletionPort>,
        images: Arc<dyn ImageGenerationPort>,
    ) -> Self {
        Self {
            config,
            creature_service: CreatureGenerationService::new(completion, images),
        }
    }
}
