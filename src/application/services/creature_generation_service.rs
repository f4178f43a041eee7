//! Creature generation service - Orchestrates prompt, completion and parsing
//!
//! Every entry point follows the same order: provider credential check,
//! parameter validation, then a single provider call. Nothing is retried.

use std::sync::Arc;

use crate::application::dto::{
    positive_param, GenerateCreatureRequestDto, GenerateRandomCreatureRequestDto,
};
use crate::application::ports::outbound::{
    CompletionPort, CompletionRequest, ImageGenerationPort, ProviderError,
};
use crate::domain::entities::CreatureRecord;
use crate::domain::value_objects::GenerationParameters;

use super::attribute_sampler::sample_parameters;
use super::creature_parser::parse_creature;
use super::llm::build_prompt;

/// Errors surfaced by creature and image generation
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Caller supplied missing or unusable parameters
    #[error("Validation error: {0}")]
    Validation(String),
    /// The provider credential is not configured
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// The provider call itself failed
    #[error("Provider error: {message}")]
    Provider {
        status: Option<u16>,
        message: String,
    },
    /// The provider answered but the text is not a usable creature
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<ProviderError> for GenerationError {
    fn from(err: ProviderError) -> Self {
        match &err {
            ProviderError::NotConfigured => Self::Configuration(err.to_string()),
            ProviderError::Api { status, payload } => {
                tracing::error!(status = *status, %payload, "Provider rejected request");
                Self::Provider {
                    status: err.status(),
                    message: err
                        .provider_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| err.to_string()),
                }
            }
            ProviderError::Transport(_) | ProviderError::MalformedResponse(_) => {
                tracing::error!("Error with provider request: {}", err);
                Self::Provider {
                    status: None,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Service for generating creatures and their illustrations
pub struct CreatureGenerationService {
    completion: Arc<dyn CompletionPort>,
    images: Arc<dyn ImageGenerationPort>,
}

impl CreatureGenerationService {
    pub fn new(completion: Arc<dyn CompletionPort>, images: Arc<dyn ImageGenerationPort>) -> Self {
        Self { completion, images }
    }

    /// Generate a creature from an explicit challenge rating and party
    pub async fn generate(
        &self,
        request: &GenerateCreatureRequestDto,
    ) -> Result<CreatureRecord, GenerationError> {
        self.ensure_completion_configured()?;

        let (challenge_rating, number_of_players, player_level) = match (
            positive_param(request.challenge_rating.as_ref()),
            positive_param(request.number_of_players.as_ref()),
            positive_param(request.player_level.as_ref()),
        ) {
            (Some(cr), Some(players), Some(level)) => (cr, players, level),
            _ => return Err(missing_parameters()),
        };

        let params = GenerationParameters::fixed(challenge_rating, number_of_players, player_level);
        self.complete_creature(&params).await
    }

    /// Generate a creature with a sampled challenge rating and attributes
    pub async fn generate_random(
        &self,
        request: &GenerateRandomCreatureRequestDto,
    ) -> Result<CreatureRecord, GenerationError> {
        self.ensure_completion_configured()?;

        let (number_of_players, player_level) = match (
            positive_param(request.number_of_players.as_ref()),
            positive_param(request.player_level.as_ref()),
        ) {
            (Some(players), Some(level)) => (players, level),
            _ => return Err(missing_parameters()),
        };

        let params = {
            let mut rng = rand::thread_rng();
            sample_parameters(&mut rng, number_of_players, player_level)
        };
        if let Some(attrs) = &params.attributes {
            tracing::debug!(
                challenge_rating = params.challenge_rating,
                creature_type = attrs.creature_type,
                size = attrs.size,
                alignment = attrs.alignment,
                environment = attrs.environment,
                "Sampled random creature parameters"
            );
        }

        self.complete_creature(&params).await
    }

    /// Generate an illustration for a creature's `imagePrompt`
    ///
    /// Independent of creature generation: a failure here says nothing about a
    /// creature already returned to the caller.
    pub async fn generate_image(&self, image_prompt: Option<&str>) -> Result<String, GenerationError> {
        if !self.images.is_configured() {
            return Err(GenerationError::Configuration(
                ProviderError::NotConfigured.to_string(),
            ));
        }

        let prompt = image_prompt
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| GenerationError::Validation("Please provide an image prompt".to_string()))?;

        let url = self.images.generate_image(prompt).await?;
        tracing::info!("Generated creature image");
        Ok(url)
    }

    fn ensure_completion_configured(&self) -> Result<(), GenerationError> {
        if self.completion.is_configured() {
            Ok(())
        } else {
            tracing::warn!("Creature generation requested without a provider credential");
            Err(GenerationError::Configuration(
                ProviderError::NotConfigured.to_string(),
            ))
        }
    }

    async fn complete_creature(
        &self,
        params: &GenerationParameters,
    ) -> Result<CreatureRecord, GenerationError> {
        let prompt = build_prompt(params);
        tracing::debug!(
            prompt_len = prompt.len(),
            randomized = params.is_randomized(),
            "Requesting creature completion"
        );

        let text = self.completion.complete(CompletionRequest::new(prompt)).await?;
        let creature = parse_creature(&text)?;

        tracing::info!(
            "Generated creature '{}' (CR {})",
            creature.name,
            params.challenge_rating
        );
        Ok(creature)
    }
}

fn missing_parameters() -> GenerationError {
    GenerationError::Validation("Please provide all required parameters".to_string())
}
