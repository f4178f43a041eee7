//! Image generation port - Interface to the image provider

use async_trait::async_trait;

use super::ProviderError;

/// Port for turning an image description into a resolvable image URL
#[async_trait]
pub trait ImageGenerationPort: Send + Sync {
    fn is_configured(&self) -> bool;

    async fn generate_image(&self, prompt: &str) -> Result<String, ProviderError>;
}
