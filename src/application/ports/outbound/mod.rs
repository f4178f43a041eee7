//! Outbound ports - Interfaces that the application requires from external systems

mod completion_port;
mod image_port;

pub use completion_port::{CompletionPort, CompletionRequest, CompletionSettings, ProviderError};
pub use image_port::ImageGenerationPort;
