//! Application services - Use case implementations
//!
//! Creature generation is split into small pure steps (sampling, prompt
//! building, parsing) composed by `CreatureGenerationService`, which holds the
//! injected provider ports.

pub mod attribute_sampler;
pub mod creature_generation_service;
pub mod creature_parser;
pub mod llm;

pub use creature_generation_service::{CreatureGenerationService, GenerationError};
