//! LLM helpers - Prompt rendering for completion requests

pub mod prompt_builder;

pub use prompt_builder::build_prompt;
