//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - OpenAI: completion and image provider client
//! - HTTP: REST API routes and error responses
//! - Web: the browser page
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod openai;
pub mod state;
pub mod web;
