//! Application layer - Creature generation use cases
//!
//! This layer contains:
//! - Ports: interfaces to the completion and image providers
//! - Services: sampling, prompt building, parsing and orchestration
//! - DTOs: request and response shapes for the HTTP boundary

pub mod dto;
pub mod ports;
pub mod services;
