//! Domain layer - Core creature model with no external dependencies
//!
//! This layer contains:
//! - Entities: the generated creature record and its stat block parts
//! - Value Objects: generation parameters and the attribute tables used
//!   for randomized generation

pub mod entities;
pub mod value_objects;
