//! Domain entities - Core business objects

mod creature;

pub use creature::{CreatureAction, CreatureRecord, CreatureValidationError, SpecialAbility};
