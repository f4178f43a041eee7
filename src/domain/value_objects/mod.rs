//! Value objects - Immutable objects defined by their attributes

mod attribute_tables;
mod generation_parameters;

pub use attribute_tables::{
    assert_tables_populated, AttributeTable, ALIGNMENTS, CREATURE_TYPES, ENVIRONMENTS, LANGUAGES,
    SIZES, SPECIAL_TRAITS,
};
pub use generation_parameters::{
    GenerationParameters, RandomAttributes, CHALLENGE_RATING_RANGE,
};
