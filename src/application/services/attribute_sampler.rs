//! Random attribute sampler - Uniform draws from the attribute tables

use rand::Rng;

use crate::domain::value_objects::{
    AttributeTable, GenerationParameters, RandomAttributes, ALIGNMENTS, CHALLENGE_RATING_RANGE,
    CREATURE_TYPES, ENVIRONMENTS, LANGUAGES, SIZES, SPECIAL_TRAITS,
};

/// Draw one value from each attribute table
pub fn sample_attributes(rng: &mut impl Rng) -> RandomAttributes {
    RandomAttributes {
        creature_type: pick(rng, &CREATURE_TYPES),
        alignment: pick(rng, &ALIGNMENTS),
        environment: pick(rng, &ENVIRONMENTS),
        size: pick(rng, &SIZES),
        special_trait: pick(rng, &SPECIAL_TRAITS),
        language: pick(rng, &LANGUAGES),
    }
}

/// Draw a challenge rating from `CHALLENGE_RATING_RANGE`
pub fn sample_challenge_rating(rng: &mut impl Rng) -> u32 {
    rng.gen_range(CHALLENGE_RATING_RANGE)
}

/// Build randomized parameters around the caller's party description
pub fn sample_parameters(
    rng: &mut impl Rng,
    number_of_players: u32,
    player_level: u32,
) -> GenerationParameters {
    let challenge_rating = sample_challenge_rating(rng);
    let attributes = sample_attributes(rng);
    GenerationParameters::randomized(challenge_rating, number_of_players, player_level, attributes)
}

// Tables are checked non-empty at start-up, so indexing cannot go out of bounds.
fn pick(rng: &mut impl Rng, table: &AttributeTable) -> &'static str {
    table.values[rng.gen_range(0..table.len())]
}
