//! Generation parameters - The inputs a creature prompt is rendered from

use std::ops::RangeInclusive;

/// Challenge ratings drawn by the random sampler
pub const CHALLENGE_RATING_RANGE: RangeInclusive<u32> = 1..=30;

/// Flavour attributes drawn from the attribute tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomAttributes {
    pub creature_type: &'static str,
    pub alignment: &'static str,
    pub environment: &'static str,
    pub size: &'static str,
    pub special_trait: &'static str,
    pub language: &'static str,
}

/// Parameters for a single creature generation request
///
/// Built per request and discarded once the prompt is rendered. `attributes`
/// is only present for randomized generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParameters {
    pub challenge_rating: u32,
    pub number_of_players: u32,
    pub player_level: u32,
    pub attributes: Option<RandomAttributes>,
}

impl GenerationParameters {
    /// Parameters supplied entirely by the caller
    pub fn fixed(challenge_rating: u32, number_of_players: u32, player_level: u32) -> Self {
        Self {
            challenge_rating,
            number_of_players,
            player_level,
            attributes: None,
        }
    }

    /// Parameters whose challenge rating and attributes were sampled
    pub fn randomized(
        challenge_rating: u32,
        number_of_players: u32,
        player_level: u32,
        attributes: RandomAttributes,
    ) -> Self {
        Self {
            challenge_rating,
            number_of_players,
            player_level,
            attributes: Some(attributes),
        }
    }

    pub fn is_randomized(&self) -> bool {
        self.attributes.is_some()
    }
}
