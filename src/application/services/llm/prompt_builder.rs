//! Prompt building functions for creature completion requests
//!
//! Both prompts embed the same worked example. The parser relies on the model
//! copying its shape, so `EXAMPLE_CREATURE` must not change between calls.

use crate::domain::value_objects::{GenerationParameters, RandomAttributes};

/// `imagePrompt` value of the worked example
pub const EXAMPLE_IMAGE_PROMPT: &str = "Create an image of a large, fearsome wolf with a thick fur coat and glowing red eyes. It should have powerful jaws and a menacing stance.";

/// Worked example of the record shape the model is asked to produce
pub const EXAMPLE_CREATURE: &str = r#"{
  "name": "Dire Wolf",
  "description": "A large, fearsome wolf with a thick fur coat and glowing red eyes. It has powerful jaws and a menacing stance.",
  "imagePrompt": "Create an image of a large, fearsome wolf with a thick fur coat and glowing red eyes. It should have powerful jaws and a menacing stance.",
  "armorClass": 14,
  "hitPoints": 37,
  "speed": "50 ft.",
  "strength": 17,
  "dexterity": 15,
  "constitution": 15,
  "intelligence": 3,
  "wisdom": 12,
  "charisma": 7,
  "actions": [
    {
      "name": "Bite",
      "damage": "2d6 + 3",
      "reach": "5 ft."
    }
  ],
  "specialAbilities": [
    {
      "name": "Keen Hearing and Smell",
      "description": "The wolf has advantage on Wisdom (Perception) checks that rely on hearing or smell."
    },
    {
      "name": "Pack Tactics",
      "description": "The wolf has advantage on attack rolls against a creature if at least one of the wolf's allies is within 5 feet of the creature and the ally isn't incapacitated."
    }
  ]
}"#;

const POWER_GUIDANCE: &str = "Higher challenge ratings should have more powerful creatures, and lower challenge ratings should have less powerful creatures.";

const FORMAT_INSTRUCTION: &str =
    "The creature should have the following properties in a JSON-like format:";

const CLOSING_INSTRUCTION: &str = "Now, create a similar creature: ";

/// Build the prompt for explicitly chosen parameters
pub fn build_creature_prompt(
    challenge_rating: u32,
    number_of_players: u32,
    player_level: u32,
) -> String {
    let opening = format!(
        "Create a detailed creature for a DND game suitable for a party of {} players at level {} with a challenge rating of {}.",
        number_of_players, player_level, challenge_rating
    );

    render(&opening, EXAMPLE_CREATURE)
}

/// Build the prompt for a sampled challenge rating and attribute set
///
/// Size and alignment are also written into the example's `imagePrompt`, so
/// the example does not contradict the requested creature.
pub fn build_random_creature_prompt(
    number_of_players: u32,
    player_level: u32,
    challenge_rating: u32,
    attributes: &RandomAttributes,
) -> String {
    let opening = format!(
        "Create a detailed {} {} {} from the {} for a DND game suitable for a party of {} players at level {} with a challenge rating of {}. \
The creature has the special trait \"{}\" and speaks {}.",
        attributes.size.to_lowercase(),
        attributes.alignment.to_lowercase(),
        attributes.creature_type.to_lowercase(),
        attributes.environment.to_lowercase(),
        number_of_players,
        player_level,
        challenge_rating,
        attributes.special_trait,
        attributes.language
    );

    let image_prompt = format!(
        "Create an image of a {}, {} wolf with a thick fur coat and glowing red eyes. It should have powerful jaws and a menacing stance.",
        attributes.size.to_lowercase(),
        attributes.alignment.to_lowercase()
    );
    let example = EXAMPLE_CREATURE.replacen(EXAMPLE_IMAGE_PROMPT, &image_prompt, 1);

    render(&opening, &example)
}

/// Build whichever prompt variant the parameters call for
pub fn build_prompt(params: &GenerationParameters) -> String {
    match &params.attributes {
        Some(attributes) => build_random_creature_prompt(
            params.number_of_players,
            params.player_level,
            params.challenge_rating,
            attributes,
        ),
        None => build_creature_prompt(
            params.challenge_rating,
            params.number_of_players,
            params.player_level,
        ),
    }
}

fn render(opening: &str, example: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(opening);
    prompt.push_str("\n\n");
    prompt.push_str(POWER_GUIDANCE);
    prompt.push_str("\n\n");
    prompt.push_str(FORMAT_INSTRUCTION);
    prompt.push_str("\n\n");
    prompt.push_str(example);
    prompt.push_str("\n\n\n");
    prompt.push_str(CLOSING_INSTRUCTION);

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes() -> RandomAttributes {
        RandomAttributes {
            creature_type: "Undead",
            alignment: "Chaotic Evil",
            environment: "Swamp",
            size: "Huge",
            special_trait: "Regeneration",
            language: "Abyssal",
        }
    }

    #[test]
    fn test_fixed_prompt_contains_parameters_and_example() {
        for (cr, players, level) in [(1, 1, 1), (5, 4, 3), (30, 8, 20), (17, 123, 456)] {
            let prompt = build_creature_prompt(cr, players, level);

            assert!(prompt.contains(&format!("party of {} players", players)));
            assert!(prompt.contains(&format!("at level {}", level)));
            assert!(prompt.contains(&format!("challenge rating of {}.", cr)));
            assert!(prompt.contains(EXAMPLE_CREATURE));
            assert!(prompt.contains(POWER_GUIDANCE));
            assert!(prompt.ends_with("create a similar creature: "));
        }
    }

    #[test]
    fn test_fixed_prompt_is_deterministic() {
        assert_eq!(build_creature_prompt(3, 4, 5), build_creature_prompt(3, 4, 5));
    }

    #[test]
    fn test_example_is_valid_creature_json() {
        let record: crate::domain::entities::CreatureRecord =
            serde_json::from_str(EXAMPLE_CREATURE).unwrap();
        assert_eq!(record.name, "Dire Wolf");
        assert_eq!(record.image_prompt, EXAMPLE_IMAGE_PROMPT);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_random_prompt_interpolates_attributes() {
        let prompt = build_random_creature_prompt(4, 6, 12, &attributes());

        assert!(prompt.contains("huge chaotic evil undead from the swamp"));
        assert!(prompt.contains("party of 4 players at level 6 with a challenge rating of 12."));
        assert!(prompt.contains("\"Regeneration\""));
        assert!(prompt.contains("speaks Abyssal"));
        assert!(prompt.contains("Create an image of a huge, chaotic evil wolf"));
        assert!(!prompt.contains(EXAMPLE_IMAGE_PROMPT));
        assert!(prompt.ends_with("create a similar creature: "));
    }

    #[test]
    fn test_random_prompt_example_stays_parseable() {
        let prompt = build_random_creature_prompt(4, 6, 12, &attributes());
        let start = prompt.find('{').unwrap();
        let end = prompt.rfind('}').unwrap();
        let value: serde_json::Value = serde_json::from_str(&prompt[start..=end]).unwrap();
        assert_eq!(value["name"], "Dire Wolf");
    }

    #[test]
    fn test_build_prompt_selects_variant() {
        let fixed = GenerationParameters::fixed(5, 4, 3);
        assert_eq!(build_prompt(&fixed), build_creature_prompt(5, 4, 3));

        let random = GenerationParameters::randomized(12, 4, 6, attributes());
        assert_eq!(
            build_prompt(&random),
            build_random_creature_prompt(4, 6, 12, &attributes())
        );
    }
}
