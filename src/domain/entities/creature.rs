//! Creature entity - The stat block returned by the completion provider
//!
//! The provider is shown an example record, not a schema, so a parsed record
//! is untrusted until `validate` has accepted it.

use serde::{Deserialize, Serialize};

/// Highest ability score a creature stat block can carry
pub const MAX_ABILITY_SCORE: i32 = 30;

/// A generated creature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureRecord {
    pub name: String,
    pub description: String,
    /// Description handed to the image provider
    pub image_prompt: String,
    pub armor_class: i32,
    pub hit_points: i32,
    pub speed: String,
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
    #[serde(default)]
    pub actions: Vec<CreatureAction>,
    #[serde(default)]
    pub special_abilities: Vec<SpecialAbility>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureAction {
    pub name: String,
    #[serde(default)]
    pub damage: String,
    #[serde(default)]
    pub reach: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialAbility {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A field of a parsed record that failed validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreatureValidationError {
    #[error("field '{0}' is blank")]
    BlankField(&'static str),
    #[error("field '{field}' must be at least 1, got {value}")]
    NotPositive { field: &'static str, value: i32 },
    #[error("ability '{field}' must be between 1 and 30, got {value}")]
    AbilityOutOfRange { field: &'static str, value: i32 },
    #[error("{0} entry {1} has no name")]
    UnnamedEntry(&'static str, usize),
}

impl CreatureRecord {
    /// The six ability scores in stat block order
    pub fn ability_scores(&self) -> [(&'static str, i32); 6] {
        [
            ("strength", self.strength),
            ("dexterity", self.dexterity),
            ("constitution", self.constitution),
            ("intelligence", self.intelligence),
            ("wisdom", self.wisdom),
            ("charisma", self.charisma),
        ]
    }

    /// Check the record is usable as a stat block
    ///
    /// Missing `actions` and `specialAbilities` are accepted as empty lists;
    /// entries that are present must be named.
    pub fn validate(&self) -> Result<(), CreatureValidationError> {
        let text_fields = [
            ("name", &self.name),
            ("description", &self.description),
            ("imagePrompt", &self.image_prompt),
            ("speed", &self.speed),
        ];
        for (field, value) in text_fields {
            if value.trim().is_empty() {
                return Err(CreatureValidationError::BlankField(field));
            }
        }

        for (field, value) in [("armorClass", self.armor_class), ("hitPoints", self.hit_points)] {
            if value < 1 {
                return Err(CreatureValidationError::NotPositive { field, value });
            }
        }

        for (field, value) in self.ability_scores() {
            if !(1..=MAX_ABILITY_SCORE).contains(&value) {
                return Err(CreatureValidationError::AbilityOutOfRange { field, value });
            }
        }

        if let Some(idx) = self.actions.iter().position(|a| a.name.trim().is_empty()) {
            return Err(CreatureValidationError::UnnamedEntry("actions", idx));
        }
        if let Some(idx) = self
            .special_abilities
            .iter()
            .position(|a| a.name.trim().is_empty())
        {
            return Err(CreatureValidationError::UnnamedEntry("specialAbilities", idx));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dire_wolf() -> CreatureRecord {
        CreatureRecord {
            name: "Dire Wolf".to_string(),
            description: "A large, fearsome wolf".to_string(),
            image_prompt: "Create an image of a large, fearsome wolf".to_string(),
            armor_class: 14,
            hit_points: 37,
            speed: "50 ft.".to_string(),
            strength: 17,
            dexterity: 15,
            constitution: 15,
            intelligence: 3,
            wisdom: 12,
            charisma: 7,
            actions: vec![CreatureAction {
                name: "Bite".to_string(),
                damage: "2d6 + 3".to_string(),
                reach: "5 ft.".to_string(),
            }],
            special_abilities: vec![],
        }
    }

    #[test]
    fn test_valid_record() {
        assert_eq!(dire_wolf().validate(), Ok(()));
    }

    #[test]
    fn test_negative_hit_points_rejected() {
        let mut wolf = dire_wolf();
        wolf.hit_points = -5;
        assert_eq!(
            wolf.validate(),
            Err(CreatureValidationError::NotPositive {
                field: "hitPoints",
                value: -5
            })
        );
    }

    #[test]
    fn test_blank_image_prompt_rejected() {
        let mut wolf = dire_wolf();
        wolf.image_prompt = "   ".to_string();
        assert_eq!(
            wolf.validate(),
            Err(CreatureValidationError::BlankField("imagePrompt"))
        );
    }

    #[test]
    fn test_ability_out_of_range() {
        let mut wolf = dire_wolf();
        wolf.charisma = 31;
        assert!(matches!(
            wolf.validate(),
            Err(CreatureValidationError::AbilityOutOfRange { field: "charisma", .. })
        ));
    }

    #[test]
    fn test_unnamed_action_rejected() {
        let mut wolf = dire_wolf();
        wolf.actions.push(CreatureAction {
            name: String::new(),
            damage: "1d4".to_string(),
            reach: "5 ft.".to_string(),
        });
        assert_eq!(
            wolf.validate(),
            Err(CreatureValidationError::UnnamedEntry("actions", 1))
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(dire_wolf()).unwrap();
        assert_eq!(json["imagePrompt"], "Create an image of a large, fearsome wolf");
        assert_eq!(json["armorClass"], 14);
        assert!(json["specialAbilities"].as_array().unwrap().is_empty());
    }
}
