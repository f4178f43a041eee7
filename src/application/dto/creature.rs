use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::CreatureRecord;

/// Body of `POST /api/generate`
///
/// Fields are kept as raw JSON so numeric strings from form inputs are accepted
/// alongside numbers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCreatureRequestDto {
    #[serde(default)]
    pub challenge_rating: Option<Value>,
    #[serde(default)]
    pub number_of_players: Option<Value>,
    #[serde(default)]
    pub player_level: Option<Value>,
}

/// Body of `POST /api/generate/random`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRandomCreatureRequestDto {
    #[serde(default)]
    pub number_of_players: Option<Value>,
    #[serde(default)]
    pub player_level: Option<Value>,
}

/// Body of `POST /api/generateImage`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequestDto {
    #[serde(default)]
    pub image_prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatureResponseDto {
    pub result: CreatureRecord,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomCreatureResponseDto {
    pub result: CreatureRecord,
    pub image_prompt: String,
}

impl From<CreatureRecord> for RandomCreatureResponseDto {
    fn from(result: CreatureRecord) -> Self {
        Self {
            image_prompt: result.image_prompt.clone(),
            result,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponseDto {
    pub image_url: String,
}

/// Read a required numeric parameter
///
/// Absent, null, empty, non-numeric, zero and negative values all count as
/// missing. Zero being rejected is long-standing client-visible behaviour.
pub fn positive_param(value: Option<&Value>) -> Option<u32> {
    let number = match value? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };

    u32::try_from(number).ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_positive_param_accepts_numbers_and_numeric_strings() {
        assert_eq!(positive_param(Some(&json!(5))), Some(5));
        assert_eq!(positive_param(Some(&json!("12"))), Some(12));
        assert_eq!(positive_param(Some(&json!(" 3 "))), Some(3));
        assert_eq!(positive_param(Some(&json!(4.0))), Some(4));
    }

    #[test]
    fn test_positive_param_treats_falsy_as_missing() {
        assert_eq!(positive_param(None), None);
        assert_eq!(positive_param(Some(&Value::Null)), None);
        assert_eq!(positive_param(Some(&json!(0))), None);
        assert_eq!(positive_param(Some(&json!("0"))), None);
        assert_eq!(positive_param(Some(&json!(""))), None);
    }

    #[test]
    fn test_positive_param_rejects_invalid() {
        assert_eq!(positive_param(Some(&json!(-2))), None);
        assert_eq!(positive_param(Some(&json!(2.5))), None);
        assert_eq!(positive_param(Some(&json!("many"))), None);
        assert_eq!(positive_param(Some(&json!(true))), None);
        assert_eq!(positive_param(Some(&json!(u64::MAX))), None);
    }

    #[test]
    fn test_request_uses_camel_case() {
        let req: GenerateCreatureRequestDto = serde_json::from_value(json!({
            "challengeRating": "5",
            "numberOfPlayers": 4,
            "playerLevel": 3
        }))
        .unwrap();
        assert_eq!(positive_param(req.challenge_rating.as_ref()), Some(5));
        assert_eq!(positive_param(req.number_of_players.as_ref()), Some(4));
        assert_eq!(positive_param(req.player_level.as_ref()), Some(3));
    }

    #[test]
    fn test_random_response_duplicates_image_prompt() {
        let record: CreatureRecord = serde_json::from_str(
            crate::application::services::llm::prompt_builder::EXAMPLE_CREATURE,
        )
        .unwrap();
        let body = serde_json::to_value(RandomCreatureResponseDto::from(record)).unwrap();
        assert_eq!(body["imagePrompt"], body["result"]["imagePrompt"]);
    }
}
