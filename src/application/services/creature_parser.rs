//! Creature parser - Completion text to a validated `CreatureRecord`

use crate::domain::entities::CreatureRecord;

use super::GenerationError;

/// Parse the trimmed completion text as a creature record
///
/// The text must be a single JSON object with the example's shape. A record
/// that parses but fails `CreatureRecord::validate` is rejected the same way.
pub fn parse_creature(text: &str) -> Result<CreatureRecord, GenerationError> {
    let record: CreatureRecord = serde_json::from_str(text.trim()).map_err(|e| {
        tracing::error!("Error parsing generated text into a creature: {}", e);
        GenerationError::InvalidResponse(e.to_string())
    })?;

    record.validate().map_err(|e| {
        tracing::error!("Generated creature '{}' failed validation: {}", record.name, e);
        GenerationError::InvalidResponse(e.to_string())
    })?;

    Ok(record)
}
