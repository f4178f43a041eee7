//! Creature API routes - LLM-generated creatures and their illustrations

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::dto::{
    CreatureResponseDto, GenerateCreatureRequestDto, GenerateImageRequestDto,
    GenerateRandomCreatureRequestDto, ImageResponseDto, RandomCreatureResponseDto,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::state::AppState;

/// Generate a creature from an explicit challenge rating and party
pub async fn generate_creature(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateCreatureRequestDto>, JsonRejection>,
) -> Result<Json<CreatureResponseDto>, ApiError> {
    let Json(req) = body?;

    let result = state.creature_service.generate(&req).await?;

    Ok(Json(CreatureResponseDto { result }))
}

/// Generate a creature with sampled challenge rating and attributes
pub async fn generate_random_creature(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateRandomCreatureRequestDto>, JsonRejection>,
) -> Result<Json<RandomCreatureResponseDto>, ApiError> {
    let Json(req) = body?;

    let result = state.creature_service.generate_random(&req).await?;

    Ok(Json(result.into()))
}

/// Generate an illustration from a creature's image prompt
pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateImageRequestDto>, JsonRejection>,
) -> Result<Json<ImageResponseDto>, ApiError> {
    let Json(req) = body?;

    let image_url = state
        .creature_service
        .generate_image(req.image_prompt.as_deref())
        .await?;

    Ok(Json(ImageResponseDto { image_url }))
}
