//! Meal resource handlers
//!
//! Every handler resolves the acting user from the session cookie and scopes
//! its queries to that user. A meal owned by someone else is indistinguishable
//! from a missing one; both answer 404.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    error::ApiError,
    middleware::resolve_session_user,
    models::meal::{
        CreateMealRequest, MealMetrics, MealResponse, MealsResponse, UpdateMealRequest,
    },
    state::AppState,
    validation::validate_name,
};

/// Create a new meal for the acting user
pub async fn create_meal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateMealRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_name(&payload.name).map_err(ApiError::BadRequest)?;

    let user = resolve_session_user(&headers, &state.user_repository).await?;

    state
        .meal_repository
        .create(user.id, &payload)
        .await
        .map_err(|e| {
            error!("Failed to create meal: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(StatusCode::CREATED)
}

/// Get all meals owned by the acting user, most recent first
pub async fn list_meals(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let user = resolve_session_user(&headers, &state.user_repository).await?;

    let meals = state
        .meal_repository
        .get_all_for_user(user.id)
        .await
        .map_err(|e| {
            error!("Failed to get meals: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(MealsResponse { meals }))
}

/// Get a single meal owned by the acting user
pub async fn get_meal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(meal_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let user = resolve_session_user(&headers, &state.user_repository).await?;

    let meal = state
        .meal_repository
        .find_for_user(user.id, meal_id)
        .await
        .map_err(|e| {
            error!("Failed to get meal: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Meal not found".to_string()))?;

    // The contract answers 201 on this read.
    Ok((StatusCode::CREATED, Json(MealResponse { meal })))
}

/// Update a meal's name, description, and diet flag
pub async fn update_meal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(meal_id): Path<Uuid>,
    Json(payload): Json<UpdateMealRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_name(&payload.name).map_err(ApiError::BadRequest)?;

    let user = resolve_session_user(&headers, &state.user_repository).await?;

    let updated = state
        .meal_repository
        .update_for_user(user.id, meal_id, &payload)
        .await
        .map_err(|e| {
            error!("Failed to update meal: {}", e);
            ApiError::InternalServerError
        })?;

    if !updated {
        return Err(ApiError::NotFound("Meal not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a meal owned by the acting user
pub async fn delete_meal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(meal_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let user = resolve_session_user(&headers, &state.user_repository).await?;

    let deleted = state
        .meal_repository
        .delete_for_user(user.id, meal_id)
        .await
        .map_err(|e| {
            error!("Failed to delete meal: {}", e);
            ApiError::InternalServerError
        })?;

    if !deleted {
        return Err(ApiError::NotFound("Meal not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Get aggregate diet metrics for the acting user
pub async fn get_metrics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let user = resolve_session_user(&headers, &state.user_repository).await?;

    let flags = state
        .meal_repository
        .diet_flags_for_user(user.id)
        .await
        .map_err(|e| {
            error!("Failed to compute meal metrics: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(MealMetrics::from_diet_flags(&flags)))
}
