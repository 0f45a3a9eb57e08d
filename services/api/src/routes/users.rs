//! User resource handlers

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    error::ApiError,
    middleware::{session_cookie, session_id_from_headers},
    models::{CreateUserRequest, UsersResponse},
    state::AppState,
    validation::validate_name,
};

/// Get all users
///
/// Open endpoint; returns every row unfiltered and unpaginated.
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = state.user_repository.get_all().await.map_err(|e| {
        error!("Failed to get users: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(UsersResponse { users }))
}

/// Register a new user
///
/// When the request already carries a well-formed `sessionId` cookie, the new
/// row binds to that session id instead of a fresh one, so several users can
/// share one browser session. A cookie is only issued when none was sent.
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Response, ApiError> {
    validate_name(&payload.name).map_err(ApiError::BadRequest)?;

    let existing = session_id_from_headers(&headers).and_then(|raw| Uuid::parse_str(&raw).ok());

    let (session_id, issue_cookie) = match existing {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    };

    state
        .user_repository
        .create(&payload.name, session_id)
        .await
        .map_err(|e| {
            error!("Failed to create user: {}", e);
            ApiError::InternalServerError
        })?;

    if issue_cookie {
        Ok((
            StatusCode::CREATED,
            [(header::SET_COOKIE, session_cookie(session_id))],
        )
            .into_response())
    } else {
        Ok(StatusCode::CREATED.into_response())
    }
}
