//! Session middleware for gating the meal routes
//!
//! The gate reads the `sessionId` cookie, resolves it to a user row, and
//! short-circuits with 401 before any handler runs when the cookie is absent
//! or resolves to nobody. The resolved user is not cached on the request;
//! handlers re-resolve it from the same cookie.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::Response,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    config::{SESSION_COOKIE, SESSION_MAX_AGE_SECS},
    error::{ApiError, ApiResult},
    models::User,
    repositories::UserRepository,
    state::AppState,
};

/// Extract the raw session id value from the request's `Cookie` header
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;

    cookie_header.split(';').find_map(|part| {
        let value = part.trim().strip_prefix(SESSION_COOKIE)?.strip_prefix('=')?;
        Some(value.to_string())
    })
}

/// Build the `Set-Cookie` value issued at registration
pub fn session_cookie(session_id: Uuid) -> String {
    format!("{SESSION_COOKIE}={session_id}; Path=/; Max-Age={SESSION_MAX_AGE_SECS}")
}

/// Resolve the acting user from the session cookie
///
/// Fails with `MissingSession` when no cookie was sent and `Unauthorized`
/// when the cookie does not resolve to a user row.
pub async fn resolve_session_user(
    headers: &HeaderMap,
    users: &UserRepository,
) -> ApiResult<User> {
    let raw = session_id_from_headers(headers).ok_or(ApiError::MissingSession)?;
    let session_id = Uuid::parse_str(&raw).map_err(|_| ApiError::Unauthorized)?;

    let user = users
        .find_by_session(session_id)
        .await
        .map_err(|e| {
            error!("Failed to resolve session user: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::Unauthorized)?;

    Ok(user)
}

/// Session gate applied to the meal routes
pub async fn session_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    resolve_session_user(req.headers(), &state.user_repository).await?;

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_session_id_extracted_from_single_cookie() {
        let headers = headers_with_cookie("sessionId=abc-123");
        assert_eq!(session_id_from_headers(&headers), Some("abc-123".to_string()));
    }

    #[test]
    fn test_session_id_extracted_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; sessionId=abc-123; lang=en");
        assert_eq!(session_id_from_headers(&headers), Some("abc-123".to_string()));
    }

    #[test]
    fn test_session_id_absent_without_cookie_header() {
        let headers = HeaderMap::new();
        assert_eq!(session_id_from_headers(&headers), None);
    }

    #[test]
    fn test_session_id_absent_when_other_cookies_only() {
        let headers = headers_with_cookie("theme=dark; lang=en");
        assert_eq!(session_id_from_headers(&headers), None);
    }

    #[test]
    fn test_session_cookie_format() {
        let id = Uuid::new_v4();
        let cookie = session_cookie(id);
        assert_eq!(cookie, format!("sessionId={id}; Path=/; Max-Age=86400"));
    }
}
