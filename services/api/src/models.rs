//! API models for entities and request/response payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub mod meal;

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Session token issued at registration, correlating a browser to this row
    pub session_id: Option<Uuid>,
}

/// Request for user registration
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// Response for the user listing
#[derive(Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}
