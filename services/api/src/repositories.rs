//! Repositories for database operations

use anyhow::Result;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::models::User;

pub mod meal;

/// User repository for database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user bound to the given session id
    pub async fn create(&self, name: &str, session_id: Uuid) -> Result<()> {
        info!("Creating new user: {}", name);

        sqlx::query(
            r#"
            INSERT INTO users (id, name, session_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(session_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get all users
    pub async fn get_all(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, created_at, session_id
            FROM users
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let users = rows
            .into_iter()
            .map(|row| User {
                id: row.get("id"),
                name: row.get("name"),
                created_at: row.get("created_at"),
                session_id: row.get("session_id"),
            })
            .collect();

        Ok(users)
    }

    /// Find the user a session id resolves to
    pub async fn find_by_session(&self, session_id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at, session_id
            FROM users
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let user = User {
                    id: row.get("id"),
                    name: row.get("name"),
                    created_at: row.get("created_at"),
                    session_id: row.get("session_id"),
                };
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }
}
