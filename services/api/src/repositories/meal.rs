//! Meal repository for database operations
//!
//! Every query is scoped to the owning user; update and delete are single
//! conditional statements whose affected-row count doubles as the ownership
//! check, so no read-then-write race window exists.

use anyhow::Result;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::models::meal::{CreateMealRequest, Meal, UpdateMealRequest};

/// Meal repository for database operations
#[derive(Clone)]
pub struct MealRepository {
    pool: PgPool,
}

impl MealRepository {
    /// Create a new meal repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new meal for the given user
    pub async fn create(&self, user_id: Uuid, payload: &CreateMealRequest) -> Result<()> {
        info!("Creating meal for user: {}", user_id);

        sqlx::query(
            r#"
            INSERT INTO meals (id, user_id, name, description, is_on_diet)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.is_on_diet)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get all meals owned by the given user, most recent first
    pub async fn get_all_for_user(&self, user_id: Uuid) -> Result<Vec<Meal>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, name, description, is_on_diet, created_at, session_id
            FROM meals
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let meals = rows.into_iter().map(meal_from_row).collect();

        Ok(meals)
    }

    /// Find a meal by id, scoped to the owning user
    pub async fn find_for_user(&self, user_id: Uuid, meal_id: Uuid) -> Result<Option<Meal>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, name, description, is_on_diet, created_at, session_id
            FROM meals
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(meal_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(meal_from_row))
    }

    /// Update a meal's mutable fields, scoped to the owning user
    ///
    /// Returns false when the meal does not exist or is owned by someone else.
    pub async fn update_for_user(
        &self,
        user_id: Uuid,
        meal_id: Uuid,
        payload: &UpdateMealRequest,
    ) -> Result<bool> {
        info!("Updating meal {} for user {}", meal_id, user_id);

        let result = sqlx::query(
            r#"
            UPDATE meals
            SET name = $1, description = $2, is_on_diet = $3
            WHERE id = $4 AND user_id = $5
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.description)
        .bind(payload.is_on_diet)
        .bind(meal_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a meal, scoped to the owning user
    ///
    /// Returns false when the meal does not exist or is owned by someone else.
    pub async fn delete_for_user(&self, user_id: Uuid, meal_id: Uuid) -> Result<bool> {
        info!("Deleting meal {} for user {}", meal_id, user_id);

        let result = sqlx::query(
            r#"
            DELETE FROM meals
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(meal_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get the diet flags of a user's meals, ordered by `created_at` descending
    ///
    /// Feeds the metrics aggregation; the ordering matches the meal listing.
    pub async fn diet_flags_for_user(&self, user_id: Uuid) -> Result<Vec<bool>> {
        let rows = sqlx::query(
            r#"
            SELECT is_on_diet
            FROM meals
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let flags = rows
            .into_iter()
            .map(|row| row.get("is_on_diet"))
            .collect();

        Ok(flags)
    }
}

fn meal_from_row(row: sqlx::postgres::PgRow) -> Meal {
    Meal {
        id: row.get("id"),
        user_id: row.get("user_id"),
        name: row.get("name"),
        description: row.get("description"),
        is_on_diet: row.get("is_on_diet"),
        created_at: row.get("created_at"),
        session_id: row.get("session_id"),
    }
}
