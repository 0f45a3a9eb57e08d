//! Application state shared across handlers

use sqlx::PgPool;

use crate::repositories::{UserRepository, meal::MealRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub user_repository: UserRepository,
    pub meal_repository: MealRepository,
}

impl AppState {
    /// Build the application state from a database pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            user_repository: UserRepository::new(pool.clone()),
            meal_repository: MealRepository::new(pool.clone()),
            db_pool: pool,
        }
    }
}
