//! API service routes

use axum::{
    Json, Router, middleware,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use crate::{middleware::session_middleware, state::AppState};

pub mod meals;
pub mod users;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let meal_routes = Router::new()
        .route("/meals/", get(meals::list_meals).post(meals::create_meal))
        .route("/meals/metrics", get(meals::get_metrics))
        .route(
            "/meals/:meal_id",
            get(meals::get_meal)
                .put(meals::update_meal)
                .delete(meals::delete_meal),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    let user_routes =
        Router::new().route("/users/", get(users::list_users).post(users::create_user));

    Router::new()
        .route("/health", get(health_check))
        .merge(user_routes)
        .merge(meal_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "diet-api"
    }))
}
