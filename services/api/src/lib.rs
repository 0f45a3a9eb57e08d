//! Daily Diet API service
//!
//! HTTP service for tracking meals against a diet: users register and get a
//! session cookie, then manage their own meal records and query aggregate
//! metrics over them.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;
