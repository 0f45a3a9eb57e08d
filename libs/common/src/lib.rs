//! Common library for the Daily Diet application
//!
//! This crate provides the infrastructure shared by the Daily Diet services:
//! database connectivity, connection pooling, and the error types that go
//! with them.

pub mod database;
pub mod error;
