//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Session token signing and validation (JWT, mock)
//! - `http` - axum routes, handlers and middleware
//! - `memory` - In-memory store for tests and local development
//! - `postgres` - PostgreSQL store used in production

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
