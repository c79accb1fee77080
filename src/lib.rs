//! HelpHive - Volunteering coordination backend
//!
//! Organizers publish posts asking for help; volunteers apply to them through
//! requests. This crate exposes that data over HTTP behind a cookie-based JWT
//! gate and persists it to PostgreSQL.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
