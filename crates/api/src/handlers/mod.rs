//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate lookups to `gatehouse_db` repositories and map errors
//! via [`crate::error::AppError`].

pub mod auth;
