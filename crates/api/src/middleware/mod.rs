//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the verified identity and claims from a
//!   JWT Bearer token.

pub mod auth;
