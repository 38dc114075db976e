//! Domain-level building blocks shared by the Gatehouse crates.
//!
//! - [`error`] -- the domain error taxonomy ([`error::CoreError`]).
//! - [`types`] -- primitive type aliases (`DbId`, `Timestamp`).
//! - [`email`] -- email address normalization and syntax validation.

pub mod email;
pub mod error;
pub mod types;
