//! Request handlers.
//!
//! Each submodule provides async handler functions for one slice of the
//! API surface. Handlers delegate to the repositories in `givehub_db`
//! and map errors via [`crate::error::AppError`].

pub mod admin;
pub mod donation;
pub mod overview;
pub mod project;
pub mod stats;
