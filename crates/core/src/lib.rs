//! Domain rules for the givehub donation platform.
//!
//! This crate is pure logic with no I/O: the project ledger's save contract
//! and derived display computations, donation validation rules, project
//! field validation, and the shared error/type vocabulary. Both the database
//! layer and the API layer build on it.

pub mod donation;
pub mod error;
pub mod ledger;
pub mod pagination;
pub mod project;
pub mod types;
