//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod donation_repo;
pub mod project_repo;
pub mod stats_repo;

pub use donation_repo::DonationRepo;
pub use project_repo::ProjectRepo;
pub use stats_repo::StatsRepo;
