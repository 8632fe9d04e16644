//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or any Postgres executor) as the first argument.

pub mod fruit_repo;

pub use fruit_repo::FruitRepo;
