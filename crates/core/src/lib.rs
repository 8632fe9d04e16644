//! Domain types and pure logic for the fruit service.
//!
//! Nothing in this crate performs I/O; persistence lives in `fruitstand-db`
//! and the HTTP surface in `fruitstand-api`.

pub mod checkbox;
pub mod error;
pub mod seed;
pub mod types;
pub mod validation;
