//! Core domain logic for the moviecrew project.
//!
//! Holds the crew lookup pipeline (validation, movie-id parsing, name
//! filtering) and the storage abstraction it queries through. Nothing in
//! this crate knows about HTTP or any concrete store.

pub mod crew;
pub mod storage;
