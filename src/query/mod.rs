//! Generic query layer: specifications, their evaluator, and the repository
//! facade over an entity store.
//!
//! The full contract surface is exposed even where the HTTP layer only
//! exercises part of it.

#![allow(dead_code)]

pub mod evaluator;
pub mod repository;
pub mod specification;
pub mod store;

#[cfg(test)]
pub mod memory;

pub use repository::Repository;
pub use specification::{ProjectionSpecification, Specification};
pub use store::{CommitOutcome, Entity, EntityStore, Mutation, StoreError};
