//! Catalog resource domain model.
//!
//! # Responsibility
//! - Define the canonical records tracked by the catalog: projects, notes
//!   and occurrences.
//! - Keep resource shapes transport-agnostic and storage-agnostic.
//!
//! # Invariants
//! - Every resource is identified by its canonical hierarchical name.
//! - Resource names never change after creation.

pub mod resource;
