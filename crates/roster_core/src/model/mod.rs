//! Roster domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by roster business logic.
//!
//! # Invariants
//! - Every roster entry is identified by a stable `PersonId`.
//! - Derived counts are never stored on the model.

pub mod person;
