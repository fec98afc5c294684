//! Roster state ownership.
//!
//! # Responsibility
//! - Keep the roster, its derived counts and the delete gate consistent.
//! - Keep UI/FFI layers away from direct list mutation.

pub mod confirm_gate;
pub mod roster_store;
