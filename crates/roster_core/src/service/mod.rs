//! Core use-case services.
//!
//! # Responsibility
//! - Translate discrete UI events into store operations.
//! - Keep draft input state next to the store it feeds.

pub mod session;
