//! Flutter bridge for the roster core.

pub mod api;
