//! Error handling
//!
//! Defines error types and handling for authentication.

pub mod handlers;
pub mod types;

pub use types::*;
