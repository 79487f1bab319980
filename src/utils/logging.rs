//! Logging utilities
//!
//! Provides logging setup and configuration.

/// Initialise `env_logger` from `RUST_LOG`. Safe to call more than once.
pub fn setup_logging() {
    // Fails only when a logger is already installed.
    env_logger::try_init().ok();
}
