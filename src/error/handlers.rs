//! Error handlers

use crate::error::types::AuthError;
use log::warn;

/// Log a rejected authentication attempt
pub fn log_auth_failure(err: &AuthError) {
    warn!("Authentication rejected: {}", err);
}
