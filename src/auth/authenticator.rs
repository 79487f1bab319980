//! Authenticator
//!
//! Bundles a user directory with a password policy so callers can pass one
//! value around instead of a directory and a set of free functions.

use log::info;

use super::credentials::{Directory, UserRecord};
use super::validator::{
    MIN_PASSWORD_LENGTH, credentials_match, email_is_valid, password_meets_policy,
    user_is_registered,
};
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::error::handlers::log_auth_failure;

#[derive(Debug, Clone)]
pub struct Authenticator {
    directory: Directory,
    min_password_length: usize,
}

impl Authenticator {
    pub fn new(directory: Directory) -> Self {
        Self {
            directory,
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Result<Self, config::ConfigError> {
        Ok(Self {
            directory: config.directory()?,
            min_password_length: config.min_password_length,
        })
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn min_password_length(&self) -> usize {
        self.min_password_length
    }

    pub fn email_is_valid(&self, text: &str) -> bool {
        email_is_valid(text)
    }

    pub fn password_is_valid(&self, text: &str) -> bool {
        password_meets_policy(text, self.min_password_length)
    }

    pub fn user_is_registered(&self, identifier: &str) -> bool {
        user_is_registered(&self.directory, identifier)
    }

    pub fn credentials_match(&self, identifier: &str, secret: &str) -> bool {
        credentials_match(&self.directory, identifier, secret)
    }

    /// Checks a login attempt and reports why it was refused.
    ///
    /// The identifier is checked against the email rule first, then looked
    /// up, then its secret compared.
    pub fn authenticate(&self, identifier: &str, secret: &str) -> Result<&UserRecord, AuthError> {
        let result = if !email_is_valid(identifier) {
            Err(AuthError::MalformedIdentifier(identifier.to_string()))
        } else {
            match self.directory.find(identifier) {
                Some(record) if record.secret == secret => Ok(record),
                Some(_) => Err(AuthError::InvalidPassword(identifier.to_string())),
                None => Err(AuthError::UserNotFound(identifier.to_string())),
            }
        };

        match &result {
            Ok(record) => info!("User {} authenticated", record.identifier),
            Err(e) => log_auth_failure(e),
        }
        result
    }
}
