//! Configuration management
//!
//! Loads the user directory and password policy from an optional TOML file
//! with environment overrides. Every setting has a built-in default, so a
//! missing file yields the three built-in users and an 8 character minimum.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::auth::credentials::{BUILTIN_USERS, Directory, UserRecord};
use crate::auth::validator::{MIN_PASSWORD_LENGTH, email_is_valid};

/// Candidate config file locations, checked in order
const CONFIG_PATHS: [&str; 2] = ["config/persevere-auth.toml", "persevere-auth.toml"];

/// Environment: PERSEVERE_AUTH_MIN_PASSWORD_LENGTH
const ENV_PREFIX: &str = "PERSEVERE_AUTH";

/// One `[[users]]` entry as written in the config file.
///
/// Fields are optional so that an entry missing either one deserializes and
/// is then reported by [`AuthConfig::validate`] instead of being dropped.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct UserEntry {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub secret: Option<String>,
}

/// Authentication configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    #[serde(default = "default_users")]
    pub users: Vec<UserEntry>,

    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

fn default_users() -> Vec<UserEntry> {
    BUILTIN_USERS
        .iter()
        .map(|(identifier, secret)| UserEntry {
            identifier: Some(identifier.to_string()),
            secret: Some(secret.to_string()),
        })
        .collect()
}

fn default_min_password_length() -> usize {
    MIN_PASSWORD_LENGTH
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            users: default_users(),
            min_password_length: default_min_password_length(),
        }
    }
}

impl AuthConfig {
    /// Load from the first config file found, then apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&CONFIG_PATHS, ENV_PREFIX)
    }

    /// Load from the first existing file in `paths`, then apply variables
    /// named `{env_prefix}_<KEY>`
    pub fn load_from(paths: &[&str], env_prefix: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        match paths.iter().map(Path::new).find(|p| p.is_file()) {
            Some(path) => {
                info!("Loading auth config from {}", path.display());
                builder = builder.add_source(File::from(path));
            }
            None => info!("No auth config file found, using built-in users"),
        }

        Self::build(builder.add_source(Environment::with_prefix(env_prefix)))
    }

    /// Build from an in-memory TOML document
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: AuthConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        debug!(
            "Auth config loaded: {} users, minimum password length {}",
            config.users.len(),
            config.min_password_length
        );
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_password_length == 0 {
            return Err(ConfigError::Message(
                "min_password_length must be greater than 0".into(),
            ));
        }

        if self.users.is_empty() {
            warn!("Auth config defines no users; nobody can authenticate");
        }

        let mut seen = HashSet::new();
        for (idx, entry) in self.users.iter().enumerate() {
            let identifier = match entry.identifier.as_deref() {
                Some(id) if !id.is_empty() => id,
                _ => {
                    return Err(ConfigError::Message(format!(
                        "users[{idx}] is missing an identifier"
                    )));
                }
            };

            if !email_is_valid(identifier) {
                return Err(ConfigError::Message(format!(
                    "users[{idx}] identifier {identifier} is not an accepted email address"
                )));
            }

            if entry.secret.as_deref().is_none_or(str::is_empty) {
                return Err(ConfigError::Message(format!(
                    "users[{idx}] ({identifier}) is missing a secret"
                )));
            }

            if !seen.insert(identifier) {
                return Err(ConfigError::Message(format!(
                    "users[{idx}] duplicates identifier {identifier}"
                )));
            }
        }

        Ok(())
    }

    /// Validate and build the user directory
    pub fn directory(&self) -> Result<Directory, ConfigError> {
        self.validate()?;

        let records = self
            .users
            .iter()
            .filter_map(|e| Some(UserRecord::new(e.identifier.clone()?, e.secret.clone()?)))
            .collect();
        Ok(Directory::new(records))
    }
}
