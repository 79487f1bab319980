pub mod auth;
pub mod config;
pub mod error;
pub mod utils;

pub use auth::credentials::{PASSWORD1, PASSWORD2, PASSWORD3, USER1, USER2, USER3};
pub use auth::{
    Authenticator, Directory, UserRecord, credentials_match, email_is_valid, password_is_valid,
    user_is_registered,
};
pub use crate::config::AuthConfig;
pub use crate::error::AuthError;
