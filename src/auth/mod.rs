//! Authentication system
//!
//! Email and password format rules, and credential checks against a
//! read-only user directory.

pub mod authenticator;
pub mod credentials;
pub mod validator;

pub use authenticator::Authenticator;
pub use credentials::{Directory, UserRecord};
pub use validator::{
    credentials_match, email_is_valid, password_is_valid, password_meets_policy,
    user_is_registered,
};
