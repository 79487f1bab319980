//! Credential validators
//!
//! Pure predicates over email addresses, passwords and identifier/secret
//! pairs. None of them fail: every input maps to a boolean.

use super::credentials::Directory;

/// Domain suffixes an email address must contain after at least one character.
pub const ACCEPTED_DOMAINS: [&str; 2] = ["@perseverenow.org", ".prsvr@gmail.com"];

/// Minimum password length, in UTF-16 code units.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Returns whether the first occurrence of an accepted domain starts past index 0.
///
/// Only the first occurrence of each suffix counts, so `"@perseverenow.org"`
/// repeated twice is still rejected.
pub fn email_is_valid(text: &str) -> bool {
    ACCEPTED_DOMAINS
        .iter()
        .any(|domain| text.find(domain).is_some_and(|idx| idx > 0))
}

/// Returns whether the password is at least 8 characters long and mixes case.
pub fn password_is_valid(text: &str) -> bool {
    password_meets_policy(text, MIN_PASSWORD_LENGTH)
}

/// Length-parameterised form of [`password_is_valid`].
///
/// Length is measured in UTF-16 code units, so a character outside the Basic
/// Multilingual Plane counts twice. A password without cased characters equals
/// both its upper and lower case forms and is rejected.
pub fn password_meets_policy(text: &str, min_length: usize) -> bool {
    if text.encode_utf16().count() < min_length {
        return false;
    }

    text != text.to_uppercase() && text != text.to_lowercase()
}

/// Returns whether the identifier exactly equals a known user's identifier.
pub fn user_is_registered(directory: &Directory, identifier: &str) -> bool {
    directory.find(identifier).is_some()
}

/// Returns whether the identifier/secret pair matches one record exactly.
pub fn credentials_match(directory: &Directory, identifier: &str, secret: &str) -> bool {
    directory
        .records()
        .iter()
        .any(|r| r.identifier == identifier && r.secret == secret)
}
