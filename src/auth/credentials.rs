//! Credential storage
//!
//! Holds the user directory: an immutable, ordered list of identifier/secret
//! pairs. Secrets are stored and compared as plain text.

use std::sync::LazyLock;

pub const USER1: &str = "krose@perseverenow.org";
pub const PASSWORD1: &str = "Hotforhimself";
pub const USER2: &str = "jdoty@perseverenow.org";
pub const PASSWORD2: &str = "Console.logger";
pub const USER3: &str = "dhiggins.prsvr@gmail.com";
pub const PASSWORD3: &str = "supToThis";

/// The built-in identifier/secret pairs, in directory order.
pub const BUILTIN_USERS: [(&str, &str); 3] =
    [(USER1, PASSWORD1), (USER2, PASSWORD2), (USER3, PASSWORD3)];

/// Process-wide directory holding the built-in users.
static BUILTIN_DIRECTORY: LazyLock<Directory> = LazyLock::new(Directory::builtin);

/// A single known user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub identifier: String,
    pub secret: String,
}

impl UserRecord {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

/// Read-only lookup table of known users.
///
/// Identifiers are expected to be unique. The directory itself does not check
/// this; configuration loading does before building one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    records: Vec<UserRecord>,
}

impl Directory {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self { records }
    }

    /// Directory containing the three built-in users.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_USERS
                .iter()
                .map(|(identifier, secret)| UserRecord::new(*identifier, *secret))
                .collect(),
        )
    }

    /// Shared reference to the process-wide built-in directory.
    pub fn shared() -> &'static Directory {
        &BUILTIN_DIRECTORY
    }

    pub fn find(&self, identifier: &str) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.identifier == identifier)
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
