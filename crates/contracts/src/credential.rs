//! Basic username/password credential shape.

use crate::serializable::Serializable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Read-only access to a username and password.
///
/// No validation or storage is implied; implementors decide where the
/// values come from.
pub trait BasicCredential {
    /// The username associated with the credential
    fn username(&self) -> &str;

    /// The password associated with the credential
    fn password(&self) -> &str;
}

/// A credential held in memory as plain strings.
///
/// `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainCredential {
    username: String,
    password: String,
}

impl PlainCredential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl BasicCredential for PlainCredential {
    fn username(&self) -> &str {
        &self.username
    }

    fn password(&self) -> &str {
        &self.password
    }
}

impl Serializable for PlainCredential {}

impl fmt::Debug for PlainCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlainCredential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
