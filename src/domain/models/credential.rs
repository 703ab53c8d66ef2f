use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delimiter between the salt and digest parts of a stored credential
pub const CREDENTIAL_DELIMITER: char = ':';

/// Value object representing a salted password digest as persisted,
/// `<salt>:<digest>`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredCredential(String);

impl StoredCredential {
    /// Wrap an already encoded credential, e.g. one fetched from storage
    pub fn new(encoded: String) -> Self {
        Self(encoded)
    }

    /// Join already encoded salt and digest parts
    pub fn from_parts(salt: &str, digest: &str) -> Self {
        Self(format!("{salt}{CREDENTIAL_DELIMITER}{digest}"))
    }

    /// Get the credential as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into the encoded salt and digest parts.
    ///
    /// Returns `None` unless there is exactly one delimiter with a non-empty
    /// part on each side.
    pub fn parts(&self) -> Option<(&str, &str)> {
        let (salt, digest) = self.0.split_once(CREDENTIAL_DELIMITER)?;
        if salt.is_empty() || digest.is_empty() || digest.contains(CREDENTIAL_DELIMITER) {
            return None;
        }
        Some((salt, digest))
    }
}

// the digest must never end up in logs through `{:?}`
impl fmt::Debug for StoredCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StoredCredential(..)")
    }
}

impl From<String> for StoredCredential {
    fn from(encoded: String) -> Self {
        Self::new(encoded)
    }
}

impl From<&str> for StoredCredential {
    fn from(encoded: &str) -> Self {
        Self::new(encoded.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct Credential {
    user_id: String,
    stored_credential: StoredCredential,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(user_id: String, stored_credential: StoredCredential) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            stored_credential,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn reconstruct(
        user_id: String,
        stored_credential: StoredCredential,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            stored_credential,
            created_at,
            updated_at,
        }
    }

    /// Build the credential that replaces this one after a password change.
    /// The previous value is left untouched.
    pub fn with_replaced_password(&self, stored_credential: StoredCredential) -> Self {
        Self {
            user_id: self.user_id.clone(),
            stored_credential,
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn stored_credential(&self) -> &StoredCredential {
        &self.stored_credential
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
