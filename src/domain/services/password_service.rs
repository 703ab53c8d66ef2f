use crate::domain::{error::DomainError, models::credential::StoredCredential};

/// Service for hashing and verifying passwords
pub trait PasswordHasher: Clone {
    /// Hash a plain text password into a freshly salted stored credential
    fn hash(&self, plain_password: &str) -> Result<StoredCredential, DomainError>;

    /// Verify a plain text password against a stored credential.
    ///
    /// A malformed stored credential never matches; implementations must not
    /// report why verification failed.
    fn verify(&self, plain_password: &str, stored_credential: &StoredCredential) -> bool;
}
