//! Password management for the catalog's user accounts: salted Argon2id
//! hashing, fail-closed verification, a structural strength policy and
//! secure password generation.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod password_manager;
pub mod presentation;
pub mod usecase;

pub use config::HashingConfig;
pub use domain::{
    error::{DomainError, RepositoryError},
    models::{
        credential::{Credential, StoredCredential},
        strength::{StrengthVerdict, StrengthViolation},
    },
    services::random_source::SecureRandomSource,
};
pub use password_manager::PasswordManager;
