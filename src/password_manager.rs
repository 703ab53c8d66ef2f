use std::sync::Arc;

use crate::{
    config::HashingConfig,
    domain::{
        error::DomainError,
        models::{credential::StoredCredential, strength::StrengthVerdict},
        services::{
            password_generator::PasswordGenerator, password_policy::PasswordPolicy,
            password_service::PasswordHasher, random_source::SecureRandomSource,
        },
    },
    infrastructure::{argon2_password_hasher::Argon2PasswordHasher, os_random_source::OsRandomSource},
};

/// Hashes, verifies, validates and generates passwords.
///
/// Holds no mutable state, so a single instance can be cloned or shared
/// between threads freely.
#[derive(Clone)]
pub struct PasswordManager<H: PasswordHasher = Argon2PasswordHasher> {
    hasher: H,
    policy: PasswordPolicy,
    generator: PasswordGenerator,
}

impl PasswordManager {
    /// Argon2id hashing and the default policy, backed by the OS CSPRNG
    pub fn new(config: HashingConfig) -> Result<Self, DomainError> {
        Self::with_random_source(config, Arc::new(OsRandomSource))
    }

    pub fn with_random_source(
        config: HashingConfig,
        random: Arc<dyn SecureRandomSource>,
    ) -> Result<Self, DomainError> {
        let hasher = Argon2PasswordHasher::new(config, Arc::clone(&random))?;
        Ok(Self::from_parts(
            hasher,
            PasswordPolicy::default(),
            PasswordGenerator::new(random),
        ))
    }
}

impl<H: PasswordHasher> PasswordManager<H> {
    pub fn from_parts(hasher: H, policy: PasswordPolicy, generator: PasswordGenerator) -> Self {
        Self {
            hasher,
            policy,
            generator,
        }
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Does not enforce the strength policy; callers validate first.
    pub fn hash_password(&self, plain_password: &str) -> Result<StoredCredential, DomainError> {
        self.hasher.hash(plain_password)
    }

    pub fn verify_password(&self, plain_password: &str, stored_credential: &StoredCredential) -> bool {
        self.hasher.verify(plain_password, stored_credential)
    }

    pub fn validate_password_strength(&self, plain_password: &str) -> StrengthVerdict {
        self.policy.validate(plain_password)
    }

    pub fn generate_password(&self, length: usize) -> Result<String, DomainError> {
        self.generator.generate(length)
    }
}
