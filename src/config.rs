//! Tunable parameters.
//!
//! The password manager itself only ever receives these as constructor
//! arguments. Reading them from the environment is left to the binary.

use std::str::FromStr;

use argon2::Params;

use crate::domain::error::DomainError;

pub const DEFAULT_MEMORY_COST_KIB: u32 = 19 * 1024;
pub const DEFAULT_TIME_COST: u32 = 2;
pub const DEFAULT_PARALLELISM: u32 = 1;

pub const MIN_SALT_LEN: usize = 16;
pub const DEFAULT_SALT_LEN: usize = 16;

pub const MIN_DIGEST_LEN: usize = 16;
pub const MAX_DIGEST_LEN: usize = 64;
pub const DEFAULT_DIGEST_LEN: usize = 32;

const ENV_MEMORY_COST: &str = "CATALOG_AUTH_MEMORY_KIB";
const ENV_TIME_COST: &str = "CATALOG_AUTH_TIME_COST";
const ENV_PARALLELISM: &str = "CATALOG_AUTH_PARALLELISM";

/// Argon2id work factor plus salt and digest sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingConfig {
    pub memory_cost_kib: u32,
    pub time_cost: u32,
    pub parallelism: u32,
    pub salt_len: usize,
    pub digest_len: usize,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_cost_kib: DEFAULT_MEMORY_COST_KIB,
            time_cost: DEFAULT_TIME_COST,
            parallelism: DEFAULT_PARALLELISM,
            salt_len: DEFAULT_SALT_LEN,
            digest_len: DEFAULT_DIGEST_LEN,
        }
    }
}

impl HashingConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.salt_len < MIN_SALT_LEN {
            return Err(DomainError::Configuration(format!(
                "salt length must be at least {MIN_SALT_LEN} bytes, got {}",
                self.salt_len
            )));
        }
        if !(MIN_DIGEST_LEN..=MAX_DIGEST_LEN).contains(&self.digest_len) {
            return Err(DomainError::Configuration(format!(
                "digest length must be within {MIN_DIGEST_LEN}..={MAX_DIGEST_LEN} bytes, got {}",
                self.digest_len
            )));
        }
        self.params()
            .map_err(|e| DomainError::Configuration(format!("argon2 parameters: {e}")))?;
        Ok(())
    }

    pub(crate) fn params(&self) -> Result<Params, argon2::Error> {
        Params::new(
            self.memory_cost_kib,
            self.time_cost,
            self.parallelism,
            Some(self.digest_len),
        )
    }
}

/// Settings the command line front end assembles at start up
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub hashing: HashingConfig,
}

impl AppConfig {
    /// Load from the process environment, after merging a `.env` file if
    /// one is present
    pub fn from_env() -> Result<Self, DomainError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded environment file");
        }
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = HashingConfig::default();
        let hashing = HashingConfig {
            memory_cost_kib: parse_or(&lookup, ENV_MEMORY_COST, defaults.memory_cost_kib)?,
            time_cost: parse_or(&lookup, ENV_TIME_COST, defaults.time_cost)?,
            parallelism: parse_or(&lookup, ENV_PARALLELISM, defaults.parallelism)?,
            ..defaults
        };
        hashing.validate()?;
        Ok(Self { hashing })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, DomainError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| DomainError::Configuration(format!("{key} is not a valid number: {raw:?}"))),
        None => Ok(default),
    }
}
