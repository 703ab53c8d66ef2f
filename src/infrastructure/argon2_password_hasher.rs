use std::sync::Arc;

use argon2::{Algorithm, Argon2, Version, password_hash::Output};
use tracing::{debug, warn};

use crate::{
    config::HashingConfig,
    domain::{
        error::DomainError,
        models::credential::StoredCredential,
        services::{password_service::PasswordHasher, random_source::SecureRandomSource},
    },
};

/// Argon2id hasher producing `<hex salt>:<hex digest>` credentials.
///
/// Parameters are not embedded in the credential, so every credential must be
/// checked with the configuration it was produced under.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    config: HashingConfig,
    random: Arc<dyn SecureRandomSource>,
}

impl Argon2PasswordHasher {
    pub fn new(config: HashingConfig, random: Arc<dyn SecureRandomSource>) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self { config, random })
    }

    pub fn config(&self) -> &HashingConfig {
        &self.config
    }

    fn derive(&self, plain_password: &str, salt: &[u8]) -> Result<Vec<u8>, argon2::Error> {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.config.params()?);
        let mut digest = vec![0u8; self.config.digest_len];
        argon2.hash_password_into(plain_password.as_bytes(), salt, &mut digest)?;
        Ok(digest)
    }

    /// The error side only names what was wrong, never the material itself
    fn try_verify(
        &self,
        plain_password: &str,
        stored_credential: &StoredCredential,
    ) -> Result<bool, &'static str> {
        let (salt, digest) = stored_credential.parts().ok_or("malformed")?;
        let salt = hex::decode(salt).map_err(|_| "undecodable salt")?;
        let digest = hex::decode(digest).map_err(|_| "undecodable digest")?;
        if salt.len() != self.config.salt_len {
            return Err("unexpected salt length");
        }
        if digest.len() != self.config.digest_len {
            return Err("unexpected digest length");
        }

        let expected = Output::new(&digest).map_err(|_| "unexpected digest length")?;
        let computed = self
            .derive(plain_password, &salt)
            .map_err(|_| "key derivation failed")?;
        let computed = Output::new(&computed).map_err(|_| "unexpected digest length")?;

        // Output equality is constant time
        Ok(computed == expected)
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, plain_password: &str) -> Result<StoredCredential, DomainError> {
        let mut salt = vec![0u8; self.config.salt_len];
        self.random.fill_bytes(&mut salt);

        let digest = self.derive(plain_password, &salt).map_err(|e| {
            warn!(error = %e, "argon2 key derivation failed");
            DomainError::Hashing(e.to_string())
        })?;

        Ok(StoredCredential::from_parts(
            &hex::encode(salt),
            &hex::encode(digest),
        ))
    }

    fn verify(&self, plain_password: &str, stored_credential: &StoredCredential) -> bool {
        match self.try_verify(plain_password, stored_credential) {
            Ok(matched) => matched,
            Err(reason) => {
                debug!(reason, "stored credential cannot be verified");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::{
        domain::services::random_source::doubles::{SequenceRandomSource, ZeroRandomSource},
        infrastructure::os_random_source::OsRandomSource,
    };

    // cheap work factor so the suite stays fast; the format is identical
    fn light_config() -> HashingConfig {
        HashingConfig {
            memory_cost_kib: 64,
            time_cost: 1,
            parallelism: 1,
            ..HashingConfig::default()
        }
    }

    #[fixture]
    fn hasher() -> Argon2PasswordHasher {
        Argon2PasswordHasher::new(light_config(), Arc::new(OsRandomSource)).unwrap()
    }

    #[rstest]
    fn hash_has_single_delimiter_and_hex_parts(hasher: Argon2PasswordHasher) {
        let stored = hasher.hash("Password123!").unwrap();
        assert_eq!(stored.as_str().matches(':').count(), 1);

        let (salt, digest) = stored.parts().unwrap();
        assert_eq!(salt.len(), 2 * 16);
        assert_eq!(digest.len(), 2 * 32);
        assert!(salt.chars().chain(digest.chars()).all(|c| c.is_ascii_hexdigit()));
    }

    #[rstest]
    fn hashing_same_password_twice_differs(hasher: Argon2PasswordHasher) {
        let first = hasher.hash("MiPassword123!").unwrap();
        let second = hasher.hash("MiPassword123!").unwrap();
        assert_ne!(first, second);
        assert!(hasher.verify("MiPassword123!", &first));
        assert!(hasher.verify("MiPassword123!", &second));
    }

    #[rstest]
    #[case("Password123!")]
    #[case("MiPasswordSegura123!")]
    #[case("")]
    #[case("contraseña-con-ñ-y-😀")]
    fn round_trip(hasher: Argon2PasswordHasher, #[case] password: &str) {
        let stored = hasher.hash(password).unwrap();
        assert!(hasher.verify(password, &stored));
    }

    #[rstest]
    fn verification_is_case_sensitive(hasher: Argon2PasswordHasher) {
        let stored = hasher.hash("Password123!").unwrap();
        assert!(hasher.verify("Password123!", &stored));
        assert!(!hasher.verify("password123!", &stored));
        assert!(!hasher.verify("WrongPassword123!", &stored));
    }

    #[rstest]
    #[case("not-a-valid-format")]
    #[case("hash_sin_formato_correcto")]
    #[case("")]
    #[case(":")]
    #[case("zz:zz")]
    #[case("00112233445566778899aabbccddeeff:nothex")]
    #[case("0011:00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff")]
    #[case("00112233445566778899aabbccddeeff:0011")]
    fn malformed_credentials_never_match(hasher: Argon2PasswordHasher, #[case] encoded: &str) {
        assert!(!hasher.verify("anything", &StoredCredential::from(encoded)));
    }

    #[rstest]
    fn extra_delimiter_never_matches(hasher: Argon2PasswordHasher) {
        let stored = hasher.hash("Password123!").unwrap();
        let tampered = StoredCredential::new(format!("{}:", stored.as_str()));
        assert!(!hasher.verify("Password123!", &tampered));
    }

    #[rstest]
    fn tampered_digest_never_matches(hasher: Argon2PasswordHasher) {
        let stored = hasher.hash("Password123!").unwrap();
        let (salt, digest) = stored.parts().unwrap();
        let flipped = if digest.starts_with('0') { "1" } else { "0" };
        let tampered = StoredCredential::from_parts(salt, &format!("{flipped}{}", &digest[1..]));
        assert!(!hasher.verify("Password123!", &tampered));
    }

    #[test]
    fn same_salt_yields_same_credential() {
        let first = Argon2PasswordHasher::new(light_config(), Arc::new(ZeroRandomSource)).unwrap();
        let second = Argon2PasswordHasher::new(light_config(), Arc::new(ZeroRandomSource)).unwrap();
        assert_eq!(
            first.hash("Password123!").unwrap(),
            second.hash("Password123!").unwrap()
        );
    }

    #[test]
    fn salt_comes_from_the_random_source() {
        let hasher =
            Argon2PasswordHasher::new(light_config(), Arc::new(SequenceRandomSource::starting_at(0))).unwrap();
        let stored = hasher.hash("Password123!").unwrap();
        assert_eq!(stored.parts().unwrap().0, "000102030405060708090a0b0c0d0e0f");
    }

    #[test]
    fn credential_from_other_work_factor_does_not_match() {
        let light = Argon2PasswordHasher::new(light_config(), Arc::new(OsRandomSource)).unwrap();
        let heavier = Argon2PasswordHasher::new(
            HashingConfig {
                time_cost: 2,
                ..light_config()
            },
            Arc::new(OsRandomSource),
        )
        .unwrap();
        let stored = light.hash("Password123!").unwrap();
        assert!(!heavier.verify("Password123!", &stored));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = HashingConfig {
            salt_len: 4,
            ..HashingConfig::default()
        };
        assert!(Argon2PasswordHasher::new(config, Arc::new(OsRandomSource)).is_err());
    }
}
