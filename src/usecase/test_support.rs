use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;

use crate::{
    domain::{
        error::{DomainError, RepositoryError},
        models::credential::{Credential, StoredCredential},
        repositories::credential_repository::CredentialRepository,
        services::{
            password_generator::PasswordGenerator, password_policy::PasswordPolicy,
            password_service::PasswordHasher,
        },
    },
    infrastructure::os_random_source::OsRandomSource,
    password_manager::PasswordManager,
};

// mock repository interface
#[derive(Clone, Default)]
pub(crate) struct MockCredentialRepository {
    credentials: Arc<Mutex<HashMap<String, Credential>>>,
}

impl MockCredentialRepository {
    pub(crate) fn stored(&self, user_id: &str) -> Option<Credential> {
        self.credentials.lock().unwrap().get(user_id).cloned()
    }
}

#[async_trait]
impl CredentialRepository for MockCredentialRepository {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Credential>, RepositoryError> {
        if user_id == "broken_storage" {
            return Err(RepositoryError::DatabaseError("connection reset".to_string()));
        }
        Ok(self.stored(user_id))
    }

    async fn save(&self, credential: Credential) -> Result<(), RepositoryError> {
        self.credentials
            .lock()
            .unwrap()
            .insert(credential.user_id().to_string(), credential);
        Ok(())
    }
}

/// Reversible "hash" so use case tests do not pay for key derivation
#[derive(Clone)]
pub(crate) struct MockPasswordHasher;

impl PasswordHasher for MockPasswordHasher {
    fn hash(&self, plain_password: &str) -> Result<StoredCredential, DomainError> {
        Ok(StoredCredential::from_parts("mock", &hex::encode(plain_password)))
    }

    fn verify(&self, plain_password: &str, stored_credential: &StoredCredential) -> bool {
        stored_credential.parts() == Some(("mock", hex::encode(plain_password).as_str()))
    }
}

pub(crate) fn mock_password_manager() -> PasswordManager<MockPasswordHasher> {
    PasswordManager::from_parts(
        MockPasswordHasher,
        PasswordPolicy::default(),
        PasswordGenerator::new(Arc::new(OsRandomSource)),
    )
}
