use tracing::info;

use crate::{
    domain::{
        error::DomainError, models::credential::Credential,
        repositories::credential_repository::CredentialRepository,
        services::password_service::PasswordHasher,
    },
    password_manager::PasswordManager,
};

pub struct RegisterCredentialUsecase<C: CredentialRepository, P: PasswordHasher> {
    credential_repository: C,
    password_manager: PasswordManager<P>,
}

impl<C: CredentialRepository, P: PasswordHasher> RegisterCredentialUsecase<C, P> {
    pub fn new(credential_repository: C, password_manager: PasswordManager<P>) -> Self {
        Self {
            credential_repository,
            password_manager,
        }
    }

    pub async fn register(&self, user_id: String, password: String) -> Result<Credential, DomainError>
    where
        C: Send + Sync,
        P: Send + Sync,
    {
        // Enforce the policy before spending time on hashing
        self.password_manager
            .validate_password_strength(&password)
            .into_result()?;

        let stored_credential = self.password_manager.hash_password(&password)?;
        let credential = Credential::new(user_id, stored_credential);

        self.credential_repository.save(credential.clone()).await?;
        info!(user_id = %credential.user_id(), "credential registered");

        Ok(credential)
    }
}
