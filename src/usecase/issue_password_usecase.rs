use tracing::info;

use crate::{
    domain::{
        error::DomainError, models::credential::Credential,
        repositories::credential_repository::CredentialRepository,
        services::password_service::PasswordHasher,
    },
    password_manager::PasswordManager,
};

/// Issues a generated password to a user, e.g. for onboarding or a reset
pub struct IssuePasswordUsecase<C: CredentialRepository, P: PasswordHasher> {
    credential_repository: C,
    password_manager: PasswordManager<P>,
}

impl<C: CredentialRepository, P: PasswordHasher> IssuePasswordUsecase<C, P> {
    pub fn new(credential_repository: C, password_manager: PasswordManager<P>) -> Self {
        Self {
            credential_repository,
            password_manager,
        }
    }

    /// Generate, store and return the plaintext. The plaintext is handed out
    /// exactly once; only its stored credential is kept.
    pub async fn issue(&self, user_id: String, length: usize) -> Result<String, DomainError>
    where
        C: Send + Sync,
        P: Send + Sync,
    {
        // the generator only needs room for the classes; the policy is stricter
        let policy = self.password_manager.policy();
        if !(policy.min_length()..=policy.max_length()).contains(&length) {
            return Err(DomainError::InvalidArgument(format!(
                "issued password length must be within {}..={}, got {length}",
                policy.min_length(),
                policy.max_length()
            )));
        }

        let password = self.password_manager.generate_password(length)?;
        let stored_credential = self.password_manager.hash_password(&password)?;

        let credential = match self.credential_repository.find_by_user_id(&user_id).await? {
            Some(existing) => existing.with_replaced_password(stored_credential),
            None => Credential::new(user_id, stored_credential),
        };
        self.credential_repository.save(credential.clone()).await?;
        info!(user_id = %credential.user_id(), "password issued");

        Ok(password)
    }
}
