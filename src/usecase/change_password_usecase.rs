use tracing::info;

use crate::{
    domain::{
        error::DomainError, models::credential::Credential,
        repositories::credential_repository::CredentialRepository,
        services::password_service::PasswordHasher,
    },
    password_manager::PasswordManager,
    usecase::login_usecase::authenticate,
};

pub struct ChangePasswordUsecase<C: CredentialRepository, P: PasswordHasher> {
    credential_repository: C,
    password_manager: PasswordManager<P>,
}

impl<C: CredentialRepository, P: PasswordHasher> ChangePasswordUsecase<C, P> {
    pub fn new(credential_repository: C, password_manager: PasswordManager<P>) -> Self {
        Self {
            credential_repository,
            password_manager,
        }
    }

    /// Replace the stored credential once the current password checks out.
    pub async fn change_password(
        &self,
        user_id: String,
        current_password: String,
        new_password: String,
    ) -> Result<Credential, DomainError>
    where
        C: Send + Sync,
        P: Send + Sync,
    {
        let current = authenticate(
            &self.credential_repository,
            &self.password_manager,
            &user_id,
            &current_password,
        )
        .await?;

        self.password_manager
            .validate_password_strength(&new_password)
            .into_result()?;

        let stored_credential = self.password_manager.hash_password(&new_password)?;
        let replacement = current.with_replaced_password(stored_credential);

        self.credential_repository.save(replacement.clone()).await?;
        info!(user_id = %user_id, "password changed");

        Ok(replacement)
    }
}
