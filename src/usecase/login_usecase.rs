use tracing::info;

use crate::{
    domain::{
        error::DomainError, models::credential::Credential,
        repositories::credential_repository::CredentialRepository,
        services::password_service::PasswordHasher,
    },
    password_manager::PasswordManager,
};

pub struct LoginUsecase<C: CredentialRepository, P: PasswordHasher> {
    credential_repository: C,
    password_manager: PasswordManager<P>,
}

impl<C: CredentialRepository, P: PasswordHasher> LoginUsecase<C, P> {
    pub fn new(credential_repository: C, password_manager: PasswordManager<P>) -> Self {
        Self {
            credential_repository,
            password_manager,
        }
    }

    pub async fn login(&self, user_id: String, password: String) -> Result<Credential, DomainError>
    where
        C: Send + Sync,
        P: Send + Sync,
    {
        let credential =
            authenticate(&self.credential_repository, &self.password_manager, &user_id, &password).await?;
        info!(user_id = %user_id, "login succeeded");
        Ok(credential)
    }
}

/// Fetch the user's credential and check the password against it.
///
/// An unknown user and a wrong password produce the same error.
pub(crate) async fn authenticate<C, P>(
    credential_repository: &C,
    password_manager: &PasswordManager<P>,
    user_id: &str,
    password: &str,
) -> Result<Credential, DomainError>
where
    C: CredentialRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    let credential = credential_repository.find_by_user_id(user_id).await?;
    match credential {
        Some(credential)
            if password_manager.verify_password(password, credential.stored_credential()) =>
        {
            Ok(credential)
        }
        _ => {
            info!(user_id = %user_id, "authentication rejected");
            Err(DomainError::AuthenticationFailed)
        }
    }
}
