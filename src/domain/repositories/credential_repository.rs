use async_trait::async_trait;

use crate::domain::{error::RepositoryError, models::credential::Credential};

/// Persistence for stored credentials, provided by the embedding application
#[async_trait]
pub trait CredentialRepository {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Credential>, RepositoryError>;

    /// Insert the credential, or replace the one held for the same user
    async fn save(&self, credential: Credential) -> Result<(), RepositoryError>;
}
