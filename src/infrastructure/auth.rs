use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    application::services::{
        credentials::{CREDENTIALS_SIGNIN, CredentialProvider, SignInRequest, SignInResult},
        password::PasswordHasher,
    },
    domain::repositories::UserRepository,
};

/// Checks credentials against stored accounts. An unknown email and a wrong
/// password produce the same [`CREDENTIALS_SIGNIN`] code.
pub struct DatabaseCredentialProvider {
    user_repo: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl DatabaseCredentialProvider {
    pub fn new(user_repo: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Arc<Self> {
        Arc::new(Self { user_repo, hasher })
    }
}

#[async_trait]
impl CredentialProvider for DatabaseCredentialProvider {
    async fn sign_in(&self, request: SignInRequest) -> anyhow::Result<SignInResult> {
        let user = match self.user_repo.find_by_email(&request.email).await? {
            Some(user) => user,
            None => return Ok(SignInResult::failure(CREDENTIALS_SIGNIN)),
        };

        let verified = self
            .hasher
            .verify(&request.password, &user.password_hash)
            .await?;

        if verified {
            Ok(SignInResult::ok())
        } else {
            Ok(SignInResult::failure(CREDENTIALS_SIGNIN))
        }
    }
}
