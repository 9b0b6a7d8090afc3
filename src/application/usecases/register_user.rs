use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::services::password::PasswordHasher,
    domain::{errors::DomainError, models::User, repositories::UserRepository},
};

pub const USER_REGISTERED: &str = "User registered successfully";

pub struct RegisterUserUseCase {
    user_repo: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterResponse {
    pub message: String,
}

impl RegisterUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Self {
        Self { user_repo, hasher }
    }

    /// Creates an account unless the email is already taken. The plaintext
    /// password is hashed before it gets anywhere near the repository.
    pub async fn execute(&self, request: RegisterRequest) -> Result<RegisterResponse, DomainError> {
        if self.user_repo.find_by_email(&request.email).await?.is_some() {
            return Err(DomainError::UserAlreadyExists);
        }

        let password_hash = self.hasher.hash(&request.password).await?;
        let user = User {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email,
            password_hash,
        };
        self.user_repo.insert(&user).await?;

        Ok(RegisterResponse {
            message: USER_REGISTERED.to_string(),
        })
    }
}
