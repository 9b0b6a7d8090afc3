use std::sync::Arc;

use crate::application::services::credentials::{
    CREDENTIALS_SIGNIN, CredentialProvider, SignInRequest,
};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// Runs one sign-in attempt and normalizes the outcome into a message the
/// form can display. Provider codes never leak past this point.
pub struct AuthenticateUserUseCase {
    provider: Arc<dyn CredentialProvider>,
}

pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub error: Option<String>,
}

impl AuthenticateUserUseCase {
    pub fn new(provider: Arc<dyn CredentialProvider>) -> Self {
        Self { provider }
    }

    pub async fn execute(&self, request: AuthRequest) -> AuthResponse {
        let attempt = SignInRequest::new(request.email, request.password);

        match self.provider.sign_in(attempt).await {
            Ok(result) => match result.error {
                None => AuthResponse { error: None },
                Some(code) => {
                    tracing::error!(%code, "sign-in failed");
                    let message = if code == CREDENTIALS_SIGNIN {
                        INVALID_CREDENTIALS
                    } else {
                        UNEXPECTED_ERROR
                    };
                    AuthResponse {
                        error: Some(message.to_string()),
                    }
                }
            },
            Err(err) => {
                tracing::error!(error = ?err, "credential provider failed");
                AuthResponse {
                    error: Some(UNEXPECTED_ERROR.to_string()),
                }
            }
        }
    }
}
