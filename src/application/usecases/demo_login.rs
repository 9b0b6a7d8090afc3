use std::time::Duration;

use crate::domain::errors::DomainError;

/// Stand-in for a round trip to a real identity service.
pub const SIMULATED_DELAY: Duration = Duration::from_secs(1);

pub const LOGIN_SUCCESSFUL: &str = "Login successful";

/// Demo sign-in that talks to nothing: it waits out [`SIMULATED_DELAY`] and
/// accepts exactly when the email is non-empty and matches the password.
#[derive(Default)]
pub struct DemoLoginUseCase;

#[derive(Debug, Clone)]
pub struct DemoLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoLoginResponse {
    pub message: String,
}

impl DemoLoginUseCase {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self, request: DemoLoginRequest) -> Result<DemoLoginResponse, DomainError> {
        tokio::time::sleep(SIMULATED_DELAY).await;

        if request.email.is_empty() || request.email != request.password {
            return Err(DomainError::EmailPasswordMismatch);
        }

        Ok(DemoLoginResponse {
            message: LOGIN_SUCCESSFUL.to_string(),
        })
    }
}
