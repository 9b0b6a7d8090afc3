use async_trait::async_trait;

/// Code a provider reports when the email/password pair does not check out.
pub const CREDENTIALS_SIGNIN: &str = "CredentialsSignin";

/// A single sign-in attempt. `redirect` is part of the provider contract
/// and stays off: the caller renders the outcome instead of being bounced.
#[derive(Debug, Clone)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    pub redirect: bool,
}

impl SignInRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            redirect: false,
        }
    }
}

/// Provider verdict. `error` is `None` on a clean pass, otherwise a
/// provider-defined code such as [`CREDENTIALS_SIGNIN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInResult {
    pub error: Option<String>,
}

impl SignInResult {
    pub fn ok() -> Self {
        Self { error: None }
    }

    pub fn failure(code: impl Into<String>) -> Self {
        Self {
            error: Some(code.into()),
        }
    }
}

/// Verifies submitted credentials. Implementations report credential
/// mismatches through the result code and reserve `Err` for breakage
/// underneath them.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn sign_in(&self, request: SignInRequest) -> anyhow::Result<SignInResult>;
}
