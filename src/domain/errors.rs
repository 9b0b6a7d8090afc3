use thiserror::Error;

/// Domain failures whose `Display` text is the user-facing message. Anything
/// coming out of the infrastructure keeps its message through the
/// transparent variant.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Email and password must match.")]
    EmailPasswordMismatch,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
