use anyhow::Context;

/// Work factor used for every stored credential.
pub const HASH_COST: u32 = 10;

/// Bcrypt hashing behind a blocking-pool hop, so a slow hash never stalls
/// the async executor.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash(&self, password: &str) -> anyhow::Result<String> {
        let password = password.to_string();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .context("password hashing task aborted")?
            .context("failed to hash password")
    }

    pub async fn verify(&self, password: &str, hash: &str) -> anyhow::Result<bool> {
        let password = password.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .context("password verification task aborted")?
            .context("failed to verify password")
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(HASH_COST)
    }
}
