use async_trait::async_trait;

use crate::domain::models::User;
use crate::domain::seed::{SeedBatch, SeedReport};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
}

#[async_trait]
pub trait SeedRepository: Send + Sync {
    /// Creates the schema if it is not there yet.
    async fn ensure_schema(&self) -> anyhow::Result<()>;

    /// Installs the batch atomically, skipping rows that already exist.
    /// Either every missing row lands or none do.
    async fn seed(&self, batch: &SeedBatch) -> anyhow::Result<SeedReport>;
}
