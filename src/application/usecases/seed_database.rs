use std::sync::Arc;

use crate::{
    application::services::password::PasswordHasher,
    domain::{
        models::User,
        repositories::SeedRepository,
        seed::{SeedBatch, SeedData},
    },
};

pub const DATABASE_SEEDED: &str = "Database seeded successfully";

/// Brings the schema up and installs the demo dataset. Safe to run any
/// number of times: rows that already exist are skipped.
pub struct SeedDatabaseUseCase {
    seed_repo: Arc<dyn SeedRepository>,
    hasher: PasswordHasher,
    data: SeedData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedResponse {
    pub message: String,
}

impl SeedDatabaseUseCase {
    pub fn new(seed_repo: Arc<dyn SeedRepository>, hasher: PasswordHasher, data: SeedData) -> Self {
        Self {
            seed_repo,
            hasher,
            data,
        }
    }

    pub async fn execute(&self) -> anyhow::Result<SeedResponse> {
        self.seed_repo.ensure_schema().await?;

        let batch = self.prepare().await?;
        let report = self.seed_repo.seed(&batch).await?;

        tracing::info!(
            users = report.users,
            customers = report.customers,
            invoices = report.invoices,
            revenue = report.revenue,
            "seed run finished"
        );

        Ok(SeedResponse {
            message: DATABASE_SEEDED.to_string(),
        })
    }

    async fn prepare(&self) -> anyhow::Result<SeedBatch> {
        let mut users = Vec::with_capacity(self.data.users.len());
        for seed_user in &self.data.users {
            let password_hash = self.hasher.hash(&seed_user.password).await?;
            users.push(User {
                id: seed_user.id,
                name: seed_user.name.clone(),
                email: seed_user.email.clone(),
                password_hash,
            });
        }

        Ok(SeedBatch {
            users,
            customers: self.data.customers.clone(),
            invoices: self.data.invoices.clone(),
            revenue: self.data.revenue.clone(),
        })
    }
}
