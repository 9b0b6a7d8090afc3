use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    models::{Customer, Invoice, User},
    repositories::{SeedRepository, UserRepository},
    seed::{SeedBatch, SeedReport},
};

#[derive(Debug, Clone, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    customers: HashMap<Uuid, Customer>,
    invoices: HashMap<Uuid, Invoice>,
    revenue: HashMap<String, i32>,
}

/// Shared storage behind the in-memory repositories. Clones hand out the
/// same underlying tables.
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCounts {
    pub users: usize,
    pub customers: usize,
    pub invoices: usize,
    pub revenue: usize,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn table_counts(&self) -> TableCounts {
        let tables = self.tables.read().await;
        TableCounts {
            users: tables.users.len(),
            customers: tables.customers.len(),
            invoices: tables.invoices.len(),
            revenue: tables.revenue.len(),
        }
    }
}

pub struct InMemoryUserRepository {
    db: InMemoryDatabase,
}

impl InMemoryUserRepository {
    pub fn new(db: InMemoryDatabase) -> Arc<Self> {
        Arc::new(Self { db })
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let tables = self.db.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        let mut tables = self.db.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            anyhow::bail!("users email uniqueness violated for {}", user.email);
        }
        tables.users.insert(user.id, user.clone());
        Ok(())
    }
}

pub struct InMemorySeedRepository {
    db: InMemoryDatabase,
}

impl InMemorySeedRepository {
    pub fn new(db: InMemoryDatabase) -> Arc<Self> {
        Arc::new(Self { db })
    }
}

#[async_trait]
impl SeedRepository for InMemorySeedRepository {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        // The tables exist as soon as the database does.
        Ok(())
    }

    async fn seed(&self, batch: &SeedBatch) -> anyhow::Result<SeedReport> {
        let mut tables = self.db.tables.write().await;

        // Stage onto a copy and swap at the end, so a mid-batch failure
        // leaves the live tables exactly as they were.
        let mut staged = tables.clone();
        let mut report = SeedReport::default();

        for user in &batch.users {
            if staged.users.contains_key(&user.id) {
                continue;
            }
            if staged.users.values().any(|u| u.email == user.email) {
                anyhow::bail!("users email uniqueness violated for {}", user.email);
            }
            staged.users.insert(user.id, user.clone());
            report.users += 1;
        }

        for customer in &batch.customers {
            if staged.customers.contains_key(&customer.id) {
                continue;
            }
            staged.customers.insert(customer.id, customer.clone());
            report.customers += 1;
        }

        for invoice in &batch.invoices {
            if staged.invoices.contains_key(&invoice.id) {
                continue;
            }
            staged.invoices.insert(invoice.id, invoice.clone());
            report.invoices += 1;
        }

        for entry in &batch.revenue {
            if staged.revenue.contains_key(&entry.month) {
                continue;
            }
            staged.revenue.insert(entry.month.clone(), entry.revenue);
            report.revenue += 1;
        }

        *tables = staged;
        Ok(report)
    }
}
