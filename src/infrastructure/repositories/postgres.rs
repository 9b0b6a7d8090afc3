use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{FromRow, PgConnection, Pool, Postgres};
use uuid::Uuid;

use crate::domain::{
    models::User,
    repositories::{SeedRepository, UserRepository},
    seed::{SeedBatch, SeedReport},
};

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, name, email, password FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(User::from))
    }

    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PostgresSeedRepository {
    pool: PgPool,
}

impl PostgresSeedRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl SeedRepository for PostgresSeedRepository {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        let mut conn = self.pool.acquire().await?;
        if let Err(err) = create_tables(&mut conn).await {
            tracing::error!(error = ?err, "schema creation failed");
            return Err(err.context("Database initialization failed"));
        }
        Ok(())
    }

    async fn seed(&self, batch: &SeedBatch) -> anyhow::Result<SeedReport> {
        // Dropping the transaction on any early return rolls everything back.
        let mut tx = self.pool.begin().await?;
        let mut report = SeedReport::default();

        for user in &batch.users {
            let result = sqlx::query(
                r#"
                INSERT INTO users (id, name, email, password)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .execute(&mut *tx)
            .await?;
            report.users += result.rows_affected();
        }

        for customer in &batch.customers {
            let result = sqlx::query(
                r#"
                INSERT INTO customers (id, name, email, image_url)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(customer.id)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.image_url)
            .execute(&mut *tx)
            .await?;
            report.customers += result.rows_affected();
        }

        for invoice in &batch.invoices {
            let result = sqlx::query(
                r#"
                INSERT INTO invoices (id, customer_id, amount, status, date)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(invoice.id)
            .bind(invoice.customer_id)
            .bind(invoice.amount)
            .bind(invoice.status.as_str())
            .bind(invoice.date)
            .execute(&mut *tx)
            .await?;
            report.invoices += result.rows_affected();
        }

        for entry in &batch.revenue {
            let result = sqlx::query(
                r#"
                INSERT INTO revenue (month, revenue)
                VALUES ($1, $2)
                ON CONFLICT (month) DO NOTHING
                "#,
            )
            .bind(&entry.month)
            .bind(entry.revenue)
            .execute(&mut *tx)
            .await?;
            report.revenue += result.rows_affected();
        }

        tx.commit().await?;
        Ok(report)
    }
}

async fn create_tables(conn: &mut PgConnection) -> anyhow::Result<()> {
    sqlx::query(r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#)
        .execute(&mut *conn)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS invoices (
            id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
            customer_id UUID NOT NULL,
            amount INT NOT NULL,
            status VARCHAR(255) NOT NULL,
            date DATE NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            image_url VARCHAR(255) NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS revenue (
            month VARCHAR(4) NOT NULL UNIQUE,
            revenue INT NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}

#[derive(FromRow)]
struct UserRecord {
    id: Uuid,
    name: String,
    email: String,
    password: String,
}

impl From<UserRecord> for User {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            password_hash: value.password,
        }
    }
}
