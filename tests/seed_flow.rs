//! Seeding semantics against the in-memory repositories: idempotent re-runs,
//! hashed passwords, and all-or-nothing batches.

use dashboard::application::services::password::PasswordHasher;
use dashboard::application::usecases::seed_database::{DATABASE_SEEDED, SeedDatabaseUseCase};
use dashboard::domain::models::{Revenue, User};
use dashboard::domain::repositories::{SeedRepository, UserRepository};
use dashboard::domain::seed::{SeedBatch, SeedData};
use dashboard::infrastructure::repositories::in_memory::{
    InMemoryDatabase, InMemorySeedRepository, InMemoryUserRepository,
};
use uuid::Uuid;

fn seed_usecase(db: &InMemoryDatabase) -> SeedDatabaseUseCase {
    SeedDatabaseUseCase::new(
        InMemorySeedRepository::new(db.clone()),
        PasswordHasher::default(),
        SeedData::placeholder(),
    )
}

#[tokio::test]
async fn first_run_installs_the_whole_dataset() {
    let db = InMemoryDatabase::new();

    let response = seed_usecase(&db).execute().await.unwrap();
    assert_eq!(response.message, DATABASE_SEEDED);

    let data = SeedData::placeholder();
    let counts = db.table_counts().await;
    assert_eq!(counts.users, data.users.len());
    assert_eq!(counts.customers, data.customers.len());
    assert_eq!(counts.invoices, data.invoices.len());
    assert_eq!(counts.revenue, data.revenue.len());
}

#[tokio::test]
async fn second_run_changes_nothing() {
    let db = InMemoryDatabase::new();
    let usecase = seed_usecase(&db);

    usecase.execute().await.unwrap();
    let before = db.table_counts().await;

    let response = usecase.execute().await.unwrap();
    assert_eq!(response.message, DATABASE_SEEDED);
    assert_eq!(db.table_counts().await, before);
}

#[tokio::test]
async fn repeated_batch_reports_zero_inserts() {
    let db = InMemoryDatabase::new();
    let repo = InMemorySeedRepository::new(db);

    let batch = SeedBatch {
        users: vec![user(
            "4f1c8a02-5b3d-4e67-9a28-c61d90f7e543",
            "Admin",
            "admin@example.com",
        )],
        customers: Vec::new(),
        invoices: Vec::new(),
        revenue: Vec::new(),
    };

    let first = repo.seed(&batch).await.unwrap();
    assert_eq!(first.users, 1);
    assert_eq!(first.total(), 1);

    let second = repo.seed(&batch).await.unwrap();
    assert_eq!(second.total(), 0);
}

#[tokio::test]
async fn seeded_accounts_hold_hashes_not_passwords() {
    let db = InMemoryDatabase::new();
    seed_usecase(&db).execute().await.unwrap();

    let hasher = PasswordHasher::default();
    let user_repo = InMemoryUserRepository::new(db);

    for (email, password) in [("admin@example.com", "123456"), ("demo@example.com", "demo1234")] {
        let stored = user_repo
            .find_by_email(email)
            .await
            .unwrap()
            .expect("seeded account should be present");

        assert_ne!(stored.password_hash, password);
        assert!(hasher.verify(password, &stored.password_hash).await.unwrap());
    }
}

#[tokio::test]
async fn conflicting_batch_leaves_tables_untouched() {
    let db = InMemoryDatabase::new();
    seed_usecase(&db).execute().await.unwrap();
    let before = db.table_counts().await;

    // New id, already-taken email: the batch must fail without landing
    // anything, the later rows included.
    let batch = SeedBatch {
        users: vec![user(
            "0b6e2d94-7a1f-4c58-8e03-d5f49a21c768",
            "Impostor",
            "admin@example.com",
        )],
        customers: Vec::new(),
        invoices: Vec::new(),
        revenue: vec![Revenue {
            month: "Foo".to_string(),
            revenue: 1,
        }],
    };

    let repo = InMemorySeedRepository::new(db.clone());
    assert!(repo.seed(&batch).await.is_err());
    assert_eq!(db.table_counts().await, before);
}

#[tokio::test]
async fn conflicting_batch_on_a_fresh_database_keeps_it_empty() {
    let db = InMemoryDatabase::new();

    let batch = SeedBatch {
        users: vec![
            user("91d34c7f-e082-4b65-a9f1-37c8b05d62e4", "Twin", "twin@example.com"),
            user("d27a09b5-1f83-4e46-b6c2-84e0f9a3d715", "Other Twin", "twin@example.com"),
        ],
        customers: Vec::new(),
        invoices: Vec::new(),
        revenue: vec![Revenue {
            month: "Foo".to_string(),
            revenue: 1,
        }],
    };

    let repo = InMemorySeedRepository::new(db.clone());
    assert!(repo.seed(&batch).await.is_err());

    let counts = db.table_counts().await;
    assert_eq!(counts.users, 0);
    assert_eq!(counts.revenue, 0);
}

fn user(id: &str, name: &str, email: &str) -> User {
    User {
        id: Uuid::parse_str(id).unwrap(),
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "$2b$10$not.a.real.hash.but.close.enough".to_string(),
    }
}
