//! Full HTTP round trips through the OpenAPI service, backed by the
//! in-memory repositories.

use std::sync::Arc;

use poem::{Route, http::StatusCode, test::TestClient};
use poem_openapi::OpenApiService;
use serde_json::json;

use dashboard::application::services::password::PasswordHasher;
use dashboard::application::usecases::{
    authenticate_user::AuthenticateUserUseCase, demo_login::DemoLoginUseCase,
    register_user::RegisterUserUseCase, seed_database::SeedDatabaseUseCase,
};
use dashboard::domain::seed::SeedData;
use dashboard::infrastructure::auth::DatabaseCredentialProvider;
use dashboard::infrastructure::repositories::in_memory::{
    InMemoryDatabase, InMemorySeedRepository, InMemoryUserRepository,
};
use dashboard::presentation::http::endpoints::root::{ApiState, routes};

fn test_app() -> (TestClient<Route>, InMemoryDatabase) {
    let db = InMemoryDatabase::new();
    let user_repo = InMemoryUserRepository::new(db.clone());
    let seed_repo = InMemorySeedRepository::new(db.clone());
    let hasher = PasswordHasher::default();
    let provider = DatabaseCredentialProvider::new(user_repo.clone(), hasher);

    let state = Arc::new(ApiState {
        authenticate_usecase: Arc::new(AuthenticateUserUseCase::new(provider)),
        demo_login_usecase: Arc::new(DemoLoginUseCase::new()),
        register_usecase: Arc::new(RegisterUserUseCase::new(user_repo, hasher)),
        seed_usecase: Arc::new(SeedDatabaseUseCase::new(
            seed_repo,
            hasher,
            SeedData::placeholder(),
        )),
    });

    let api_service = OpenApiService::new(routes(state), "Dashboard API", "0.1.0");
    let app = Route::new().nest("/api", api_service);

    (TestClient::new(app), db)
}

#[tokio::test]
async fn health_endpoint_answers_ok() {
    let (cli, _db) = test_app();

    let resp = cli.get("/api/health").send().await;

    resp.assert_status_is_ok();
    resp.assert_text("OK").await;
}

#[tokio::test]
async fn seed_endpoint_installs_data_and_repeats_cleanly() {
    let (cli, db) = test_app();
    let data = SeedData::placeholder();

    let resp = cli.get("/api/seed").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    body.value()
        .object()
        .get("message")
        .assert_string("Database seeded successfully");

    let counts = db.table_counts().await;
    assert_eq!(counts.users, data.users.len());
    assert_eq!(counts.customers, data.customers.len());
    assert_eq!(counts.invoices, data.invoices.len());
    assert_eq!(counts.revenue, data.revenue.len());

    let resp = cli.get("/api/seed").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    body.value()
        .object()
        .get("message")
        .assert_string("Database seeded successfully");

    assert_eq!(db.table_counts().await, counts);
}

#[tokio::test]
async fn signup_conflict_surfaces_as_409() {
    let (cli, _db) = test_app();
    let payload = json!({
        "email": "admin@example.com",
        "password": "123456",
        "name": "Admin",
    });

    let resp = cli.post("/api/auth/signup").body_json(&payload).send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    body.value()
        .object()
        .get("message")
        .assert_string("User registered successfully");

    let resp = cli.post("/api/auth/signup").body_json(&payload).send().await;
    resp.assert_status(StatusCode::CONFLICT);
    let body = resp.json().await;
    body.value()
        .object()
        .get("error")
        .assert_string("User already exists");
}

#[tokio::test]
async fn login_reports_the_verdict_in_the_body() {
    let (cli, _db) = test_app();

    let resp = cli
        .post("/api/auth/signup")
        .body_json(&json!({
            "email": "demo@example.com",
            "password": "demo1234",
            "name": "Demo User",
        }))
        .send()
        .await;
    resp.assert_status_is_ok();

    let resp = cli
        .post("/api/auth/login")
        .body_json(&json!({ "email": "demo@example.com", "password": "demo1234" }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    let verdict = body.value().object();
    verdict.get("success").assert_bool(true);
    verdict.get("error").assert_null();

    let resp = cli
        .post("/api/auth/login")
        .body_json(&json!({ "email": "demo@example.com", "password": "wrong-password" }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    let verdict = body.value().object();
    verdict.get("success").assert_bool(false);
    verdict.get("error").assert_string("Invalid credentials.");
}

#[tokio::test]
async fn demo_login_round_trip() {
    let (cli, _db) = test_app();

    let resp = cli
        .post("/api/auth/demo-login")
        .body_json(&json!({
            "email": "user@example.com",
            "password": "user@example.com",
        }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    body.value()
        .object()
        .get("message")
        .assert_string("Login successful");

    let resp = cli
        .post("/api/auth/demo-login")
        .body_json(&json!({
            "email": "user@example.com",
            "password": "different",
        }))
        .send()
        .await;
    resp.assert_status(StatusCode::UNAUTHORIZED);
    let body = resp.json().await;
    body.value()
        .object()
        .get("error")
        .assert_string("Email and password must match.");
}

#[tokio::test]
async fn malformed_email_is_rejected_before_the_handler() {
    let (cli, _db) = test_app();

    let resp = cli
        .post("/api/auth/login")
        .body_json(&json!({ "email": "not-an-email", "password": "123456" }))
        .send()
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
}
