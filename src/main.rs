use std::io::Error;
use std::sync::Arc;

use poem::{Route, Server, listener::TcpListener};
use poem_openapi::OpenApiService;
use sqlx::postgres::PgPoolOptions;
use tokio::main;

use dashboard::{
    application::{
        services::password::PasswordHasher,
        usecases::{
            authenticate_user::AuthenticateUserUseCase, demo_login::DemoLoginUseCase,
            register_user::RegisterUserUseCase, seed_database::SeedDatabaseUseCase,
        },
    },
    config::Config,
    domain::seed::SeedData,
    infrastructure::{
        auth::DatabaseCredentialProvider,
        repositories::postgres::{PostgresSeedRepository, PostgresUserRepository},
    },
    presentation::http::endpoints::root::{ApiState, routes},
};

#[main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::try_parse().map_err(Error::other)?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .map_err(Error::other)?;

    let user_repo = PostgresUserRepository::new(pool.clone());
    let seed_repo = PostgresSeedRepository::new(pool);
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

    let server_url = format!("{}://{}:{}", config.scheme, config.host, config.port);

    tracing::info!("Starting server at {}", server_url);

    let api_service = OpenApiService::new(routes(state), "Dashboard API", "0.1.0")
        .server(format!("{}/api", server_url));
    let ui = api_service.swagger_ui();
    let app = Route::new().nest("/api", api_service).nest("/", ui);

    Server::new(TcpListener::bind(format!("localhost:{}", config.port)))
        .run(app)
        .await
}
