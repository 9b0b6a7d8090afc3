use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::usecases::{
    authenticate_user::AuthenticateUserUseCase, demo_login::DemoLoginUseCase,
    register_user::RegisterUserUseCase, seed_database::SeedDatabaseUseCase,
};
use crate::presentation::http::endpoints::{
    auth::AuthEndpoints, health::HealthEndpoints, seed::SeedEndpoints,
};

#[derive(Clone)]
pub struct ApiState {
    pub authenticate_usecase: Arc<AuthenticateUserUseCase>,
    pub demo_login_usecase: Arc<DemoLoginUseCase>,
    pub register_usecase: Arc<RegisterUserUseCase>,
    pub seed_usecase: Arc<SeedDatabaseUseCase>,
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Auth,
    Seed,
}

pub fn routes(state: Arc<ApiState>) -> (HealthEndpoints, AuthEndpoints, SeedEndpoints) {
    (
        HealthEndpoints,
        AuthEndpoints::new(state.clone()),
        SeedEndpoints::new(state),
    )
}
