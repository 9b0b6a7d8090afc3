use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::presentation::http::{
    endpoints::root::{ApiState, EndpointsTags},
    responses::{ErrorResponseDto, MessageResponseDto, SeedResponse},
};

#[derive(Clone)]
pub struct SeedEndpoints {
    state: Arc<ApiState>,
}

impl SeedEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl SeedEndpoints {
    /// Creates the schema if needed and installs the demo dataset. Repeat
    /// calls are no-ops for rows that already landed.
    #[oai(path = "/seed", method = "get", tag = EndpointsTags::Seed)]
    pub async fn seed(&self) -> SeedResponse {
        match self.state.seed_usecase.execute().await {
            Ok(response) => SeedResponse::Ok(Json(MessageResponseDto {
                message: response.message,
            })),
            Err(err) => {
                tracing::error!(error = ?err, "seeding failed");
                SeedResponse::Internal(Json(ErrorResponseDto {
                    error: err.to_string(),
                }))
            }
        }
    }
}
