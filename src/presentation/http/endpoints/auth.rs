use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::{
    application::usecases::{
        authenticate_user::AuthRequest, demo_login::DemoLoginRequest, register_user::RegisterRequest,
    },
    domain::errors::DomainError,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        requests::{DemoLoginRequestDto, LoginRequestDto, SignupRequestDto},
        responses::{
            DemoLoginResponse, ErrorResponseDto, LoginResponseDto, MessageResponseDto,
            SignupResponse, UNKNOWN_ERROR,
        },
    },
};

#[derive(Clone)]
pub struct AuthEndpoints {
    state: Arc<ApiState>,
}

impl AuthEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl AuthEndpoints {
    /// Sign-in verdicts always come back as a 200; `error` carries the
    /// message to show when the attempt was turned down.
    #[oai(path = "/auth/login", method = "post", tag = EndpointsTags::Auth)]
    pub async fn login(&self, request: Json<LoginRequestDto>) -> poem::Result<Json<LoginResponseDto>> {
        let payload = AuthRequest {
            email: request.email.0.clone(),
            password: request.password.clone(),
        };

        let response = self.state.authenticate_usecase.execute(payload).await;

        Ok(Json(LoginResponseDto {
            success: response.error.is_none(),
            error: response.error,
        }))
    }

    #[oai(path = "/auth/signup", method = "post", tag = EndpointsTags::Auth)]
    pub async fn signup(&self, request: Json<SignupRequestDto>) -> SignupResponse {
        let payload = RegisterRequest {
            email: request.email.0.clone(),
            password: request.password.clone(),
            name: request.name.clone(),
        };

        match self.state.register_usecase.execute(payload).await {
            Ok(response) => SignupResponse::Ok(Json(MessageResponseDto {
                message: response.message,
            })),
            Err(err) => match &err {
                DomainError::UserAlreadyExists => SignupResponse::Conflict(Json(ErrorResponseDto {
                    error: err.to_string(),
                })),
                _ => {
                    tracing::error!(error = ?err, "signup failed");
                    SignupResponse::Internal(Json(ErrorResponseDto {
                        error: UNKNOWN_ERROR.to_string(),
                    }))
                }
            },
        }
    }

    #[oai(path = "/auth/demo-login", method = "post", tag = EndpointsTags::Auth)]
    pub async fn demo_login(&self, request: Json<DemoLoginRequestDto>) -> DemoLoginResponse {
        let payload = DemoLoginRequest {
            email: request.email.0.clone(),
            password: request.password.clone(),
        };

        match self.state.demo_login_usecase.execute(payload).await {
            Ok(response) => DemoLoginResponse::Ok(Json(MessageResponseDto {
                message: response.message,
            })),
            Err(err) => DemoLoginResponse::Rejected(Json(ErrorResponseDto {
                error: err.to_string(),
            })),
        }
    }
}
