use poem_openapi::{ApiResponse, Object, payload::Json};

/// Funnel text for failures whose detail stays in the logs.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

#[derive(Object)]
pub struct LoginResponseDto {
    pub success: bool,
    pub error: Option<String>,
}

#[derive(Object)]
pub struct MessageResponseDto {
    pub message: String,
}

#[derive(Object)]
pub struct ErrorResponseDto {
    pub error: String,
}

#[derive(ApiResponse)]
pub enum SignupResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponseDto>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponseDto>),
    #[oai(status = 500)]
    Internal(Json<ErrorResponseDto>),
}

#[derive(ApiResponse)]
pub enum DemoLoginResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponseDto>),
    #[oai(status = 401)]
    Rejected(Json<ErrorResponseDto>),
}

#[derive(ApiResponse)]
pub enum SeedResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponseDto>),
    #[oai(status = 500)]
    Internal(Json<ErrorResponseDto>),
}
