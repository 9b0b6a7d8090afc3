use poem_openapi::{OpenApi, payload::PlainText};

use crate::presentation::http::endpoints::root::EndpointsTags;

#[derive(Clone)]
pub struct HealthEndpoints;

#[OpenApi]
impl HealthEndpoints {
    #[oai(path = "/health", method = "get", tag = EndpointsTags::Health)]
    pub async fn health(&self) -> PlainText<&'static str> {
        PlainText("OK")
    }
}
