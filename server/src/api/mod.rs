pub mod health;
pub mod recommendations;
pub mod suggestions;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Returns the router for all endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/recommendations",
            post(recommendations::get_recommendations),
        )
        .route("/suggestions", post(suggestions::get_suggestions))
        .route("/health", get(health::health))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        recommendations::get_recommendations,
        suggestions::get_suggestions,
    ),
    components(schemas(
        ErrorResponse,
        health::HealthResponse,
        recommendations::RecommendationsRequest,
        recommendations::RecommendationResponse,
        suggestions::SuggestionsRequest,
    ))
)]
struct ApiDoc;

/// Generate the OpenAPI spec for all endpoints
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
