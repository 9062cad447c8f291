use crate::api::ErrorResponse;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use toolscout_core::{recommend, Category, Pricing, Recommendation, RecommendError, RecommendationId};
use utoipa::ToSchema;

/// Request body for software recommendations
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecommendationsRequest {
    /// Free-text description of the task the user wants software for
    pub task: Option<String>,
}

/// A software recommendation as returned over HTTP (mirrors
/// toolscout_core::Recommendation, camelCase wire format)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    /// Integer index or string slug, unique within the batch
    #[schema(value_type = String)]
    pub id: RecommendationId,
    pub name: String,
    #[schema(value_type = String)]
    pub category: Category,
    pub description: String,
    /// Full URL starting with http(s), or "N/A"
    pub official_website: String,
    #[schema(value_type = String)]
    pub pricing: Pricing,
    pub price_range: String,
    pub platforms: Vec<String>,
    pub features: Vec<String>,
    pub best_for: Vec<String>,
    pub alternatives: Vec<String>,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(record: Recommendation) -> Self {
        RecommendationResponse {
            id: record.id,
            name: record.name,
            category: record.category,
            description: record.description,
            official_website: record.official_website,
            pricing: record.pricing,
            price_range: record.price_range,
            platforms: record.platforms,
            features: record.features,
            best_for: record.best_for,
            alternatives: record.alternatives,
        }
    }
}

#[utoipa::path(
    post,
    path = "/recommendations",
    tag = "recommendations",
    request_body = RecommendationsRequest,
    responses(
        (status = 200, description = "Software recommendations for the task", body = Vec<RecommendationResponse>),
        (status = 400, description = "Missing or blank task description", body = ErrorResponse),
        (status = 500, description = "Completion or extraction failure", body = ErrorResponse)
    )
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationsRequest>,
) -> impl IntoResponse {
    let task = request.task.unwrap_or_default();

    match recommend(state.provider.as_ref(), &task, state.exchange_rate).await {
        Ok(records) => {
            let body: Vec<RecommendationResponse> = records.into_iter().map(Into::into).collect();
            Json(body).into_response()
        }
        Err(RecommendError::EmptyTask) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Task description is required.".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to get recommendations: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to get recommendations".to_string(),
                }),
            )
                .into_response()
        }
    }
}
