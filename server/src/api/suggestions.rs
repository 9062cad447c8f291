use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for task-description suggestions
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SuggestionsRequest {
    /// Partial task description typed so far
    #[serde(default)]
    pub input: String,
}

/// Fail-soft by design: blank input and upstream failures both come back as
/// an empty list, so the suggestion box never surfaces an error.
#[utoipa::path(
    post,
    path = "/suggestions",
    tag = "suggestions",
    request_body = SuggestionsRequest,
    responses(
        (status = 200, description = "Completion suggestions for the partial input", body = Vec<String>)
    )
)]
pub async fn get_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionsRequest>,
) -> impl IntoResponse {
    let suggestions = toolscout_core::get_suggestions(state.provider.as_ref(), &request.input).await;
    Json(suggestions)
}
