//! Crew lookup handlers.
//!
//! Thin axum wrappers over the lookup pipeline in `moviecrew_core::crew`;
//! all decision-making lives there. These handlers only extract request
//! parts and shape the three response bodies.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use moviecrew_core::crew::{lookup_crew, CrewLookupRequest, LookupError, ValidationError};
use moviecrew_core::storage::repository_error_to_public_message;

use crate::state::AppState;

/// Query parameters for the crew lookup endpoint.
#[derive(Debug, Deserialize)]
pub struct CrewQuery {
    /// Case-insensitive substring matched against individual names.
    pub name: Option<String>,
}

/// Look up crew members by role (GET /api/movies/{movie_id}/crew/{role}).
pub async fn get_crew_by_role(
    State(state): State<AppState>,
    Path((movie_id, role)): Path<(String, String)>,
    Query(query): Query<CrewQuery>,
) -> Response {
    let request = CrewLookupRequest::new(role, movie_id).with_name_filter(query.name);

    match lookup_crew(state.crew_repo.as_ref(), &request).await {
        Ok(data) => {
            tracing::debug!(records = data.len(), "Crew lookup succeeded");
            (StatusCode::OK, Json(serde_json::json!({ "data": data }))).into_response()
        }
        Err(LookupError::Validation(err)) => {
            tracing::warn!(error = %err, "Rejected crew lookup request");
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "message": err.to_string() })),
            )
                .into_response()
        }
        Err(LookupError::Store(err)) => {
            tracing::error!(error = %err, "Crew store query failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": repository_error_to_public_message(&err)
                })),
            )
                .into_response()
        }
    }
}

/// Role path segment absent (GET /api/movies/{movie_id}/crew).
///
/// The gateway this service fronts can route requests without a role;
/// they get the same 400 as any other missing required parameter.
pub async fn get_crew_missing_role(Path(_movie_id): Path<String>) -> Response {
    tracing::warn!("Rejected crew lookup request with no role");
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({
            "message": ValidationError::MissingParameters.to_string()
        })),
    )
        .into_response()
}
