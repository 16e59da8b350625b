use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        crew::{get_crew_by_role, get_crew_missing_role},
        health::livez,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/movies/{movie_id}/crew/{role}", get(get_crew_by_role))
        // The gateway can route a request whose role segment is absent;
        // that still has to answer with the required-parameters body.
        .route("/movies/{movie_id}/crew", get(get_crew_missing_role))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use moviecrew_core::crew::RawCrewRecord;
    use moviecrew_core::storage::{CrewRepository, RepositoryError, Result};

    use crate::storage::InMemoryRepository;

    /// Repository whose every query fails, for the 500 path.
    struct FailingRepository;

    #[async_trait]
    impl CrewRepository for FailingRepository {
        async fn get_crew(&self, _movie_id: i64, _role: &str) -> Result<Vec<RawCrewRecord>> {
            Err(RepositoryError::QueryFailed("timeout".to_string()))
        }
    }

    async fn seeded_state() -> AppState {
        let repo = InMemoryRepository::new();
        repo.insert_record(RawCrewRecord::new(550, "director", "David Fincher"))
            .await;
        repo.insert_record(RawCrewRecord::new(
            550,
            "actor",
            "Brad Pitt, Edward Norton",
        ))
        .await;
        AppState::with_repository(Arc::new(repo))
    }

    async fn get_json(
        app: Router,
        uri: &str,
    ) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_get_crew_without_filter() {
        let app = create_app(seeded_state().await);

        let (status, json) = get_json(app, "/api/movies/550/crew/director").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({
                "data": [{
                    "movieId": 550,
                    "crewRole": "director",
                    "names": "David Fincher",
                }]
            })
        );
    }

    #[tokio::test]
    async fn test_get_crew_with_name_filter() {
        let app = create_app(seeded_state().await);

        let (status, json) = get_json(app, "/api/movies/550/crew/actor?name=brad").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({
                "data": [{
                    "movieId": 550,
                    "crewRole": "actor",
                    "names": ["Brad Pitt"],
                }]
            })
        );
    }

    #[tokio::test]
    async fn test_name_filter_dropping_every_record_yields_empty_data() {
        let app = create_app(seeded_state().await);

        let (status, json) = get_json(app, "/api/movies/550/crew/actor?name=zzz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "data": [] }));
    }

    #[tokio::test]
    async fn test_empty_name_filter_behaves_like_no_filter() {
        let app = create_app(seeded_state().await);

        let (status, json) = get_json(app, "/api/movies/550/crew/actor?name=").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["data"][0]["names"],
            serde_json::json!("Brad Pitt, Edward Norton")
        );
    }

    #[tokio::test]
    async fn test_unknown_movie_yields_empty_data() {
        let app = create_app(seeded_state().await);

        let (status, json) = get_json(app, "/api/movies/999/crew/director").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "data": [] }));
    }

    #[tokio::test]
    async fn test_missing_role_is_a_400() {
        let app = create_app(seeded_state().await);

        let (status, json) = get_json(app, "/api/movies/550/crew").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            serde_json::json!({ "message": "Role and Movie ID are required." })
        );
    }

    #[tokio::test]
    async fn test_non_numeric_movie_id_is_a_400() {
        let app = create_app(seeded_state().await);

        let (status, json) = get_json(app, "/api/movies/fight-club/crew/director").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            serde_json::json!({ "message": "Movie ID must be a number." })
        );
    }

    #[tokio::test]
    async fn test_movie_id_numeric_prefix_is_accepted() {
        let app = create_app(seeded_state().await);

        let (status, json) = get_json(app, "/api/movies/550abc/crew/director").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"][0]["names"], serde_json::json!("David Fincher"));
    }

    #[tokio::test]
    async fn test_store_failure_is_a_500_with_the_store_message() {
        let state = AppState::with_repository(Arc::new(FailingRepository));
        let app = create_app(state);

        let (status, json) = get_json(app, "/api/movies/550/crew/director").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": "timeout" }));
    }

    #[tokio::test]
    async fn test_repeated_requests_yield_identical_responses() {
        let app = create_app(seeded_state().await);

        let (first_status, first_json) =
            get_json(app.clone(), "/api/movies/550/crew/actor?name=ed").await;
        let (second_status, second_json) =
            get_json(app, "/api/movies/550/crew/actor?name=ed").await;

        assert_eq!(first_status, second_status);
        assert_eq!(first_json, second_json);
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(seeded_state().await);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/livez")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
