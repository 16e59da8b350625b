//! Application state with repository-based storage.
//!
//! The crew repository is an explicitly constructed, injected dependency:
//! built once at startup by a per-backend factory, then shared read-only
//! across request handlers. Tests substitute their own repository via
//! [`AppState::with_repository`].

use std::sync::Arc;

use moviecrew_core::storage::CrewRepository;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler; the repository handle is the only
/// shared resource and needs no synchronization.
#[derive(Clone)]
pub struct AppState {
    /// Crew repository backing the lookup endpoint.
    pub crew_repo: Arc<dyn CrewRepository>,
}

impl AppState {
    /// Creates an AppState around an already-constructed repository.
    pub fn with_repository(crew_repo: Arc<dyn CrewRepository>) -> Self {
        Self { crew_repo }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;
    use moviecrew_core::crew::seed_crew_records;

    impl AppState {
        /// Creates AppState with seeded in-memory storage.
        /// Useful for development and testing without external dependencies.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            let repo = InMemoryRepository::new();
            for record in seed_crew_records() {
                repo.insert_record(record).await;
            }

            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState backed by DynamoDB.
        ///
        /// The client is constructed once here and reused across requests;
        /// it carries read-only configuration (region, endpoint) only.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(config.region.clone()));

            if let Some(endpoint) = &config.endpoint_url {
                loader = loader.endpoint_url(endpoint);
            }

            let sdk_config = loader.load().await;
            let client = aws_sdk_dynamodb::Client::new(&sdk_config);
            let repo = DynamoDbRepository::new(client, config.table_name.clone());

            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}
