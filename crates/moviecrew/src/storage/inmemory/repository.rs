//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use moviecrew_core::crew::RawCrewRecord;
use moviecrew_core::storage::{CrewRepository, Result};

/// In-memory storage backend for development and testing.
///
/// Keys records by `(movie_id, crew_role)` in a HashMap wrapped in
/// `Arc<RwLock<_>>` for thread-safe access. Data is not persisted and is
/// lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<RwLock<HashMap<(i64, String), RawCrewRecord>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a crew record, replacing any existing record with the same
    /// `(movie_id, crew_role)` key.
    pub async fn insert_record(&self, record: RawCrewRecord) {
        let mut records = self.records.write().await;
        records.insert((record.movie_id, record.crew_role.clone()), record);
    }
}

#[async_trait]
impl CrewRepository for InMemoryRepository {
    async fn get_crew(&self, movie_id: i64, role: &str) -> Result<Vec<RawCrewRecord>> {
        let records = self.records.read().await;
        Ok(records
            .get(&(movie_id, role.to_string()))
            .cloned()
            .into_iter()
            .collect())
    }
}
