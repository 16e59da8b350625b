use async_trait::async_trait;

use crate::crew::RawCrewRecord;

use super::Result;

/// Repository for movie crew lookups.
#[async_trait]
pub trait CrewRepository: Send + Sync {
    /// Gets all crew records matching a movie id and role exactly.
    ///
    /// This is a single-partition, sort-key equality query against the
    /// backing range index. The index keys at most one record per
    /// `(movie_id, role)` pair, but callers must treat the result as a
    /// sequence and must not reorder it.
    async fn get_crew(&self, movie_id: i64, role: &str) -> Result<Vec<RawCrewRecord>>;
}
