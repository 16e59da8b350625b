//! DynamoDB repository implementation.
//!
//! Implements `CrewRepository` from `moviecrew_core::storage` against a
//! table keyed by `movieId` (partition, N) and `crewRole` (sort, S).

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use moviecrew_core::crew::RawCrewRecord;
use moviecrew_core::storage::{CrewRepository, Result};

use super::conversions::item_to_crew_record;
use super::error::map_query_error;

/// DynamoDB-based crew repository.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl CrewRepository for DynamoDbRepository {
    async fn get_crew(&self, movie_id: i64, role: &str) -> Result<Vec<RawCrewRecord>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("movieId = :m AND crewRole = :r")
            .expression_attribute_values(":m", AttributeValue::N(movie_id.to_string()))
            .expression_attribute_values(":r", AttributeValue::S(role.to_string()))
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_crew_record).collect()
    }
}
