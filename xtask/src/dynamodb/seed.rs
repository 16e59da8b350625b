//! Seed command implementation.

use super::error::{DynamodbError, Result};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use moviecrew_core::crew::RawCrewRecord;
use std::collections::HashMap;

/// Convert a crew record to a DynamoDB item.
fn record_to_item(record: &RawCrewRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        "movieId".to_string(),
        AttributeValue::N(record.movie_id.to_string()),
    );
    item.insert(
        "crewRole".to_string(),
        AttributeValue::S(record.crew_role.clone()),
    );
    item.insert("names".to_string(), AttributeValue::S(record.names.clone()));

    item
}

/// Insert records into DynamoDB.
pub async fn seed_records(
    client: &Client,
    table_name: &str,
    records: &[RawCrewRecord],
) -> Result<u32> {
    let mut inserted = 0;

    // Use batch write for efficiency (25 items per batch max)
    for chunk in records.chunks(25) {
        let write_requests: Vec<_> = chunk
            .iter()
            .map(|record| {
                aws_sdk_dynamodb::types::WriteRequest::builder()
                    .put_request(
                        aws_sdk_dynamodb::types::PutRequest::builder()
                            .set_item(Some(record_to_item(record)))
                            .build()
                            .expect("Failed to build PutRequest"),
                    )
                    .build()
            })
            .collect();

        client
            .batch_write_item()
            .request_items(table_name, write_requests)
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

        inserted += chunk.len() as u32;
    }

    Ok(inserted)
}
