//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting DynamoDB AttributeValue maps to domain
//! types. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use moviecrew_core::crew::RawCrewRecord;
use moviecrew_core::storage::RepositoryError;

/// Convert a DynamoDB item to a crew record.
pub fn item_to_crew_record(
    item: &HashMap<String, AttributeValue>,
) -> Result<RawCrewRecord, RepositoryError> {
    Ok(RawCrewRecord {
        movie_id: get_number(item, "movieId")?,
        crew_role: get_string(item, "crewRole")?,
        names: get_string(item, "names")?,
    })
}

fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or_else(|| RepositoryError::Serialization(format!("Missing or invalid field: {key}")))
}

fn get_number(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i64, RepositoryError> {
    item.get(key)
        .and_then(|value| value.as_n().ok())
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| RepositoryError::Serialization(format!("Missing or invalid field: {key}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crew_item() -> HashMap<String, AttributeValue> {
        let mut item = HashMap::new();
        item.insert("movieId".to_string(), AttributeValue::N("550".to_string()));
        item.insert(
            "crewRole".to_string(),
            AttributeValue::S("director".to_string()),
        );
        item.insert(
            "names".to_string(),
            AttributeValue::S("David Fincher".to_string()),
        );
        item
    }

    #[test]
    fn test_item_to_crew_record() {
        let record = item_to_crew_record(&crew_item()).unwrap();
        assert_eq!(
            record,
            RawCrewRecord::new(550, "director", "David Fincher")
        );
    }

    #[test]
    fn test_missing_names_is_a_serialization_error() {
        let mut item = crew_item();
        item.remove("names");

        let error = item_to_crew_record(&item).unwrap_err();
        assert_eq!(
            error,
            RepositoryError::Serialization("Missing or invalid field: names".to_string())
        );
    }

    #[test]
    fn test_wrong_attribute_type_is_a_serialization_error() {
        let mut item = crew_item();
        item.insert("movieId".to_string(), AttributeValue::S("550".to_string()));

        assert!(item_to_crew_record(&item).is_err());
    }
}
