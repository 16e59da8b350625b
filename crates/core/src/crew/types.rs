use serde::{Deserialize, Serialize};

/// One row as stored: every person holding `crew_role` on `movie_id`,
/// packed into a single comma-separated `names` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCrewRecord {
    /// Partition key of the backing range index.
    pub movie_id: i64,
    /// Sort key, e.g. "director" or "actor".
    pub crew_role: String,
    pub names: String,
}

impl RawCrewRecord {
    /// Creates a new crew record.
    pub fn new(movie_id: i64, crew_role: impl Into<String>, names: impl Into<String>) -> Self {
        Self {
            movie_id,
            crew_role: crew_role.into(),
            names: names.into(),
        }
    }
}

/// A crew record after name filtering: `names` holds only the trimmed
/// entries that matched the filter substring.
///
/// Kept as a distinct type from [`RawCrewRecord`] so the packed-string and
/// filtered-list shapes can never be confused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredCrewRecord {
    pub movie_id: i64,
    pub crew_role: String,
    pub names: Vec<String>,
}

/// The `data` payload of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CrewData {
    /// Records exactly as the store returned them, unmodified and unreordered.
    Raw(Vec<RawCrewRecord>),
    /// Records reduced to the name entries matching a filter.
    Filtered(Vec<FilteredCrewRecord>),
}

impl CrewData {
    /// Number of records in the payload.
    pub fn len(&self) -> usize {
        match self {
            CrewData::Raw(records) => records.len(),
            CrewData::Filtered(records) => records.len(),
        }
    }

    /// Returns true if the payload holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_serializes_camel_case() {
        let record = RawCrewRecord::new(550, "director", "David Fincher");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "movieId": 550,
                "crewRole": "director",
                "names": "David Fincher",
            })
        );
    }

    #[test]
    fn test_filtered_record_serializes_names_as_list() {
        let record = FilteredCrewRecord {
            movie_id: 550,
            crew_role: "actor".to_string(),
            names: vec!["Brad Pitt".to_string()],
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "movieId": 550,
                "crewRole": "actor",
                "names": ["Brad Pitt"],
            })
        );
    }

    #[test]
    fn test_crew_data_serializes_untagged() {
        let raw = CrewData::Raw(vec![RawCrewRecord::new(550, "director", "David Fincher")]);
        let json = serde_json::to_value(&raw).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["names"], "David Fincher");

        let empty = CrewData::Filtered(Vec::new());
        assert_eq!(serde_json::to_value(&empty).unwrap(), serde_json::json!([]));
    }
}
