//! Table configuration types (Functional Core - pure data).

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: Option<KeyAttribute>,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
    Number,
}

impl AttributeType {
    /// Returns the single-letter DynamoDB type code.
    pub fn code(&self) -> &'static str {
        match self {
            AttributeType::String => "S",
            AttributeType::Number => "N",
        }
    }
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }
}

/// Returns the canonical table configuration for the crew table.
/// This is a pure function - no I/O.
pub fn movie_crew_table_config() -> TableConfig {
    TableConfig {
        table_name: "movie-crew".to_string(),
        partition_key: KeyAttribute {
            name: "movieId".to_string(),
            attribute_type: AttributeType::Number,
        },
        sort_key: Some(KeyAttribute {
            name: "crewRole".to_string(),
            attribute_type: AttributeType::String,
        }),
        billing_mode: BillingMode::PayPerRequest,
    }
}
