use std::env;

/// Application configuration loaded from environment variables.
///
/// The AWS fields are only read when the `dynamodb` storage backend is
/// enabled; the in-memory backend ignores them.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding crew records (default: "movie-crew")
    #[allow(dead_code)]
    pub table_name: String,
    /// Custom endpoint URL (for local DynamoDB).
    #[allow(dead_code)]
    pub endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    #[allow(dead_code)]
    pub region: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MOVIE_CREW_TABLE_NAME` - crew table name (default: "movie-crew")
    /// - `AWS_ENDPOINT_URL` - local DynamoDB endpoint (optional)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("MOVIE_CREW_TABLE_NAME")
                .unwrap_or_else(|_| "movie-crew".to_string()),
            endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
