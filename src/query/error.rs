//! Query error types

use thiserror::Error;

/// Errors that can occur while fetching from the GraphQL backend
///
/// Variants carry strings rather than transport errors so results can be
/// cloned into reactive state on the page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    /// Non-success HTTP status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The backend answered with GraphQL errors
    #[error("{}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(String),

    #[error("Response contained no data")]
    MissingData,
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::Decode(err.to_string())
    }
}

/// Result type alias for queries
pub type QueryResult<T> = Result<T, QueryError>;
