//! Column encoding shared by the SQLite repositories.
//!
//! String lists (characteristics, interests, challenges) are stored as JSON
//! array text; timestamps as fixed-width RFC 3339 text.

use chrono::{DateTime, Utc};
use personas_types::error::RepositoryError;
use personas_types::timestamp;

/// Encode a string list as a JSON array (`["a","b"]`).
pub(crate) fn encode_list(values: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(values).map_err(|e| RepositoryError::Query(e.to_string()))
}

/// Decode a JSON array column back into a string list.
pub(crate) fn decode_list(column: &str, raw: &str) -> Result<Vec<String>, RepositoryError> {
    serde_json::from_str(raw)
        .map_err(|e| RepositoryError::Query(format!("invalid {column} JSON: {e}")))
}

/// Map a sqlx failure onto the repository error taxonomy.
pub(crate) fn storage_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::Connection
        }
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::Conflict(db.message().to_string())
        }
        other => RepositoryError::Query(other.to_string()),
    }
}

pub(crate) fn format_datetime(dt: &DateTime<Utc>) -> String {
    timestamp::format(dt)
}

pub(crate) fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    timestamp::parse(s).map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}
