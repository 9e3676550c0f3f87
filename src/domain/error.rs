// Error taxonomy for the browse pipeline
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failures are terminal for the current request; no partial chart is
/// produced. An empty sample set is a success, not an error.
#[derive(Debug, Error)]
pub enum BrowseError {
    #[error("malformed time range: start {start} is not before end {end}")]
    MalformedRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("could not parse timestamp '{0}'")]
    TimestampParse(String),

    #[error("archive query failed: {0}")]
    DataSource(anyhow::Error),
}
