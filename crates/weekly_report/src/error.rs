//! Error types for the weekly report.

use strava_client::StravaError;
use thiserror::Error;

/// Every variant is fatal; the run stops at the first one.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid configuration: {0}")]
    Config(#[source] StravaError),

    #[error("failed to retrieve athlete: {0}")]
    Athlete(#[source] StravaError),

    #[error("failed to retrieve athlete stats: {0}")]
    Stats(#[source] StravaError),

    #[error("failed to retrieve activities: {0}")]
    Activities(#[source] StravaError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;
