//! Minimal `StravaClient` trait and the wire types it returns.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

pub mod config;
pub mod http_client;

#[derive(Debug, Error)]
pub enum StravaError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("authentication rejected: {0}")]
    Auth(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("decoding response: {0}")]
    Decode(String),
}

impl StravaError {
    /// Map a non-success status code that has no dedicated variant.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => StravaError::Auth(body),
            404 => StravaError::NotFound(body),
            429 => StravaError::RateLimited(body),
            _ => StravaError::Status { status, body },
        }
    }
}

/// The authenticated athlete. Only the identifier is needed downstream.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Athlete {
    pub id: u64,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Totals {
    #[serde(default)]
    pub count: u64,
    /// Meters.
    #[serde(default, deserialize_with = "deserialize_f64_or_zero")]
    pub distance: f64,
    #[serde(default)]
    pub moving_time: u64,
    #[serde(default)]
    pub elapsed_time: u64,
    #[serde(default, deserialize_with = "deserialize_f64_or_zero")]
    pub elevation_gain: f64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct AthleteStats {
    #[serde(default)]
    pub ytd_ride_totals: Totals,
    #[serde(default)]
    pub ytd_run_totals: Totals,
    #[serde(default)]
    pub ytd_swim_totals: Totals,
}

/// Sport type tag as reported in an activity's `type` field.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityType {
    Run,
    Ride,
    Swim,
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Activity {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub start_date: DateTime<Utc>,
    /// Athlete's wall clock at the start, encoded by Strava with a `Z` suffix.
    #[serde(default)]
    pub start_date_local: Option<DateTime<Utc>>,
    /// Seconds.
    #[serde(default)]
    pub elapsed_time: u64,
    /// Meters.
    #[serde(default, deserialize_with = "deserialize_f64_or_zero")]
    pub distance: f64,
    /// Meters.
    #[serde(default, deserialize_with = "deserialize_f64_or_zero")]
    pub total_elevation_gain: f64,
    /// Meters per second.
    #[serde(default, deserialize_with = "deserialize_f64_or_zero")]
    pub average_speed: f64,
}

// Strava sends `null` for metrics it could not compute (e.g. manual entries).
fn deserialize_f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

#[async_trait]
pub trait StravaClient: Send + Sync + 'static {
    /// The athlete who owns the access token.
    async fn get_current_athlete(&self) -> Result<Athlete, StravaError>;

    /// Aggregated recent, year-to-date and all-time totals for an athlete.
    async fn get_athlete_stats(&self, athlete_id: u64) -> Result<AthleteStats, StravaError>;

    /// Activities of the current athlete that started in `[after, before)`.
    ///
    /// A single page is requested; `per_page` overrides the API default.
    async fn list_activities(
        &self,
        after: i64,
        before: i64,
        per_page: Option<u32>,
    ) -> Result<Vec<Activity>, StravaError>;
}
