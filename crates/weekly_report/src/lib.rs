//! Weekly training report for a single Strava athlete.
//!
//! Fetches last week's activities, buckets them into running, cycling and
//! swimming, and renders a forum-markup post with weekly and year-to-date
//! totals.

pub mod aggregate;
pub mod error;
pub mod logging;
pub mod render;
pub mod units;
pub mod window;

#[cfg(test)]
mod test_utils;

use chrono::TimeZone;
use strava_client::StravaClient;

pub use aggregate::{Bucket, Entry, PACE_PLACEHOLDER, Sport, WeeklyReport};
pub use error::{ReportError, ReportResult};
pub use window::DateWindow;

/// Fetch everything for `window` through `client` and render the report.
///
/// The three API calls run strictly in sequence and the first failure ends
/// the run; nothing is rendered from partial data.
pub async fn build_report<C, Tz>(
    client: &C,
    window: &DateWindow<Tz>,
    per_page: Option<u32>,
) -> ReportResult<String>
where
    C: StravaClient + ?Sized,
    Tz: TimeZone,
{
    let (after, before) = (window.after_timestamp(), window.before_timestamp());

    let athlete = client
        .get_current_athlete()
        .await
        .map_err(ReportError::Athlete)?;
    let stats = client
        .get_athlete_stats(athlete.id)
        .await
        .map_err(ReportError::Stats)?;
    let ytd_ride_miles = units::meters_to_miles(stats.ytd_ride_totals.distance);

    let activities = client
        .list_activities(after, before, per_page)
        .await
        .map_err(ReportError::Activities)?;

    let report = WeeklyReport::from_activities(&activities);
    tracing::info!(
        athlete_id = athlete.id,
        fetched = activities.len(),
        running = report.bucket(Sport::Running).len(),
        cycling = report.bucket(Sport::Cycling).len(),
        swimming = report.bucket(Sport::Swimming).len(),
        skipped = report.skipped().len(),
        "aggregated activities"
    );
    Ok(render::render(&report, ytd_ride_miles))
}
