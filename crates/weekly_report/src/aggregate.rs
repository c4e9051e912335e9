//! Buckets raw activities by sport and formats one display line per activity.

use chrono::{DateTime, Utc};
use strava_client::{Activity, ActivityType};

use crate::units::{meters_to_feet, meters_to_miles, mps_to_mph, pace_seconds_per_mile};

/// Rendered in place of a pace when the average speed is zero or unusable.
pub const PACE_PLACEHOLDER: &str = "--:--";

const ACTIVITY_URL: &str = "https://www.strava.com/activities/";

/// The sports that get a section in the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sport {
    Running,
    Cycling,
    Swimming,
}

impl Sport {
    /// Section order in the rendered report.
    pub const ALL: [Sport; 3] = [Sport::Running, Sport::Cycling, Sport::Swimming];

    /// `None` for every tag the report does not cover; those activities are dropped.
    pub fn from_activity_type(tag: ActivityType) -> Option<Self> {
        match tag {
            ActivityType::Run => Some(Sport::Running),
            ActivityType::Ride => Some(Sport::Cycling),
            ActivityType::Swim => Some(Sport::Swimming),
            ActivityType::Other => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Sport::Running => "Running",
            Sport::Cycling => "Cycling",
            Sport::Swimming => "Swimming",
        }
    }

    /// Unit of the bucket total.
    pub fn unit(self) -> &'static str {
        match self {
            Sport::Running | Sport::Cycling => "miles",
            Sport::Swimming => "meters",
        }
    }
}

/// One formatted line plus the instant it sorts by.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub activity_id: u64,
    pub start: DateTime<Utc>,
    pub line: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bucket {
    entries: Vec<Entry>,
    total: f64,
}

impl Bucket {
    fn push(&mut self, entry: Entry, distance: f64) {
        self.entries.push(entry);
        self.total += distance;
    }

    /// Entries in the order they were received.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Miles for running and cycling, meters for swimming.
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeeklyReport {
    running: Bucket,
    cycling: Bucket,
    swimming: Bucket,
    skipped: Vec<u64>,
}

impl WeeklyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_activities<'a, I>(activities: I) -> Self
    where
        I: IntoIterator<Item = &'a Activity>,
    {
        let mut report = Self::new();
        for activity in activities {
            report.add(activity);
        }
        report
    }

    /// Classify one activity into its bucket. Returns the sport it landed in,
    /// or `None` when its type is not reported.
    pub fn add(&mut self, activity: &Activity) -> Option<Sport> {
        let Some(sport) = Sport::from_activity_type(activity.activity_type) else {
            tracing::debug!(
                id = activity.id,
                kind = ?activity.activity_type,
                "skipping activity with unreported sport type"
            );
            self.skipped.push(activity.id);
            return None;
        };

        let (line, distance) = match sport {
            Sport::Running => {
                let pace = pace_seconds_per_mile(activity.average_speed)
                    .map(|secs| format_pace(secs as u64))
                    .unwrap_or_else(|| PACE_PLACEHOLDER.to_string());
                (
                    format!("{}, {} per mile", base_line(activity), pace),
                    meters_to_miles(activity.distance),
                )
            }
            Sport::Cycling => (
                format!(
                    "{}, {:2.1} MPH",
                    base_line(activity),
                    mps_to_mph(activity.average_speed)
                ),
                meters_to_miles(activity.distance),
            ),
            Sport::Swimming => (swim_line(activity), activity.distance),
        };

        let entry = Entry {
            activity_id: activity.id,
            start: activity.start_date,
            line,
        };
        self.bucket_mut(sport).push(entry, distance);
        Some(sport)
    }

    pub fn bucket(&self, sport: Sport) -> &Bucket {
        match sport {
            Sport::Running => &self.running,
            Sport::Cycling => &self.cycling,
            Sport::Swimming => &self.swimming,
        }
    }

    fn bucket_mut(&mut self, sport: Sport) -> &mut Bucket {
        match sport {
            Sport::Running => &mut self.running,
            Sport::Cycling => &mut self.cycling,
            Sport::Swimming => &mut self.swimming,
        }
    }

    /// Ids of activities left out because of their sport type.
    pub fn skipped(&self) -> &[u64] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        Sport::ALL.iter().all(|s| self.bucket(*s).is_empty())
    }
}

pub fn activity_url(id: u64) -> String {
    format!("{ACTIVITY_URL}{id}")
}

/// `H:MM:SS`
pub fn format_hms(secs: u64) -> String {
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// `M:SS`; minutes are not wrapped into hours.
pub fn format_pace(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

fn display_date(activity: &Activity) -> String {
    activity
        .start_date_local
        .unwrap_or(activity.start_date)
        .format("%m/%d/%Y")
        .to_string()
}

fn link(activity: &Activity) -> String {
    format!(
        "[url=\"{}\"]{}[/url]: {}",
        activity_url(activity.id),
        display_date(activity),
        format_hms(activity.elapsed_time)
    )
}

fn base_line(activity: &Activity) -> String {
    format!(
        "{}, {:4.2} miles, {:4.0}ft elev. gain",
        link(activity),
        meters_to_miles(activity.distance),
        meters_to_feet(activity.total_elevation_gain)
    )
}

fn swim_line(activity: &Activity) -> String {
    format!("{}, {:4.2} meters", link(activity), activity.distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::activity;

    #[test]
    fn run_line_has_pace_suffix() {
        // 5 km in 25:00
        let a = activity(
            101,
            ActivityType::Run,
            "2024-01-02T07:30:00Z",
            1500,
            5000.0,
            12.0,
            5000.0 / 1500.0,
        );
        let mut report = WeeklyReport::new();
        assert_eq!(report.add(&a), Some(Sport::Running));

        let bucket = report.bucket(Sport::Running);
        assert_eq!(
            bucket.entries()[0].line,
            "[url=\"https://www.strava.com/activities/101\"]01/02/2024[/url]: 0:25:00, 3.11 miles,   39ft elev. gain, 8:02 per mile"
        );
        assert!((bucket.total() - 3.106855).abs() < 1e-6);
    }

    #[test]
    fn ride_line_has_speed_suffix() {
        let a = activity(
            202,
            ActivityType::Ride,
            "2024-01-03T16:00:00Z",
            7384,
            64373.8,
            402.3,
            8.72,
        );
        let mut report = WeeklyReport::new();
        assert_eq!(report.add(&a), Some(Sport::Cycling));
        assert_eq!(
            report.bucket(Sport::Cycling).entries()[0].line,
            "[url=\"https://www.strava.com/activities/202\"]01/03/2024[/url]: 2:03:04, 40.00 miles, 1320ft elev. gain, 19.5 MPH"
        );
    }

    #[test]
    fn swim_line_uses_meters_without_elevation() {
        let a = activity(
            303,
            ActivityType::Swim,
            "2024-01-04T06:00:00Z",
            2700,
            2000.0,
            0.0,
            0.74,
        );
        let mut report = WeeklyReport::new();
        assert_eq!(report.add(&a), Some(Sport::Swimming));
        let bucket = report.bucket(Sport::Swimming);
        assert_eq!(
            bucket.entries()[0].line,
            "[url=\"https://www.strava.com/activities/303\"]01/04/2024[/url]: 0:45:00, 2000.00 meters"
        );
        assert_eq!(bucket.total(), 2000.0);
    }

    #[test]
    fn zero_speed_run_uses_placeholder() {
        let a = activity(
            404,
            ActivityType::Run,
            "2024-01-05T07:00:00Z",
            600,
            0.0,
            0.0,
            0.0,
        );
        let mut report = WeeklyReport::new();
        report.add(&a);
        let line = &report.bucket(Sport::Running).entries()[0].line;
        assert!(line.ends_with(", --:-- per mile"), "{line}");
        assert!(!line.contains("inf") && !line.contains("NaN"));
    }

    #[test]
    fn crawling_speed_run_uses_placeholder() {
        let a = activity(
            406,
            ActivityType::Run,
            "2024-01-05T07:00:00Z",
            600,
            10.0,
            0.0,
            1e-300,
        );
        let mut report = WeeklyReport::new();
        report.add(&a);
        let line = &report.bucket(Sport::Running).entries()[0].line;
        assert!(line.ends_with(", --:-- per mile"), "{line}");
    }

    #[test]
    fn local_start_date_wins_for_display() {
        let mut a = activity(
            505,
            ActivityType::Run,
            "2024-01-06T03:00:00Z",
            600,
            1000.0,
            0.0,
            2.0,
        );
        a.start_date_local = Some("2024-01-05T22:00:00Z".parse().unwrap());
        let mut report = WeeklyReport::new();
        report.add(&a);
        let entry = &report.bucket(Sport::Running).entries()[0];
        assert!(entry.line.contains("]01/05/2024[/url]"));
        assert_eq!(entry.start, a.start_date);
    }

    #[test]
    fn unknown_types_are_skipped_and_everything_else_lands_once() {
        let input = vec![
            activity(
                1,
                ActivityType::Run,
                "2024-01-01T07:00:00Z",
                1800,
                5000.0,
                10.0,
                2.8,
            ),
            activity(
                2,
                ActivityType::Other,
                "2024-01-01T12:00:00Z",
                3600,
                0.0,
                0.0,
                0.0,
            ),
            activity(
                3,
                ActivityType::Ride,
                "2024-01-02T07:00:00Z",
                3600,
                30000.0,
                100.0,
                8.3,
            ),
            activity(
                4,
                ActivityType::Swim,
                "2024-01-03T07:00:00Z",
                1800,
                1500.0,
                0.0,
                0.8,
            ),
            activity(
                5,
                ActivityType::Other,
                "2024-01-04T07:00:00Z",
                900,
                0.0,
                0.0,
                0.0,
            ),
            activity(
                6,
                ActivityType::Run,
                "2024-01-05T07:00:00Z",
                1800,
                6000.0,
                10.0,
                3.3,
            ),
        ];
        let report = WeeklyReport::from_activities(&input);

        let mut seen: Vec<u64> = Sport::ALL
            .iter()
            .flat_map(|s| report.bucket(*s).entries().iter().map(|e| e.activity_id))
            .chain(report.skipped().iter().copied())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(report.bucket(Sport::Running).len(), 2);
        assert_eq!(report.bucket(Sport::Cycling).len(), 1);
        assert_eq!(report.bucket(Sport::Swimming).len(), 1);
        assert_eq!(report.skipped(), &[2, 5]);
    }

    #[test]
    fn totals_do_not_depend_on_input_order() {
        let input = vec![
            activity(
                1,
                ActivityType::Ride,
                "2024-01-01T07:00:00Z",
                3600,
                30000.0,
                100.0,
                8.3,
            ),
            activity(
                2,
                ActivityType::Ride,
                "2024-01-03T07:00:00Z",
                3600,
                42000.5,
                100.0,
                8.3,
            ),
            activity(
                3,
                ActivityType::Ride,
                "2024-01-02T07:00:00Z",
                3600,
                12500.25,
                100.0,
                8.3,
            ),
        ];
        let forward = WeeklyReport::from_activities(&input);
        let backward = WeeklyReport::from_activities(input.iter().rev());

        let expected =
            meters_to_miles(30000.0) + meters_to_miles(42000.5) + meters_to_miles(12500.25);
        let f = forward.bucket(Sport::Cycling).total();
        let b = backward.bucket(Sport::Cycling).total();
        assert!((f - expected).abs() < 1e-9);
        assert!((f - b).abs() < 1e-9);
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let none: Vec<Activity> = Vec::new();
        let report = WeeklyReport::from_activities(&none);
        assert!(report.is_empty());
        assert!(report.skipped().is_empty());
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_hms(0), "0:00:00");
        assert_eq!(format_hms(59), "0:00:59");
        assert_eq!(format_hms(3661), "1:01:01");
        assert_eq!(format_hms(36000), "10:00:00");
        assert_eq!(format_pace(482), "8:02");
        assert_eq!(format_pace(3725), "62:05");
    }
}
