//! The "last week" window: previous Monday 00:00 up to this Monday 00:00.

use chrono::{DateTime, Datelike, Days, Duration, Local, NaiveDate, NaiveTime, TimeZone};

/// Half-open interval `[after, before)` of activity start instants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateWindow<Tz: TimeZone> {
    pub after: DateTime<Tz>,
    pub before: DateTime<Tz>,
}

impl<Tz: TimeZone> DateWindow<Tz> {
    /// The Monday-to-Sunday week preceding the week that contains `today`.
    ///
    /// Bounds are computed on calendar dates and only then resolved to
    /// instants in `tz`, so month and year rollovers need no special casing.
    pub fn last_week(today: NaiveDate, tz: &Tz) -> Self {
        let this_monday = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
        let previous_monday = this_monday - Days::new(7);
        Self {
            after: start_of_day(previous_monday, tz),
            before: start_of_day(this_monday, tz),
        }
    }

    pub fn after_timestamp(&self) -> i64 {
        self.after.timestamp()
    }

    pub fn before_timestamp(&self) -> i64 {
        self.before.timestamp()
    }

    /// Monday the window starts on.
    pub fn first_day(&self) -> NaiveDate {
        self.after.naive_local().date()
    }

    /// Sunday the window ends on (inclusive).
    pub fn last_day(&self) -> NaiveDate {
        self.before.naive_local().date() - Days::new(1)
    }
}

/// Last week relative to the host's local clock.
pub fn last_week_local() -> DateWindow<Local> {
    DateWindow::last_week(Local::now().date_naive(), &Local)
}

/// First instant of `date` in `tz`. A midnight skipped by a DST jump resolves
/// to the first valid local time after it.
fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    if let Some(dt) = tz.from_local_datetime(&midnight).earliest() {
        return dt;
    }
    (1..=96)
        .find_map(|quarter| {
            tz.from_local_datetime(&(midnight + Duration::minutes(15 * quarter)))
                .earliest()
        })
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
}
