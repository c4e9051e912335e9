//! Shared test utilities: an activity builder and a mock `StravaClient`.
#![cfg(test)]

use async_trait::async_trait;
use std::sync::Mutex;

use strava_client::{
    Activity, ActivityType, Athlete, AthleteStats, StravaClient, StravaError, Totals,
};

/// Build an activity with the fields the report reads.
pub fn activity(
    id: u64,
    activity_type: ActivityType,
    start: &str,
    elapsed_time: u64,
    distance: f64,
    total_elevation_gain: f64,
    average_speed: f64,
) -> Activity {
    Activity {
        id,
        name: None,
        activity_type,
        start_date: start.parse().expect("rfc3339 start"),
        start_date_local: None,
        elapsed_time,
        distance,
        total_elevation_gain,
        average_speed,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailAt {
    Athlete,
    Stats,
    Activities,
}

/// Canned athlete 99 with 1609344 m (1000 mi) of rides this year.
pub struct MockClient {
    activities: Vec<Activity>,
    fail_at: Option<FailAt>,
    calls: Mutex<Vec<String>>,
}

impl MockClient {
    pub fn with_activities(activities: Vec<Activity>) -> Self {
        Self {
            activities,
            fail_at: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(at: FailAt) -> Self {
        Self {
            activities: Vec::new(),
            fail_at: Some(at),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String, at: FailAt) -> Result<(), StravaError> {
        self.calls.lock().unwrap().push(call);
        if self.fail_at == Some(at) {
            return Err(StravaError::from_status(500, "mock failure".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl StravaClient for MockClient {
    async fn get_current_athlete(&self) -> Result<Athlete, StravaError> {
        self.record("athlete".into(), FailAt::Athlete)?;
        Ok(Athlete {
            id: 99,
            firstname: Some("Test".into()),
            lastname: Some("Athlete".into()),
        })
    }

    async fn get_athlete_stats(&self, athlete_id: u64) -> Result<AthleteStats, StravaError> {
        self.record(format!("stats:{athlete_id}"), FailAt::Stats)?;
        Ok(AthleteStats {
            ytd_ride_totals: Totals {
                count: 50,
                distance: 1_609_344.0,
                ..Totals::default()
            },
            ..AthleteStats::default()
        })
    }

    async fn list_activities(
        &self,
        after: i64,
        before: i64,
        per_page: Option<u32>,
    ) -> Result<Vec<Activity>, StravaError> {
        self.record(
            format!("activities:{after}:{before}:{per_page:?}"),
            FailAt::Activities,
        )?;
        Ok(self.activities.clone())
    }
}
