//! Distance and speed conversions used by the report.

pub const MILES_PER_METER: f64 = 0.000621371;
pub const FEET_PER_METER: f64 = 3.28084;
pub const MPH_PER_MPS: f64 = 2.23694;
/// Meters in a mile divided by 60; turns 1/(m/s) into seconds per mile when multiplied by 60.
const MILE_FACTOR: f64 = 26.8224;
/// Slowest pace still shown: one mile per day.
const MAX_PACE_SECS: f64 = 86_400.0;

pub fn meters_to_miles(meters: f64) -> f64 {
    meters * MILES_PER_METER
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

pub fn mps_to_mph(speed: f64) -> f64 {
    speed * MPH_PER_MPS
}

/// Seconds needed to cover one mile at `speed` m/s.
///
/// Returns `None` when the speed is zero, negative or not finite, and when the
/// resulting pace is slower than a mile per day.
pub fn pace_seconds_per_mile(speed: f64) -> Option<f64> {
    if !speed.is_finite() || speed <= 0.0 {
        return None;
    }
    let pace = (1.0 / speed) * 60.0 * MILE_FACTOR;
    (pace <= MAX_PACE_SECS).then_some(pace)
}
