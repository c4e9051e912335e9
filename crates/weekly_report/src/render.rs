//! Forum-markup rendering of a [`WeeklyReport`].

use crate::aggregate::{Bucket, Entry, Sport, WeeklyReport};

/// Render every non-empty bucket in `Sport::ALL` order. The cycling section
/// also carries the year-to-date ride distance (miles).
pub fn render(report: &WeeklyReport, ytd_ride_miles: f64) -> String {
    let mut out = String::new();
    for sport in Sport::ALL {
        let bucket = report.bucket(sport);
        if bucket.is_empty() {
            continue;
        }
        let ytd = (sport == Sport::Cycling).then_some(ytd_ride_miles);
        render_section(&mut out, sport, bucket, ytd);
    }
    out
}

/// Running and cycling list newest first; swimming keeps the order the API returned.
pub fn ordered_entries(sport: Sport, bucket: &Bucket) -> Vec<&Entry> {
    let mut entries: Vec<&Entry> = bucket.entries().iter().collect();
    if sport != Sport::Swimming {
        entries.sort_by(|a, b| b.start.cmp(&a.start));
    }
    entries
}

fn render_section(out: &mut String, sport: Sport, bucket: &Bucket, ytd: Option<f64>) {
    out.push_str(&format!("[b]{}[/b]\n\n[fixed]", sport.title()));
    for entry in ordered_entries(sport, bucket) {
        out.push_str(&entry.line);
        out.push('\n');
    }
    out.push_str(&format!(
        "[/fixed]\n[b]Weekly Total:[/b] {:.2} {}\n",
        bucket.total(),
        sport.unit()
    ));
    if let Some(ytd) = ytd {
        out.push_str(&format!("[b]YTD Total:[/b] {:.2} miles\n", ytd));
    }
    out.push('\n');
}
