use chrono::{Duration, Utc};
use strava_client::{StravaClient, config::Config, http_client::ReqwestStravaClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::from_env()?;
    let client = ReqwestStravaClient::from_config(&cfg)?;

    let before = Utc::now();
    let after = before - Duration::days(7);
    let activities = client
        .list_activities(after.timestamp(), before.timestamp(), cfg.per_page)
        .await
        .map_err(|e| format!("failed to fetch activities: {}", e))?;

    if activities.is_empty() {
        println!("No activities in the last 7 days (check the token scope)");
        return Ok(());
    }

    println!("Activities since {}:", after.format("%Y-%m-%d"));
    for a in activities {
        let name = a.name.unwrap_or_else(|| "(no name)".to_string());
        println!(
            "- {} {:?} {} {}",
            a.id,
            a.activity_type,
            a.start_date.format("%m/%d/%Y"),
            name
        );
    }

    Ok(())
}
