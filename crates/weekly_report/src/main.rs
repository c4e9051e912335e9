use std::io::Write;
use std::process::ExitCode;

use strava_client::config::Config;
use strava_client::http_client::ReqwestStravaClient;
use weekly_report::{ReportError, ReportResult, build_report, logging, window};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("weekly-report: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ReportResult<()> {
    // Credentials are checked before anything touches the network.
    let cfg = Config::from_env().map_err(ReportError::Config)?;
    let client = ReqwestStravaClient::from_config(&cfg).map_err(ReportError::Config)?;

    let window = window::last_week_local();
    tracing::info!(
        "weekly_report: reporting {} through {}",
        window.first_day(),
        window.last_day()
    );

    let text = build_report(&client, &window, cfg.per_page).await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
