//! HTTP client implementation for the Strava v3 API.
//!
//! A reqwest-based implementation of the [`StravaClient`](crate::StravaClient) trait.

use crate::config::Config;
use crate::{Activity, Athlete, AthleteStats, StravaClient, StravaError};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

/// Client for the Strava API using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestStravaClient {
    base_url: String,
    token: SecretString,
    client: reqwest::Client,
}

impl ReqwestStravaClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The API root (e.g., "https://www.strava.com/api/v3")
    /// * `token` - The OAuth access token sent as a bearer credential
    pub fn new(base_url: &str, token: SecretString) -> Result<Self, StravaError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("strava_client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self, StravaError> {
        Self::new(&cfg.base_url, cfg.token.clone())
    }

    /// Build an authenticated GET request.
    fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url).bearer_auth(self.token.expose_secret())
    }

    /// Execute a request and expect a JSON response.
    async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, StravaError> {
        let resp = request.send().await?;
        self.handle_response(resp).await
    }

    /// Handle a response, converting status codes to appropriate errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, StravaError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(self.error_from_response(resp).await);
        }
        // Read body as text first so a shape mismatch reports what came back.
        let text = resp.text().await?;
        serde_json::from_str::<T>(&text).map_err(|e| {
            let body_snippet: String = text.chars().take(256).collect();
            StravaError::Decode(format!("{} - body: {}", e, body_snippet))
        })
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> StravaError {
        let status = resp.status().as_u16();
        let url = resp.url().path().to_string();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();
        tracing::warn!(status, path = %url, "strava request failed");
        StravaError::from_status(status, body_snippet)
    }
}

#[async_trait]
impl StravaClient for ReqwestStravaClient {
    async fn get_current_athlete(&self) -> Result<Athlete, StravaError> {
        let url = format!("{}/athlete", self.base_url);
        tracing::debug!("fetching current athlete");
        self.execute_json(self.get_request(&url)).await
    }

    async fn get_athlete_stats(&self, athlete_id: u64) -> Result<AthleteStats, StravaError> {
        let url = format!("{}/athletes/{}/stats", self.base_url, athlete_id);
        tracing::debug!(athlete_id, "fetching athlete stats");
        self.execute_json(self.get_request(&url)).await
    }

    async fn list_activities(
        &self,
        after: i64,
        before: i64,
        per_page: Option<u32>,
    ) -> Result<Vec<Activity>, StravaError> {
        let url = format!("{}/athlete/activities", self.base_url);
        let mut query = vec![("after", after.to_string()), ("before", before.to_string())];
        if let Some(n) = per_page {
            query.push(("per_page", n.to_string()));
        }
        tracing::debug!(after, before, ?per_page, "listing activities");
        self.execute_json(self.get_request(&url).query(&query)).await
    }
}
