use crate::StravaError;
use secrecy::SecretString;

pub const DEFAULT_BASE_URL: &str = "https://www.strava.com/api/v3";

#[derive(Clone, Debug)]
pub struct Config {
    pub token: SecretString,
    pub base_url: String,
    pub per_page: Option<u32>,
}

impl Config {
    pub fn from_env() -> Result<Self, StravaError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function, so tests never touch the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, StravaError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let token = get("STRAVA_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| StravaError::Config("STRAVA_TOKEN missing".into()))?;
        let base_url = get("STRAVA_BASE_URL")
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let per_page = get("STRAVA_PER_PAGE")
            .map(|v| {
                v.parse::<u32>().map_err(|_| {
                    StravaError::Config(format!("STRAVA_PER_PAGE is not a number: {v}"))
                })
            })
            .transpose()?;
        Ok(Self {
            token: SecretString::new(token.into()),
            base_url,
            per_page,
        })
    }
}
