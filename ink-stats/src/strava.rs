//! Strava API client: token refresh and athlete YTD totals.

use crate::{
    error::{Result, StatsError},
    stats::{AthleteStats, YtdStats},
    tokens::{StravaTokens, TokenStore},
};
use chrono::{Datelike, Local, Utc};
use log::{debug, info};
use reqwest::{Client, Response};
use std::time::Duration;

/// Host serving `oauth/token`.
pub const STRAVA_OAUTH_URL: &str = "https://www.strava.com";

/// Base of the v3 REST API.
pub const STRAVA_API_URL: &str = "https://www.strava.com/api/v3";

/// Application credentials and the athlete whose totals are shown.
#[derive(Debug, Clone)]
pub struct StravaCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub athlete_id: String,
}

#[derive(Debug, Clone)]
pub struct StravaClient {
    client: Client,
    credentials: StravaCredentials,
    store: TokenStore,
    oauth_url: String,
    api_url: String,
}

impl StravaClient {
    pub fn new(credentials: StravaCredentials, store: TokenStore) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            credentials,
            store,
            oauth_url: STRAVA_OAUTH_URL.to_string(),
            api_url: STRAVA_API_URL.to_string(),
        })
    }

    /// Point the client at other hosts (local mocks, proxies).
    pub fn with_base_urls(mut self, oauth_url: impl Into<String>, api_url: impl Into<String>) -> Self {
        self.oauth_url = oauth_url.into();
        self.api_url = api_url.into();
        self
    }

    /// Load the stored tokens, exchanging the refresh token for a new pair
    /// (and persisting it) when the access token has expired.
    pub async fn fresh_tokens(&self) -> Result<StravaTokens> {
        let tokens = self.store.load()?;
        if !tokens.is_expired(Utc::now().timestamp()) {
            return Ok(tokens);
        }

        info!(
            "Strava access token expired at {}, refreshing",
            tokens.expires_at
        );
        let url = format!("{}/oauth/token", self.oauth_url);
        let response = self
            .client
            .post(&url)
            .form(&[
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
                ("refresh_token", tokens.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await?;
        let refreshed: StravaTokens = check_status(response, &url)?.json().await?;
        self.store.save(&refreshed)?;
        info!("Saved refreshed tokens to {}", self.store.path().display());
        Ok(refreshed)
    }

    /// Raw athlete stats for the configured athlete.
    pub async fn athlete_stats(&self, tokens: &StravaTokens) -> Result<AthleteStats> {
        let url = format!(
            "{}/athletes/{}/stats",
            self.api_url, self.credentials.athlete_id
        );
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .query(&[("access_token", tokens.access_token.as_str())])
            .send()
            .await?;
        Ok(check_status(response, &url)?.json().await?)
    }

    /// YTD totals for the current calendar year, in miles.
    pub async fn ytd_stats(&self) -> Result<YtdStats> {
        let tokens = self.fresh_tokens().await?;
        let stats = self.athlete_stats(&tokens).await?;
        Ok(YtdStats::from_athlete_stats(&stats, Local::now().year()))
    }
}

fn check_status(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(StatsError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}
