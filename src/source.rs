//! Fixture provider client.
//!
//! One GET per request; any transport error, non-2xx status or unusable body
//! surfaces as `Error::DataUnavailable` so no standings are built from a
//! partial snapshot.

use std::time::Duration;

use tracing::{debug, info};

use crate::constants::DEFAULT_FIXTURES_URL;
use crate::error::{Error, Result};
use crate::fixture::{parse_fixtures, Fixture};

#[derive(Clone, Debug)]
pub struct SourceConfig {
    pub url: String,
    /// Sent as `X-Auth-Token` when set
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            url: DEFAULT_FIXTURES_URL.to_string(),
            api_token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

pub struct FixtureClient {
    client: reqwest::Client,
    config: SourceConfig,
}

impl FixtureClient {
    pub fn new(config: SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("scoreboard_core/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::DataUnavailable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Fetch and validate the current fixture list.
    pub async fn fetch_fixtures(&self) -> Result<Vec<Fixture>> {
        debug!(url = %self.config.url, "fetching fixtures");

        let mut request = self.client.get(&self.config.url);
        if let Some(token) = &self.config.api_token {
            request = request.header("X-Auth-Token", token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::DataUnavailable(format!("fixtures request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::DataUnavailable(format!(
                "fixtures endpoint returned {}: {}",
                status.as_u16(),
                body.chars().take(500).collect::<String>()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::DataUnavailable(format!("failed to read fixtures body: {e}")))?;

        let fixtures = parse_fixtures(&body)?;
        info!(count = fixtures.len(), "fetched fixtures");
        Ok(fixtures)
    }
}
