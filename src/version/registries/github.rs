//! GitHub Releases API registry implementation

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::GitHubConfig;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;

/// Response from GitHub Releases API
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Registry implementation for GitHub Releases API
pub struct GitHubRegistry {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubRegistry {
    /// Creates a new GitHubRegistry with a custom base URL
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("latest-versions/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Sends `Authorization: Bearer <token>` with every request
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn from_config(config: &GitHubConfig) -> Result<Self, RegistryError> {
        Ok(Self::new(&config.base_url, Duration::from_millis(config.timeout_ms))?
            .with_token(config.token.clone()))
    }
}

fn retry_after_secs(response: &reqwest::Response) -> Option<u64> {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

fn rate_limit_exhausted(response: &reqwest::Response) -> bool {
    response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0")
}

#[async_trait::async_trait]
impl Registry for GitHubRegistry {
    async fn fetch_release_tags(
        &self,
        owner: &str,
        name: &str,
        per_page: u32,
    ) -> Result<Vec<String>, RegistryError> {
        let repository = format!("{}/{}", owner, name);
        let url = format!(
            "{}/repos/{}/releases?per_page={}",
            self.base_url, repository, per_page
        );
        debug!("Fetching releases: {}", url);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(repository));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || (status == reqwest::StatusCode::FORBIDDEN && rate_limit_exhausted(&response))
        {
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after_secs(&response),
            });
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(RegistryError::Unauthorized(repository));
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let releases: Vec<Release> = response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub releases response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        Ok(releases.into_iter().map(|r| r.tag_name).collect())
    }
}
