//! Latest-release lookup against the GitHub REST API.
//!
//! One authenticated `GET /repos/{owner}/{repo}/releases/latest` per run, no
//! retries. Tests point the client at a local HTTP server via `api_url`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

use crate::error::BumpError;

/// User-Agent header sent with GitHub API requests.
const USER_AGENT: &str = "openclaw-ref-bump";

/// Media type GitHub recommends for REST calls.
const GITHUB_JSON: &str = "application/vnd.github+json";

/// HTTP request timeout for the release lookup.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The part of the release payload we care about.
///
/// `tag_name` is optional here so a missing field is reported as a
/// malformed response rather than a generic decode error.
#[derive(Debug, Deserialize)]
struct LatestRelease {
    #[serde(default)]
    tag_name: Option<String>,
}

/// Authenticated GitHub API client.
pub struct ReleaseClient {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl ReleaseClient {
    /// `api_url` is stripped of trailing slashes before endpoint paths are joined.
    pub fn new(api_url: &str, token: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Full URL of the latest-release endpoint.
    pub fn latest_release_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{owner}/{repo}/releases/latest", self.api_url)
    }

    /// Returns the `tag_name` of the latest published release.
    pub fn latest_release_tag(&self, owner: &str, repo: &str) -> Result<String> {
        let url = self.latest_release_url(owner, repo);
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to create Tokio runtime for HTTP request")?;

        let body = runtime.block_on(async {
            let response = self
                .client
                .get(&url)
                .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", self.token))
                .header(reqwest::header::ACCEPT, GITHUB_JSON)
                .send()
                .await
                .with_context(|| format!("Failed to connect to GitHub API at {url}"))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .with_context(|| format!("Failed to read response body from {url}"))?;

            if !status.is_success() {
                return Err(anyhow::Error::new(BumpError::RemoteApi {
                    status: status.as_u16(),
                    body,
                }));
            }
            Ok::<_, anyhow::Error>(body)
        })?;

        parse_tag_name(&body).map_err(anyhow::Error::new)
    }
}

/// Extracts a usable tag from a release payload.
pub fn parse_tag_name(body: &str) -> Result<String, BumpError> {
    let release: LatestRelease = serde_json::from_str(body)
        .map_err(|e| BumpError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let tag = release
        .tag_name
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            BumpError::MalformedResponse("No tag_name in latest release response".to_string())
        })?;

    if tag.chars().any(char::is_whitespace) {
        return Err(BumpError::MalformedResponse(format!(
            "tag_name {tag:?} contains whitespace"
        )));
    }
    Ok(tag)
}
