//! Run configuration resolved from command-line flags and the environment.
//!
//! The GitHub token only ever comes from the environment. The API base URL
//! is layered: flag, then `OPENCLAW_BUMP_API_URL`, then the public GitHub API.

use std::path::PathBuf;

use crate::error::BumpError;
use crate::manifest::DEFAULT_MANIFEST_PATH;

/// Environment variable holding the GitHub access token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Environment variable for overriding the API base URL.
pub const API_URL_ENV_VAR: &str = "OPENCLAW_BUMP_API_URL";

/// Public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Upstream project whose releases are tracked.
pub const DEFAULT_OWNER: &str = "openclaw";
pub const DEFAULT_REPO: &str = "openclaw";

/// Flag values before environment lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub manifest_path: Option<PathBuf>,
    pub dry_run: bool,
}

/// Everything a run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpConfig {
    pub token: String,
    pub api_url: String,
    pub owner: String,
    pub repo: String,
    pub manifest_path: PathBuf,
    pub dry_run: bool,
}

impl BumpConfig {
    /// Resolve against the real process environment.
    pub fn resolve(overrides: Overrides) -> Result<Self, BumpError> {
        Self::resolve_with_env(overrides, |key| std::env::var(key).ok())
    }

    /// Internal resolver that takes the environment lookup as a parameter for testability.
    pub fn resolve_with_env(
        overrides: Overrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, BumpError> {
        let token = non_empty_trimmed(env(TOKEN_ENV_VAR)).ok_or_else(|| {
            BumpError::MissingCredential {
                var: TOKEN_ENV_VAR.to_string(),
            }
        })?;

        let api_url = non_empty_trimmed(overrides.api_url)
            .or_else(|| non_empty_trimmed(env(API_URL_ENV_VAR)))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            token,
            api_url,
            owner: non_empty_trimmed(overrides.owner).unwrap_or_else(|| DEFAULT_OWNER.to_string()),
            repo: non_empty_trimmed(overrides.repo).unwrap_or_else(|| DEFAULT_REPO.to_string()),
            manifest_path: overrides
                .manifest_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_PATH)),
            dry_run: overrides.dry_run,
        })
    }

    /// Whether the token would travel over plain HTTP.
    pub fn is_non_https(&self) -> bool {
        !self.api_url.starts_with("https://")
    }
}

fn non_empty_trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
