//! The bump flow: look up the latest release, then reconcile the manifest.

use anyhow::Result;
use std::path::Path;

use crate::config::BumpConfig;
use crate::error::BumpError;
use crate::github::ReleaseClient;
use crate::manifest;
use crate::output::Reporter;
use crate::policy::{self, Decision};

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub decision: Decision,
    /// True only when the manifest was rewritten on disk.
    pub written: bool,
}

/// Full run: release lookup followed by `bump_manifest`.
///
/// The config already carries a token, so a missing credential can never
/// reach the network call.
pub fn run(config: &BumpConfig, reporter: &mut dyn Reporter) -> Result<BumpOutcome> {
    let client = ReleaseClient::new(&config.api_url, &config.token)?;
    reporter.detail(&format!(
        "GET {}",
        client.latest_release_url(&config.owner, &config.repo)
    ));
    let latest = client.latest_release_tag(&config.owner, &config.repo)?;
    bump_manifest(&config.manifest_path, &latest, config.dry_run, reporter)
}

/// Compares the pinned ref in `path` with `latest` and rewrites it when needed.
///
/// The file is written at most once, and only after the marker line has been
/// found and the replacement built.
pub fn bump_manifest(
    path: &Path,
    latest: &str,
    dry_run: bool,
    reporter: &mut dyn Reporter,
) -> Result<BumpOutcome> {
    let text = manifest::load(path)?;
    let current = manifest::read_ref(&text).ok_or_else(|| {
        BumpError::ManifestFormat("Could not parse current OPENCLAW_GIT_REF".to_string())
    })?;

    reporter.action("Checking", &format!("current={current} latest={latest}"));

    let decision = policy::decide(&current, latest);
    let Some(next) = decision.new_ref().map(str::to_string) else {
        reporter.success("Up to date", "No update needed.");
        return Ok(BumpOutcome {
            decision,
            written: false,
        });
    };

    match &decision {
        Decision::PinFloating { latest } => {
            reporter.action(
                "Pinning",
                &format!("dynamic \"{}\" default → {latest}", policy::FLOATING_REF),
            );
        }
        Decision::Update {
            current,
            latest,
            major_jump: Some((from, to)),
        } => {
            reporter.detail(&format!("major {from} → {to}"));
            reporter.warn(&format!(
                "Major version jump detected: {current} → {latest}. \
                 The Docker build CI will validate compatibility."
            ));
        }
        Decision::UpToDate | Decision::Update { .. } => {}
    }

    let updated = manifest::replace_ref(&text, &next)?;

    if dry_run {
        reporter.action(
            "Dry run",
            &format!("would update {}: {current} → {next}", path.display()),
        );
        return Ok(BumpOutcome {
            decision,
            written: false,
        });
    }

    manifest::save(path, &updated)?;
    reporter.success(
        "Updated",
        &format!("{}: {current} → {next}", path.display()),
    );
    Ok(BumpOutcome {
        decision,
        written: true,
    })
}
