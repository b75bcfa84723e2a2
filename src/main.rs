use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;
use std::process;

use openclaw_ref_bump::bump::{self, BumpOutcome};
use openclaw_ref_bump::config::{self, BumpConfig, Overrides};
use openclaw_ref_bump::error::{EXIT_FAILURE, exit_code_for};
use openclaw_ref_bump::manifest;
use openclaw_ref_bump::output::{self, ConsoleReporter};

/// Keep the pinned OPENCLAW_GIT_REF in a Dockerfile in sync with the latest
/// upstream GitHub release.
///
/// Reads the access token from GITHUB_TOKEN. Exits 0 when the file is up to
/// date or was updated, 2 when the token is missing, 1 on any other failure.
#[derive(Parser, Debug)]
#[command(
    name = "openclaw-ref-bump",
    version,
    about,
    after_help = "Examples:\n  GITHUB_TOKEN=... openclaw-ref-bump\n  openclaw-ref-bump --dockerfile docker/Dockerfile --dry-run\n  openclaw-ref-bump --owner myfork --repo openclaw"
)]
struct Cli {
    /// Manifest containing the `ARG OPENCLAW_GIT_REF=` line.
    #[arg(long, value_name = "PATH", default_value = manifest::DEFAULT_MANIFEST_PATH)]
    dockerfile: PathBuf,

    /// GitHub owner of the upstream project.
    #[arg(long, default_value = config::DEFAULT_OWNER)]
    owner: String,

    /// GitHub repository of the upstream project.
    #[arg(long, default_value = config::DEFAULT_REPO)]
    repo: String,

    /// GitHub API base URL (also read from OPENCLAW_BUMP_API_URL).
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Report what would change without writing the file.
    #[arg(long)]
    dry_run: bool,

    /// Print request details.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            api_url: self.api_url.clone(),
            owner: Some(self.owner.clone()),
            repo: Some(self.repo.clone()),
            manifest_path: Some(self.dockerfile.clone()),
            dry_run: self.dry_run,
        }
    }
}

fn run(cli: &Cli) -> Result<BumpOutcome> {
    let config = BumpConfig::resolve(cli.overrides())?;
    if config.is_non_https() {
        output::note(&format!(
            "API URL {} is not HTTPS; the token will be sent in clear text",
            config.api_url
        ));
    }
    bump::run(&config, &mut ConsoleReporter)
}

/// Usage errors exit 1 so they never look like a missing token (exit 2).
fn parse_error_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => EXIT_FAILURE,
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(parse_error_exit_code(&e));
        }
    };
    output::set_verbose(cli.verbose);

    if let Err(e) = run(&cli) {
        output::fail("Error", &format!("{e:#}"));
        process::exit(exit_code_for(&e));
    }
}
