//! Failure taxonomy for a bump run.
//!
//! Every variant is fatal. Library functions return `anyhow::Result` and
//! attach a `BumpError` as the root cause so `main` can pick the exit code
//! with a downcast while still printing the full context chain.

use thiserror::Error;

/// Exit code for a missing credential.
pub const EXIT_MISSING_CREDENTIAL: i32 = 2;

/// Exit code for every other failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BumpError {
    /// The access token environment variable is unset or empty.
    #[error("Missing {var}")]
    MissingCredential { var: String },

    /// The releases endpoint answered with a non-2xx status.
    #[error("GitHub API {status}: {body}")]
    RemoteApi { status: u16, body: String },

    /// The release payload did not carry a usable `tag_name`.
    #[error("Malformed release response: {0}")]
    MalformedResponse(String),

    /// The manifest has no `ARG OPENCLAW_GIT_REF=` line we can work with.
    #[error("{0}")]
    ManifestFormat(String),
}

impl BumpError {
    pub fn exit_code(&self) -> i32 {
        match self {
            BumpError::MissingCredential { .. } => EXIT_MISSING_CREDENTIAL,
            _ => EXIT_FAILURE,
        }
    }
}

/// Maps any error from a run to the process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<BumpError>())
        .map_or(EXIT_FAILURE, BumpError::exit_code)
}
