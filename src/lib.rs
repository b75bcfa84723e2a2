//! Library entrypoint for openclaw-ref-bump.
//!
//! The primary interface is the `openclaw-ref-bump` binary. This lib target
//! exposes the stages to integration tests.

pub mod bump;
pub mod config;
pub mod error;
pub mod github;
pub mod manifest;
pub mod output;
pub mod policy;
pub mod version;
