//! What to do with the pinned ref once we know the latest release.

use crate::version::parse_version;

/// Sentinel meaning "build whatever is newest"; always pinned to a real tag.
pub const FLOATING_REF: &str = "latest";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The manifest already pins the latest tag.
    UpToDate,
    /// The manifest floats on `latest`; pin it so history records the tag.
    PinFloating { latest: String },
    /// The manifest pins an older (or just different) tag.
    Update {
        current: String,
        latest: String,
        /// `(from, to)` majors when both tags parse and the majors differ.
        major_jump: Option<(u64, u64)>,
    },
}

impl Decision {
    /// The value to write, or `None` when the manifest stays as is.
    pub fn new_ref(&self) -> Option<&str> {
        match self {
            Decision::UpToDate => None,
            Decision::PinFloating { latest } | Decision::Update { latest, .. } => Some(latest),
        }
    }
}

/// First match wins: equal, floating sentinel, then plain update.
pub fn decide(current: &str, latest: &str) -> Decision {
    if current == latest {
        return Decision::UpToDate;
    }
    if current == FLOATING_REF {
        return Decision::PinFloating {
            latest: latest.to_string(),
        };
    }

    let major_jump = match (parse_version(current), parse_version(latest)) {
        (Some(from), Some(to)) if from.major != to.major => Some((from.major, to.major)),
        _ => None,
    };
    Decision::Update {
        current: current.to_string(),
        latest: latest.to_string(),
        major_jump,
    }
}
