//! Loose release tag parsing.
//!
//! Only used to spot major-version jumps, so any tag that does not look like
//! `[v]MAJOR.MINOR.PATCH` simply yields `None`.

/// Numeric components of a release tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Parses tags like `v2026.2.9`, `1.2.3` or `v1.2.3-beta.1`.
///
/// Matching is anchored at the start only: whatever follows the patch digits
/// is ignored. An optional lowercase `v` prefix is accepted.
pub fn parse_version(tag: &str) -> Option<ReleaseVersion> {
    let rest = tag.strip_prefix('v').unwrap_or(tag);
    let (major, rest) = leading_number(rest)?;
    let rest = rest.strip_prefix('.')?;
    let (minor, rest) = leading_number(rest)?;
    let rest = rest.strip_prefix('.')?;
    let (patch, _) = leading_number(rest)?;
    Some(ReleaseVersion {
        major,
        minor,
        patch,
    })
}

/// Splits a run of ASCII digits off the front of `s`.
fn leading_number(s: &str) -> Option<(u64, &str)> {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}
