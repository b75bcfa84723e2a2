//! Reading and rewriting the pinned ref line in the Dockerfile.
//!
//! The line must look exactly like `ARG OPENCLAW_GIT_REF=<value>` and sit
//! between two newline characters. Everything outside the value is left
//! untouched when the ref is rewritten.

use anyhow::{Context, Result};
use std::ops::Range;
use std::path::Path;

use crate::error::BumpError;

/// Text that introduces the pinned ref, including the preceding newline.
const MARKER: &str = "\nARG OPENCLAW_GIT_REF=";

/// Default manifest location, relative to the working directory.
pub const DEFAULT_MANIFEST_PATH: &str = "Dockerfile";

/// Byte range of the raw (untrimmed) value on the first well-formed marker line.
///
/// A marker occurrence only counts when its value is non-empty and is
/// followed by a newline; otherwise the search moves on to the next one.
fn locate_value(text: &str) -> Option<Range<usize>> {
    text.match_indices(MARKER).find_map(|(idx, _)| {
        let start = idx + MARKER.len();
        let len = text[start..].find('\n')?;
        (len > 0).then(|| start..start + len)
    })
}

/// Returns the pinned ref, trimmed, or `None` when no usable marker line exists.
pub fn read_ref(text: &str) -> Option<String> {
    let range = locate_value(text)?;
    let value = text[range].trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Returns `text` with the pinned ref replaced by `next`.
///
/// Whitespace around the old value (a trailing `\r` in CRLF files, for
/// instance) is kept, so `replace_ref(t, &read_ref(t)?)` gives back `t`.
/// Only a line feed or a blank value is refused; a lone `\r` stays inside
/// the newline-bounded line.
pub fn replace_ref(text: &str, next: &str) -> Result<String, BumpError> {
    if next.trim().is_empty() || next.contains('\n') {
        return Err(BumpError::ManifestFormat(format!(
            "Refusing to write invalid OPENCLAW_GIT_REF value {next:?}"
        )));
    }

    let range = locate_value(text).ok_or_else(|| {
        BumpError::ManifestFormat("Could not find OPENCLAW_GIT_REF line".to_string())
    })?;

    let raw = &text[range.clone()];
    let lead = raw.len() - raw.trim_start().len();
    let core = if raw.trim().is_empty() {
        range
    } else {
        range.start + lead..range.start + raw.trim_end().len()
    };

    let mut out = String::with_capacity(text.len() + next.len());
    out.push_str(&text[..core.start]);
    out.push_str(next);
    out.push_str(&text[core.end..]);
    Ok(out)
}

/// Reads the whole manifest as UTF-8.
pub fn load(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest at {}", path.display()))
}

/// Writes the whole manifest back in one call.
pub fn save(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write manifest at {}", path.display()))
}
