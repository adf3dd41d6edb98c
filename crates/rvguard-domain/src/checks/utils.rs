use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compile allowlist globs. Patterns are validated in rvguard-settings; any
/// that still fail to compile are dropped with a warning.
pub fn build_allowlist(allow: &[String]) -> Option<GlobSet> {
    if allow.is_empty() {
        return None;
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in allow {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(err) => tracing::warn!(%pattern, %err, "ignoring invalid allow pattern"),
        }
    }
    builder.build().ok()
}

pub fn is_allowed(allow: Option<&GlobSet>, value: &str) -> bool {
    allow.map(|set| set.is_match(value)).unwrap_or(false)
}
