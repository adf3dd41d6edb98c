use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use rvguard_domain::policy::Scope;
use rvguard_types::RepoPath;
use std::collections::BTreeMap;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Directories never descended into.
const SKIPPED_DIRS: &[&str] = &[".terraform", ".git"];

/// A directory holding `.tf` files, with the files in sorted order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveredModule {
    pub path: RepoPath,
    pub files: Vec<RepoPath>,
}

/// Discover Terraform modules under `repo_root`.
///
/// Behavior:
/// - `Scope::Root`: only the `.tf` files directly in `repo_root`.
/// - `Scope::All`: every directory containing `.tf` files, skipping `.terraform/` and `.git/`.
///
/// The root module (when it has `.tf` files) comes first; the rest are sorted by path.
pub fn discover_modules(
    repo_root: &Utf8Path,
    scope: Scope,
) -> anyhow::Result<Vec<DiscoveredModule>> {
    if !repo_root.is_dir() {
        bail!("repository root is not a directory: {repo_root}");
    }

    let max_depth = match scope {
        Scope::Root => 1,
        Scope::All => usize::MAX,
    };

    let mut by_dir: BTreeMap<RepoPath, Vec<RepoPath>> = BTreeMap::new();
    let walker = WalkDir::new(repo_root)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e));
    for entry in walker {
        let entry = entry.with_context(|| format!("walk {repo_root}"))?;
        if !entry.file_type().is_file() || !is_tf_file(&entry) {
            continue;
        }
        let Some(abs) = pathbuf_to_utf8(entry.path().to_path_buf()) else {
            bail!(
                "terraform file path is not valid UTF-8: {}",
                entry.path().display()
            );
        };
        let rel = abs.strip_prefix(repo_root).unwrap_or(abs.as_path());
        let file = RepoPath::new(rel.as_str());
        by_dir.entry(file.parent()).or_default().push(file);
    }

    let mut out: Vec<DiscoveredModule> = by_dir
        .into_iter()
        .map(|(path, mut files)| {
            files.sort();
            DiscoveredModule { path, files }
        })
        .collect();

    // Root first regardless of how `.` sorts against punctuation.
    out.sort_by(|a, b| {
        b.path
            .is_root()
            .cmp(&a.path.is_root())
            .then_with(|| a.path.cmp(&b.path))
    });

    tracing::debug!(
        modules = out.len(),
        scope = scope.as_str(),
        "discovered terraform modules"
    );

    Ok(out)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

/// Matched on raw bytes so a non-UTF-8 name is reported rather than skipped.
fn is_tf_file(entry: &DirEntry) -> bool {
    entry.file_name().as_encoded_bytes().ends_with(b".tf")
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
