use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Repo-relative path used for modules, files, and finding locations.
///
/// - always forward slashes (`/`)
/// - no leading `./`
/// - the repository root itself is `.`
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct RepoPath(String);

impl Default for RepoPath {
    fn default() -> Self {
        RepoPath::root()
    }
}

impl RepoPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while let Some(rest) = v.strip_prefix("./") {
            v = rest.to_string();
        }
        while v.len() > 1 && v.ends_with('/') {
            v.pop();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn root() -> Self {
        Self(".".to_string())
    }

    pub fn is_root(&self) -> bool {
        self.0 == "."
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_utf8_pathbuf(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.0.clone())
    }

    /// Join a segment; joining onto the root yields the bare segment.
    pub fn join(&self, segment: &str) -> RepoPath {
        if self.is_root() {
            return RepoPath::new(segment);
        }
        let base = Utf8Path::new(self.as_str());
        RepoPath::new(base.join(segment).as_str())
    }

    /// Directory containing this path (`.` for top-level entries).
    pub fn parent(&self) -> RepoPath {
        match Utf8Path::new(self.as_str()).parent() {
            Some(p) => RepoPath::new(p.as_str()),
            None => RepoPath::root(),
        }
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Utf8Path> for RepoPath {
    fn from(value: &Utf8Path) -> Self {
        RepoPath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for RepoPath {
    fn from(value: Utf8PathBuf) -> Self {
        RepoPath::new(value.as_str())
    }
}
