use rvguard_types::{Location, RepoPath};

/// Everything the check engine sees about a repository.
#[derive(Clone, Debug, Default)]
pub struct ProjectModel {
    pub repo_root: RepoPath,

    /// Terraform modules in scope, root first then sorted by path.
    pub modules: Vec<ModuleModel>,
}

/// A directory holding `.tf` files.
#[derive(Clone, Debug, Default)]
pub struct ModuleModel {
    /// Module directory (`.` for the root module).
    pub path: RepoPath,
    pub files: Vec<RepoPath>,
    /// `terraform { required_version = ... }` occurrences, in file order.
    pub required_versions: Vec<RequiredVersionDecl>,
}

#[derive(Clone, Debug)]
pub struct RequiredVersionDecl {
    /// The constraint string exactly as written (without quotes).
    pub raw: String,
    pub location: Option<Location>,
}

impl ModuleModel {
    pub fn is_root(&self) -> bool {
        self.path.is_root()
    }
}
