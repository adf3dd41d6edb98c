//! Repository adapters: discover Terraform modules and read their `required_version`.
//!
//! This crate is allowed to do filesystem IO. It never runs `terraform` itself.

#![forbid(unsafe_code)]

mod discover;
mod scan;

use anyhow::Context;
use camino::Utf8Path;
use rvguard_domain::model::{ModuleModel, ProjectModel, RequiredVersionDecl};
use rvguard_domain::policy::Scope;
use rvguard_types::{Location, RepoPath};

pub use discover::{DiscoveredModule, discover_modules};
pub use scan::{RequiredVersionAttr, scan_required_versions};

/// Fuzz-friendly API for testing scanner robustness without filesystem access.
pub mod fuzz {
    /// Scan arbitrary text as a `.tf` file. **Never panics** on any input.
    pub fn scan_terraform(text: &str) -> anyhow::Result<Vec<String>> {
        let found = super::scan::scan_required_versions(text)?;
        Ok(found.into_iter().map(|a| a.raw).collect())
    }
}

/// Build the in-memory project model used by the policy engine.
///
/// `repo_root` is the directory holding the root module.
pub fn build_project_model(repo_root: &Utf8Path, scope: Scope) -> anyhow::Result<ProjectModel> {
    let discovered = discover::discover_modules(repo_root, scope).context("discover modules")?;

    let mut model = ProjectModel {
        repo_root: RepoPath::from(repo_root),
        modules: Vec::with_capacity(discovered.len()),
    };

    for module in discovered {
        let mut required_versions = Vec::new();
        for file in &module.files {
            let abs = repo_root.join(file.as_str());
            let text = std::fs::read_to_string(&abs).with_context(|| format!("read {abs}"))?;
            let found = scan::scan_required_versions(&text)
                .with_context(|| format!("parse {}", file.as_str()))?;

            tracing::debug!(
                file = file.as_str(),
                constraints = found.len(),
                "scanned terraform file"
            );

            required_versions.extend(found.into_iter().map(|attr| RequiredVersionDecl {
                raw: attr.raw,
                location: Some(Location {
                    path: file.clone(),
                    line: Some(attr.line),
                    col: Some(attr.col),
                }),
            }));
        }

        model.modules.push(ModuleModel {
            path: module.path,
            files: module.files,
            required_versions,
        });
    }

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    #[test]
    fn model_carries_locations_per_file() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(
            &root.join("versions.tf"),
            "\nterraform {\n  required_version = \">= 1.3\"\n}\n",
        );
        write_file(&root.join("main.tf"), "resource \"null_resource\" \"a\" {}\n");

        let model = build_project_model(&root, Scope::Root).expect("build model");
        assert_eq!(model.modules.len(), 1);
        let module = &model.modules[0];
        assert!(module.is_root());
        assert_eq!(module.files.len(), 2);
        assert_eq!(module.required_versions.len(), 1);

        let decl = &module.required_versions[0];
        assert_eq!(decl.raw, ">= 1.3");
        let loc = decl.location.as_ref().expect("location");
        assert_eq!(loc.path.as_str(), "versions.tf");
        assert_eq!(loc.line, Some(2));
        assert_eq!(loc.col, Some(1));
    }

    #[test]
    fn decode_failure_names_the_file() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(
            &root.join("versions.tf"),
            "terraform {\n  required_version = var.tf\n}\n",
        );

        let err = build_project_model(&root, Scope::Root).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("parse versions.tf"), "{msg}");
        assert!(msg.contains("failed to decode terraform required_version"), "{msg}");
    }

    proptest! {
        #[test]
        fn scanner_never_panics(input in ".*") {
            let _ = fuzz::scan_terraform(&input);
        }

        #[test]
        fn scanner_never_panics_on_hcl_shaped_input(
            input in "[a-z_ ={}\\[\\]()\"$%#/*<\\-\n\\\\]{0,64}"
        ) {
            let _ = fuzz::scan_terraform(&input);
        }
    }
}
