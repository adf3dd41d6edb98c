//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_TERRAFORM_REQUIRED_VERSION: &str = "terraform.required_version";

// Codes: terraform.required_version
pub const CODE_VERSION_OUT_OF_RANGE: &str = "version_out_of_range";
pub const CODE_INVALID_CONSTRAINT: &str = "invalid_constraint";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

/// Reference documentation attached to `terraform.required_version` findings.
pub const URL_TERRAFORM_REQUIRED_VERSION: &str =
    "https://googlecloudplatform.github.io/samples-style-guide/#language-specific";
