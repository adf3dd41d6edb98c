//! Config parsing and profile resolution.
//!
//! IO-free: configuration arrives as a string and leaves as the domain's
//! `EffectiveConfig`, with the version range already built and validated.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, RvguardConfigV1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `rvguard.toml` into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<RvguardConfigV1> {
    let cfg: RvguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (profile + config + overrides).
pub fn resolve_config(
    cfg: RvguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema for `rvguard.toml`.
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(RvguardConfigV1)
}
