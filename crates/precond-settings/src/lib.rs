//! Config parsing and profile resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{ModesConfig, PrecondConfigV1, SCHEMA_CONFIG_V1};
pub use presets::{PROFILES, default_profile, preset};
pub use resolve::Overrides;

use precond_engine::Policy;

/// Parse `precond.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PrecondConfigV1> {
    let cfg: PrecondConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the policy to install (profile + overrides + per-category modes).
pub fn resolve_config(cfg: PrecondConfigV1, overrides: Overrides) -> anyhow::Result<Policy> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema of the config file, for editor tooling.
pub fn config_schema_json() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(PrecondConfigV1);
    Ok(serde_json::to_string_pretty(&schema)?)
}
