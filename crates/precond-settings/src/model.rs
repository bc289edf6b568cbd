use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "precond.config.v1";

/// `precond.toml` schema v1.
///
/// This is a *user-facing* config model: values stay strings until resolution so
/// error messages can name the offending key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PrecondConfigV1 {
    /// Optional schema string for tooling (`precond.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset: `development`, `production`, `strict` or `off`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Category axis: `build` (default) or `visibility`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<String>,

    #[serde(default)]
    pub modes: ModesConfig,
}

/// Per-category overrides of the preset modes: `off`, `error` or `panic`.
///
/// `release`/`debug` belong to the build axis, `exported`/`not_exported` to the
/// visibility axis. A file may only use the keys of one axis.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ModesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_exported: Option<String>,
}

impl ModesConfig {
    pub fn has_build_keys(&self) -> bool {
        self.release.is_some() || self.debug.is_some()
    }

    pub fn has_visibility_keys(&self) -> bool {
        self.exported.is_some() || self.not_exported.is_some()
    }
}
