use crate::model::{PrecondConfigV1, SCHEMA_CONFIG_V1};
use crate::presets::{PROFILES, default_profile, preset};
use anyhow::Context;
use precond_engine::{Axis, Policy};
use precond_types::Mode;

/// Values that win over the config file (typically from the environment).
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub axis: Option<String>,
    /// Mode for the primary category of the resolved axis.
    pub primary: Option<String>,
    /// Mode for the secondary category of the resolved axis.
    pub secondary: Option<String>,
}

pub fn resolve_config(cfg: PrecondConfigV1, overrides: Overrides) -> anyhow::Result<Policy> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| default_profile().to_string());
    let (mut primary, mut secondary) = preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected {})",
            PROFILES.join("|")
        )
    })?;

    let axis = match overrides.axis.as_deref().or(cfg.axis.as_deref()) {
        Some(axis) => parse_axis(axis)?,
        None => Axis::Build,
    };

    // The two axes are alternative products; a file never mixes them.
    let modes = &cfg.modes;
    if modes.has_build_keys() && modes.has_visibility_keys() {
        anyhow::bail!(
            "[modes] mixes build keys (release/debug) with visibility keys (exported/not_exported)"
        );
    }
    let (primary_key, secondary_key, primary_cfg, secondary_cfg, foreign) = match axis {
        Axis::Build => (
            "release",
            "debug",
            &modes.release,
            &modes.debug,
            modes.has_visibility_keys(),
        ),
        Axis::Visibility => (
            "exported",
            "not_exported",
            &modes.exported,
            &modes.not_exported,
            modes.has_build_keys(),
        ),
    };
    if foreign {
        anyhow::bail!(
            "[modes] keys do not belong to axis '{}' (expected {primary_key}/{secondary_key})",
            axis.as_str()
        );
    }

    if let Some(v) = primary_cfg {
        primary = parse_mode(v).with_context(|| format!("invalid mode for modes.{primary_key}"))?;
    }
    if let Some(v) = secondary_cfg {
        secondary =
            parse_mode(v).with_context(|| format!("invalid mode for modes.{secondary_key}"))?;
    }

    if let Some(v) = overrides.primary.as_deref() {
        primary = parse_mode(v).context("invalid primary mode override")?;
    }
    if let Some(v) = overrides.secondary.as_deref() {
        secondary = parse_mode(v).context("invalid secondary mode override")?;
    }

    Ok(Policy {
        axis,
        primary,
        secondary,
    })
}

fn parse_axis(v: &str) -> anyhow::Result<Axis> {
    match v {
        "build" => Ok(Axis::Build),
        "visibility" => Ok(Axis::Visibility),
        other => anyhow::bail!("unknown axis: {other} (expected 'build' or 'visibility')"),
    }
}

fn parse_mode(v: &str) -> anyhow::Result<Mode> {
    Ok(v.parse::<Mode>()?)
}
