//! Compact, chainable argument precondition checks.
//!
//! ```
//! use precond::{IllegalArgument, check};
//!
//! #[derive(Debug)]
//! struct Gauge {
//!     level: Option<i32>,
//! }
//!
//! impl Gauge {
//!     /// `level` must be greater than 10 but not 12.
//!     #[track_caller]
//!     fn set(&mut self, level: i32) -> Result<(), IllegalArgument> {
//!         check!()
//!             .arg(level > 10, 1, &level, ">10")
//!             .arg(level != 12, 1, &level, "!=12")
//!             .finish()?;
//!         self.level = Some(level);
//!         Ok(())
//!     }
//! }
//!
//! let mut gauge = Gauge { level: None };
//! let err = gauge.set(5).unwrap_err();
//! assert!(err.to_string().starts_with("illegal argument error: argument 1 of "));
//! assert!(gauge.set(11).is_ok());
//! ```
//!
//! Whether a failing check is skipped, returned, or panics is decided by the
//! process-wide [`Policy`]: two [`Mode`]s, one per category. On the default
//! build axis, checks belong to the release category until
//! [`Check::debug`] moves the rest of the chain to the debug category.
//! Configure it once at startup with [`configure`], [`configure_from_env`] or
//! [`install`].
//!
//! Failures name the function that owns the check and a source location.
//!
//! # Locations
//!
//! A check reports the line of the code that called the checked function only
//! when that function is marked `#[track_caller]`, as `Gauge::set` is above.
//! Without the attribute the reported line is the check's own line inside the
//! function body. Put `#[track_caller]` on every function that validates its
//! arguments with this crate so failures blame the caller.

#![forbid(unsafe_code)]

pub use precond_engine::policy;
pub use precond_engine::{
    Axis, Caller, Category, Check, Policy, Visibility, abort_payload, catch_abort, check_arg,
    check_arg_with, check_debug_arg, check_debug_arg_with,
};
pub use precond_engine::{caller, check, function_path};
pub use precond_settings::{
    Overrides, PrecondConfigV1, config_schema_json, parse_config_toml, resolve_config,
};
pub use precond_types::{IllegalArgument, Mode, Subject};

use anyhow::Context;
use tracing::debug;

pub const ENV_PROFILE: &str = "PRECOND_PROFILE";
pub const ENV_AXIS: &str = "PRECOND_AXIS";
pub const ENV_PRIMARY: &str = "PRECOND_PRIMARY";
pub const ENV_SECONDARY: &str = "PRECOND_SECONDARY";

/// Install `policy` process-wide.
pub fn install(policy: Policy) {
    policy::set(policy);
}

/// Parse `precond.toml` text, apply environment overrides, and install the result.
pub fn configure(config: &str) -> anyhow::Result<Policy> {
    configure_with(config, env_overrides())
}

/// Like [`configure`] with explicit overrides instead of the environment.
pub fn configure_with(config: &str, overrides: Overrides) -> anyhow::Result<Policy> {
    let cfg = parse_config_toml(config).context("failed to parse precond config")?;
    let policy = resolve_config(cfg, overrides)?;
    install(policy);
    Ok(policy)
}

/// Resolve the default profile plus environment overrides and install it.
pub fn configure_from_env() -> anyhow::Result<Policy> {
    configure("")
}

/// Overrides read from `PRECOND_PROFILE`, `PRECOND_AXIS`, `PRECOND_PRIMARY`
/// and `PRECOND_SECONDARY`. Unset or non-UTF-8 variables are ignored.
pub fn env_overrides() -> Overrides {
    let var = |name: &str| {
        let value = std::env::var(name).ok()?;
        debug!(name, value = value.as_str(), "precond override from environment");
        Some(value)
    };
    Overrides {
        profile: var(ENV_PROFILE),
        axis: var(ENV_AXIS),
        primary: var(ENV_PRIMARY),
        secondary: var(ENV_SECONDARY),
    }
}
