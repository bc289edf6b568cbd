use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What happens when a check in a given category fails.
///
/// Mode is intentionally small: it maps cleanly to build profiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Checks are not evaluated at all.
    Off,
    /// Checks are evaluated and a failure is returned to the caller.
    Error,
    /// Checks are evaluated and a failure unwinds the current thread.
    Panic,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Off => "off",
            Mode::Error => "error",
            Mode::Panic => "panic",
        }
    }

    pub fn is_off(self) -> bool {
        self == Mode::Off
    }

    /// Compact encoding used by the process-wide policy store.
    pub const fn to_u8(self) -> u8 {
        match self {
            Mode::Off => 0,
            Mode::Error => 1,
            Mode::Panic => 2,
        }
    }

    /// Inverse of [`Mode::to_u8`]. Unknown values decode as `Off`.
    pub const fn from_u8(v: u8) -> Mode {
        match v {
            1 => Mode::Error,
            2 => Mode::Panic,
            _ => Mode::Off,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode: {0} (expected off|error|panic)")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "disabled" => Ok(Mode::Off),
            "error" | "report" => Ok(Mode::Error),
            "panic" | "abort" => Ok(Mode::Panic),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
