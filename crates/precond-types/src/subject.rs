use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a failing check was about: the receiver (`self`) or a positional argument.
///
/// Position `0` is reserved for the receiver; positional arguments count from `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Receiver,
    Argument(u32),
}

impl Subject {
    pub fn from_position(position: u32) -> Self {
        match position {
            0 => Subject::Receiver,
            n => Subject::Argument(n),
        }
    }

    pub fn position(self) -> u32 {
        match self {
            Subject::Receiver => 0,
            Subject::Argument(n) => n,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Receiver => f.write_str("receiver"),
            Subject::Argument(n) => write!(f, "argument {n}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("not an argument subject: {0:?} (expected 'receiver' or 'argument N' with N >= 1)")]
pub struct ParseSubjectError(pub String);

impl FromStr for Subject {
    type Err = ParseSubjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "receiver" {
            return Ok(Subject::Receiver);
        }
        let n = s
            .strip_prefix("argument ")
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|n| *n >= 1)
            .ok_or_else(|| ParseSubjectError(s.to_string()))?;
        Ok(Subject::Argument(n))
    }
}
