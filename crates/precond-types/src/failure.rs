use crate::Subject;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned (or carried by a panic) when an argument check fails.
///
/// The record is immutable once built. `value` holds the offending argument
/// already rendered with its `Debug` representation.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize, JsonSchema)]
#[error(
    "illegal argument error: {} of {function} is '{value}' but must be {condition} at {file}:{line}",
    self.subject()
)]
pub struct IllegalArgument {
    function: String,
    file: String,
    line: u32,
    column: u32,
    argument: u32,
    value: String,
    condition: String,
}

impl IllegalArgument {
    pub fn new(
        function: impl Into<String>,
        file: impl Into<String>,
        line: u32,
        column: u32,
        argument: u32,
        value: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
            column,
            argument,
            value: value.into(),
            condition: condition.into(),
        }
    }

    /// Fully qualified path of the function whose precondition was violated.
    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Argument position; `0` denotes the receiver.
    pub fn argument(&self) -> u32 {
        self.argument
    }

    pub fn subject(&self) -> Subject {
        Subject::from_position(self.argument)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }
}
