//! Stable types shared across the precond workspace.
//!
//! This crate is intentionally boring:
//! - the tri-valued check [`Mode`]
//! - the [`IllegalArgument`] failure record and its rendering
//! - the argument [`Subject`] naming used in messages

#![forbid(unsafe_code)]

pub mod failure;
pub mod mode;
pub mod subject;

pub use failure::IllegalArgument;
pub use mode::{Mode, ParseModeError};
pub use subject::{ParseSubjectError, Subject};
