//! One-call checks for functions with a single precondition.

use crate::attribution::Caller;
use crate::chain::{fail, single_category};
use crate::policy::{self, Policy};
use precond_types::IllegalArgument;
use std::fmt::Debug;

/// Check one argument under the release (or exported) category.
///
/// A passing check returns immediately without reading the policy.
#[track_caller]
pub fn check_arg<V>(
    caller: Caller,
    check: bool,
    position: u32,
    value: &V,
    condition: &str,
) -> Result<(), IllegalArgument>
where
    V: Debug + ?Sized,
{
    if check {
        return Ok(());
    }
    evaluate(caller, &policy::current(), false, position, value, condition)
}

/// Check one argument under the debug (or not-exported) category.
#[track_caller]
pub fn check_debug_arg<V>(
    caller: Caller,
    check: bool,
    position: u32,
    value: &V,
    condition: &str,
) -> Result<(), IllegalArgument>
where
    V: Debug + ?Sized,
{
    if check {
        return Ok(());
    }
    evaluate(caller, &policy::current(), true, position, value, condition)
}

/// [`check_arg`] under an explicit policy.
#[track_caller]
pub fn check_arg_with<V>(
    policy: &Policy,
    caller: Caller,
    check: bool,
    position: u32,
    value: &V,
    condition: &str,
) -> Result<(), IllegalArgument>
where
    V: Debug + ?Sized,
{
    if check {
        return Ok(());
    }
    evaluate(caller, policy, false, position, value, condition)
}

/// [`check_debug_arg`] under an explicit policy.
#[track_caller]
pub fn check_debug_arg_with<V>(
    policy: &Policy,
    caller: Caller,
    check: bool,
    position: u32,
    value: &V,
    condition: &str,
) -> Result<(), IllegalArgument>
where
    V: Debug + ?Sized,
{
    if check {
        return Ok(());
    }
    evaluate(caller, policy, true, position, value, condition)
}

#[track_caller]
fn evaluate<V>(
    caller: Caller,
    policy: &Policy,
    secondary: bool,
    position: u32,
    value: &V,
    condition: &str,
) -> Result<(), IllegalArgument>
where
    V: Debug + ?Sized,
{
    if policy.is_all_off() {
        return Ok(());
    }
    let category = single_category(caller, policy, secondary);
    let mode = policy.mode(category);
    if mode.is_off() {
        return Ok(());
    }
    Err(fail(caller, category, mode, position, value, condition))
}
