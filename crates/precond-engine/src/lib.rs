//! Argument precondition checks (no I/O).
//!
//! Input: already evaluated predicates plus the argument they are about.
//! Output: nothing, an [`IllegalArgument`](precond_types::IllegalArgument), or a
//! panic carrying one, depending on the [`policy`].

#![forbid(unsafe_code)]

pub mod abort;
pub mod attribution;
pub mod policy;

mod chain;
mod single;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use abort::{abort_payload, catch_abort};
pub use attribution::{Caller, Visibility};
pub use chain::Check;
pub use policy::{Axis, Category, Policy};
pub use single::{check_arg, check_arg_with, check_debug_arg, check_debug_arg_with};

/// Qualified path of the enclosing function, e.g. `my_crate::Buffer::push`.
#[macro_export]
macro_rules! function_path {
    () => {
        $crate::caller!().function()
    };
}

/// [`Caller`] identity of the enclosing function.
///
/// `caller!(pub)` marks the function as exported for the visibility axis.
#[macro_export]
macro_rules! caller {
    () => {
        $crate::Caller::from_type_name({
            fn __precond_here() {}
            $crate::attribution::type_name_of(__precond_here)
        })
    };
    (pub) => {
        $crate::caller!().with_visibility($crate::Visibility::Exported)
    };
}

/// Start a [`Check`] chain for the enclosing function.
#[macro_export]
macro_rules! check {
    () => {
        $crate::Check::start($crate::caller!())
    };
    (pub) => {
        $crate::Check::start($crate::caller!(pub))
    };
}

/// Single release-category check. Without a condition the predicate's source
/// text is used.
#[macro_export]
macro_rules! check_arg {
    ($check:expr, $position:expr, $value:expr, $condition:expr $(,)?) => {
        $crate::check_arg($crate::caller!(), $check, $position, &$value, $condition)
    };
    ($check:expr, $position:expr, $value:expr $(,)?) => {
        $crate::check_arg(
            $crate::caller!(),
            $check,
            $position,
            &$value,
            stringify!($check),
        )
    };
}

/// Single debug-category check.
#[macro_export]
macro_rules! check_debug_arg {
    ($check:expr, $position:expr, $value:expr, $condition:expr $(,)?) => {
        $crate::check_debug_arg($crate::caller!(), $check, $position, &$value, $condition)
    };
    ($check:expr, $position:expr, $value:expr $(,)?) => {
        $crate::check_debug_arg(
            $crate::caller!(),
            $check,
            $position,
            &$value,
            stringify!($check),
        )
    };
}
