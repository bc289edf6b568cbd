//! Panic escalation for failed checks.
//!
//! A panicking check unwinds with the [`IllegalArgument`] itself as payload.
//! Supervisors recover it with [`catch_abort`] or [`abort_payload`].

use precond_types::IllegalArgument;
use std::any::Any;
use std::panic::{self, UnwindSafe};
use tracing::error;

/// Unwind the current thread carrying `failure`.
///
/// The failure is logged first: the default panic hook cannot print a
/// non-string payload.
pub fn abort(failure: IllegalArgument) -> ! {
    error!(
        function = failure.function(),
        file = failure.file(),
        line = failure.line(),
        "{failure}"
    );
    panic::panic_any(failure)
}

/// Downcast a panic payload produced by [`abort`].
pub fn abort_payload(payload: &(dyn Any + Send)) -> Option<&IllegalArgument> {
    payload.downcast_ref::<IllegalArgument>()
}

/// Run `f`, turning a precondition panic into `Err`.
///
/// Panics that do not carry an [`IllegalArgument`] keep unwinding.
pub fn catch_abort<F, R>(f: F) -> Result<R, IllegalArgument>
where
    F: FnOnce() -> R + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(r) => Ok(r),
        Err(payload) => match payload.downcast::<IllegalArgument>() {
            Ok(failure) => Err(*failure),
            Err(other) => panic::resume_unwind(other),
        },
    }
}
