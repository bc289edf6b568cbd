//! Short-circuiting check chains.

use crate::abort::abort;
use crate::attribution::{self, Caller, Visibility};
use crate::policy::{self, Axis, Category, Policy};
use precond_types::{IllegalArgument, Mode};
use std::fmt::Debug;
use std::panic::Location;
use tracing::{debug, trace};

/// A short-circuiting chain of argument checks.
///
/// Start one with `check!()` (or [`Check::start`]) at the top of a function,
/// add one call per precondition, and end with [`Check::finish`]:
///
/// ```
/// use precond_engine::check;
/// use precond_types::IllegalArgument;
///
/// fn scale(factor: i32) -> Result<i32, IllegalArgument> {
///     check!()
///         .arg(factor > 0, 1, &factor, ">0")
///         .arg(factor < 100, 1, &factor, "<100")
///         .finish()?;
///     Ok(factor * 2)
/// }
///
/// assert!(scale(5).is_ok());
/// assert!(scale(-5).is_err());
/// ```
///
/// The first failing check wins; every later check is skipped. Nothing is
/// attributed or allocated unless a check fails.
#[must_use = "a check chain reports nothing until `finish` or `failure` is called"]
#[derive(Debug)]
pub struct Check {
    caller: Caller,
    policy: Policy,
    failure: Option<Box<IllegalArgument>>,
    execute: bool,
    category: Category,
    visibility: Option<Visibility>,
}

impl Check {
    /// Start a chain under the current process-wide policy.
    pub fn start(caller: Caller) -> Self {
        Self::with_policy(caller, policy::current())
    }

    /// Start a chain under an explicit policy snapshot.
    pub fn with_policy(caller: Caller, policy: Policy) -> Self {
        let execute = match policy.axis {
            Axis::Build => !policy.primary.is_off(),
            Axis::Visibility => !policy.is_all_off(),
        };
        Self {
            caller,
            policy,
            failure: None,
            execute,
            category: policy.primary_category(),
            visibility: None,
        }
    }

    /// Check positional argument `position` (1-based).
    ///
    /// `check` is the already evaluated precondition, `value` the argument
    /// under test and `condition` a short description such as `">10"`.
    #[track_caller]
    pub fn arg<V>(mut self, check: bool, position: u32, value: &V, condition: &str) -> Self
    where
        V: Debug + ?Sized,
    {
        self.process(check, position, value, condition);
        self
    }

    /// Check the receiver. Reported as `receiver` rather than a position.
    #[track_caller]
    pub fn recv<V>(mut self, check: bool, value: &V, condition: &str) -> Self
    where
        V: Debug + ?Sized,
    {
        self.process(check, 0, value, condition);
        self
    }

    /// Govern the remaining checks by the debug mode.
    ///
    /// One-way and idempotent. Has no effect on the visibility axis, where the
    /// category follows from the function name.
    pub fn debug(mut self) -> Self {
        if self.policy.axis != Axis::Build || self.category == Category::Debug {
            return self;
        }
        self.category = Category::Debug;
        if self.failure.is_none() {
            self.execute = !self.policy.secondary.is_off();
        }
        trace!(execute = self.execute, "check chain switched to debug category");
        self
    }

    /// Panic with the pending failure, whatever the category mode says.
    ///
    /// No-op while the chain holds no failure.
    pub fn abort_if_failed(mut self) -> Self {
        if let Some(failure) = self.failure.take() {
            abort(*failure);
        }
        self
    }

    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Category governing the next check in the chain.
    pub fn category(&self) -> Category {
        match self.policy.axis {
            Axis::Build => self.category,
            Axis::Visibility => {
                visibility_category(self.visibility.unwrap_or_else(|| self.caller.visibility()))
            }
        }
    }

    pub fn failure(&self) -> Option<&IllegalArgument> {
        self.failure.as_deref()
    }

    /// First failure in the chain, or `Ok(())`.
    pub fn finish(self) -> Result<(), IllegalArgument> {
        match self.failure {
            Some(failure) => Err(*failure),
            None => Ok(()),
        }
    }

    #[track_caller]
    fn process<V>(&mut self, check: bool, position: u32, value: &V, condition: &str)
    where
        V: Debug + ?Sized,
    {
        if check || self.failure.is_some() || !self.execute {
            return;
        }

        let category = self.resolve_category();
        let mode = self.policy.mode(category);
        if mode.is_off() {
            return;
        }

        self.execute = false;
        let failure = fail(self.caller, category, mode, position, value, condition);
        self.failure = Some(Box::new(failure));
    }

    fn resolve_category(&mut self) -> Category {
        match self.policy.axis {
            Axis::Build => self.category,
            Axis::Visibility => {
                let caller = self.caller;
                let v = *self.visibility.get_or_insert_with(|| caller.visibility());
                visibility_category(v)
            }
        }
    }
}

fn visibility_category(v: Visibility) -> Category {
    match v {
        Visibility::Exported => Category::Exported,
        Visibility::NotExported => Category::NotExported,
    }
}

/// Attribute a failed check and apply `mode` to it.
///
/// Returns the record under `Mode::Error`; never returns under `Mode::Panic`.
#[track_caller]
pub(crate) fn fail<V>(
    caller: Caller,
    category: Category,
    mode: Mode,
    position: u32,
    value: &V,
    condition: &str,
) -> IllegalArgument
where
    V: Debug + ?Sized,
{
    let failure = attribution::attribute(caller, Location::caller(), position, value, condition);
    debug!(
        function = failure.function(),
        category = category.as_str(),
        mode = mode.as_str(),
        "precondition failed"
    );
    if mode == Mode::Panic {
        abort(failure);
    }
    failure
}

/// Resolve the category a lone check falls under.
pub(crate) fn single_category(caller: Caller, policy: &Policy, secondary: bool) -> Category {
    match policy.axis {
        Axis::Build if secondary => Category::Debug,
        Axis::Build => Category::Release,
        Axis::Visibility => visibility_category(caller.visibility()),
    }
}
