//! Shared test utilities for the precond workspace.
//!
//! The process-wide policy is shared by every test in a binary, and the test
//! harness runs tests on several threads. Tests that install a policy hold a
//! [`PolicyGuard`] so they never observe each other's configuration.

use precond_engine::{Policy, policy};
use std::sync::{Mutex, MutexGuard};

static POLICY_LOCK: Mutex<()> = Mutex::new(());

/// Exclusive access to the process-wide policy for the guard's lifetime.
///
/// The previous policy is restored on drop.
pub struct PolicyGuard {
    previous: Policy,
    _lock: MutexGuard<'static, ()>,
}

impl PolicyGuard {
    pub fn install(policy: Policy) -> Self {
        // A test that panicked while holding the lock leaves nothing half-written.
        let lock = POLICY_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let previous = policy::current();
        policy::set(policy);
        Self {
            previous,
            _lock: lock,
        }
    }

    /// Swap the policy without releasing the lock.
    pub fn set(&self, policy: Policy) {
        policy::set(policy);
    }
}

impl Drop for PolicyGuard {
    fn drop(&mut self) {
        policy::set(self.previous);
    }
}

/// Drop the ` at <file>:<line>` suffix of a rendered failure.
///
/// Locations depend on the checkout path and on line numbers; golden
/// comparisons only care about the message.
pub fn strip_location(message: &str) -> &str {
    match message.rfind(" at ") {
        Some(i) => &message[..i],
        None => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use precond_engine::Axis;

    #[test]
    fn strip_location_keeps_message_body() {
        let msg = "illegal argument error: argument 1 of a::f is '5' but must be >10 at src/a.rs:3";
        assert_eq!(
            strip_location(msg),
            "illegal argument error: argument 1 of a::f is '5' but must be >10"
        );
        assert_eq!(strip_location("no location"), "no location");
    }

    #[test]
    fn guard_restores_previous_policy() {
        let before = policy::current();
        {
            let _guard = PolicyGuard::install(Policy {
                axis: Axis::Visibility,
                ..Policy::DEFAULT
            });
            assert_eq!(policy::current().axis, Axis::Visibility);
        }
        assert_eq!(policy::current(), before);
    }
}
