//! Property-based tests for check chains.
//!
//! These tests use proptest to verify invariants around:
//! - policy independence of passing checks
//! - Off / Error / Panic semantics of failing checks
//! - short-circuiting and the one-way debug switch

use crate::abort::catch_abort;
use crate::attribution::Caller;
use crate::chain::Check;
use crate::policy::{Category, Policy};
use crate::single::{check_arg_with, check_debug_arg_with};
use crate::test_support::{MODES, named};
use precond_types::{Mode, Subject};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_mode() -> impl Strategy<Value = Mode> {
    prop::sample::select(MODES.to_vec())
}

fn arb_policy() -> impl Strategy<Value = Policy> {
    prop_oneof![
        (arb_mode(), arb_mode()).prop_map(|(r, d)| Policy::build(r, d)),
        (arb_mode(), arb_mode()).prop_map(|(e, n)| Policy::visibility(e, n)),
    ]
}

/// A later check in a chain: (predicate, position, value, condition).
fn arb_check() -> impl Strategy<Value = (bool, u32, i64, String)> {
    (
        any::<bool>(),
        0u32..8,
        any::<i64>(),
        "[a-z<>=!0-9 ]{1,12}",
    )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn passing_checks_are_policy_independent(
        policy in arb_policy(),
        checks in prop::collection::vec((0u32..8, any::<i64>()), 0..10),
    ) {
        // An empty identity panics if attribution ever runs.
        let mut chain = Check::with_policy(Caller::named(""), policy);
        for (position, value) in &checks {
            chain = chain.arg(true, *position, value, "holds");
        }
        prop_assert!(chain.debug().recv(true, &(), "holds").finish().is_ok());
        prop_assert!(check_arg_with(&policy, Caller::named(""), true, 1, &0, "holds").is_ok());
        prop_assert!(check_debug_arg_with(&policy, Caller::named(""), true, 1, &0, "holds").is_ok());
    }

    #[test]
    fn failing_release_check_follows_its_mode(
        release in arb_mode(),
        debug in arb_mode(),
        position in 0u32..8,
        value in any::<i64>(),
    ) {
        let policy = Policy::build(release, debug);
        let outcome = catch_abort(|| {
            Check::with_policy(named(), policy)
                .arg(false, position, &value, "must hold")
                .finish()
        });
        match release {
            Mode::Off => prop_assert_eq!(outcome, Ok(Ok(()))),
            Mode::Error => {
                let failure = outcome.unwrap().unwrap_err();
                prop_assert_eq!(failure.subject(), Subject::from_position(position));
                prop_assert_eq!(failure.value(), value.to_string());
            }
            Mode::Panic => {
                let failure = outcome.unwrap_err();
                prop_assert_eq!(failure.argument(), position);
            }
        }
    }

    #[test]
    fn first_failure_is_never_overwritten(
        first_position in 1u32..8,
        later in prop::collection::vec(arb_check(), 0..12),
        switch_at in 0usize..12,
    ) {
        let policy = Policy::build(Mode::Error, Mode::Error);
        let mut chain = Check::with_policy(named(), policy).arg(false, first_position, &-1, "first");
        for (i, (check, position, value, condition)) in later.iter().enumerate() {
            if i == switch_at {
                chain = chain.debug();
            }
            chain = chain.arg(*check, *position, value, condition);
        }
        let failure = chain.finish().unwrap_err();
        prop_assert_eq!(failure.argument(), first_position);
        prop_assert_eq!(failure.condition(), "first");
        prop_assert_eq!(failure.value(), "-1");
    }

    #[test]
    fn debug_switch_selects_the_secondary_mode(
        release in arb_mode(),
        debug in arb_mode(),
        switches in 1usize..4,
    ) {
        let policy = Policy::build(release, debug);
        let outcome = catch_abort(|| {
            let mut chain = Check::with_policy(named(), policy);
            for _ in 0..switches {
                chain = chain.debug();
            }
            assert_eq!(chain.category(), Category::Debug);
            chain.arg(false, 1, &0, "after switch").finish()
        });
        match debug {
            Mode::Off => prop_assert_eq!(outcome, Ok(Ok(()))),
            Mode::Error => prop_assert!(matches!(outcome, Ok(Err(_)))),
            Mode::Panic => prop_assert!(outcome.is_err()),
        }
    }

    #[test]
    fn subject_round_trips_through_rendering(position in any::<u32>()) {
        let failure = check_arg_with(
            &Policy::build(Mode::Error, Mode::Off),
            named(),
            false,
            position,
            &position,
            "anything",
        )
        .unwrap_err();
        let msg = failure.to_string();
        let rest = msg.strip_prefix("illegal argument error: ").unwrap();
        let (subject, _) = rest.split_once(" of ").unwrap();
        let parsed: Subject = subject.parse().unwrap();
        prop_assert_eq!(parsed.position(), position);
        prop_assert_eq!(subject == "receiver", position == 0);
    }
}
