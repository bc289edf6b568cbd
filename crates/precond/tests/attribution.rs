//! Function names and source locations reported by failing checks.

use precond::{
    Caller, IllegalArgument, Mode, Policy, Visibility, caller, check, check_arg, check_debug_arg,
    function_path,
};
use precond_test_util::PolicyGuard;

#[track_caller]
fn positive(a: i32) -> Result<(), IllegalArgument> {
    check!().arg(a > 0, 1, &a, ">0").finish()
}

fn positive_untracked(a: i32) -> (Result<(), IllegalArgument>, u32) {
    let line = line!() + 1;
    (check!().arg(a > 0, 1, &a, ">0").finish(), line)
}

fn single(a: i32) -> Result<(), IllegalArgument> {
    check_arg!(a > 10, 1, a)
}

fn single_debug(a: &str) -> Result<(), IllegalArgument> {
    check_debug_arg!(!a.is_empty(), 1, a, "non-empty")
}

mod nested {
    pub struct Widget;

    impl Widget {
        pub fn resize(&self, w: u32) -> Result<(), precond::IllegalArgument> {
            precond::check!().arg(w > 0, 1, &w, ">0").finish()
        }
    }
}

#[test]
fn track_caller_blames_the_call_site() {
    let _guard = PolicyGuard::install(Policy::build(Mode::Error, Mode::Panic));
    let line = line!() + 1;
    let err = positive(-1).unwrap_err();
    assert_eq!(err.line(), line);
    assert_eq!(err.file(), file!());
    assert_eq!(err.function(), "attribution::positive");
}

#[test]
fn untracked_functions_report_the_check_itself() {
    let _guard = PolicyGuard::install(Policy::build(Mode::Error, Mode::Panic));
    let (result, line) = positive_untracked(0);
    assert_eq!(result.unwrap_err().line(), line);
}

#[test]
fn methods_are_qualified_by_module_and_type() {
    let _guard = PolicyGuard::install(Policy::build(Mode::Error, Mode::Panic));
    let err = nested::Widget.resize(0).unwrap_err();
    assert_eq!(err.function(), "attribution::nested::Widget::resize");
}

#[test]
fn single_shot_macro_defaults_condition_to_predicate_text() {
    let _guard = PolicyGuard::install(Policy::build(Mode::Error, Mode::Panic));
    assert!(single(11).is_ok());
    let err = single(5).unwrap_err();
    assert_eq!(err.condition(), "a > 10");
    assert_eq!(err.function(), "attribution::single");
}

#[test]
fn single_shot_debug_macro_follows_debug_mode() {
    let _guard = PolicyGuard::install(Policy::build(Mode::Off, Mode::Error));
    let err = single_debug("").unwrap_err();
    assert_eq!(err.value(), "\"\"");
    assert_eq!(err.condition(), "non-empty");
}

#[test]
fn function_path_names_the_enclosing_function() {
    assert_eq!(
        function_path!(),
        "attribution::function_path_names_the_enclosing_function"
    );
}

#[test]
fn visibility_axis_can_be_pinned_with_pub() {
    fn internal_looking() -> Caller {
        caller!(pub)
    }
    assert_eq!(internal_looking().visibility(), Visibility::Exported);

    let _guard = PolicyGuard::install(Policy::visibility(Mode::Error, Mode::Off));
    let exported = check!(pub).arg(false, 1, &0, ">0").finish();
    let internal = check!().arg(false, 1, &0, ">0").finish();
    assert!(exported.is_err());
    assert!(internal.is_ok());
}
