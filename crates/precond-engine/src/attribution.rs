//! Caller attribution: which function's precondition failed, and where it was called.
//!
//! Function identity comes from `std::any::type_name` of an item nested in the
//! checked function (see the `caller!` macro). The call site comes from
//! `#[track_caller]`: every public check method carries it, so the reported
//! location is the check itself, or the caller of the checked function when
//! that function is `#[track_caller]` too.

use precond_types::IllegalArgument;
use std::fmt::Debug;
use std::panic::Location;

/// Name of the marker item the `caller!` macro nests in the checked function.
pub const MARKER: &str = "__precond_here";

const CLOSURE: &str = "{{closure}}";

/// Identity of the function that owns a check chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caller {
    path: &'static str,
    visibility: Option<Visibility>,
}

impl Caller {
    /// Built by `caller!()` from the type name of its marker item. Cleanup is
    /// deferred until a check actually fails.
    pub const fn from_type_name(raw: &'static str) -> Self {
        Self {
            path: raw,
            visibility: None,
        }
    }

    /// Explicit identity for call sites that prefer to name themselves.
    pub const fn named(path: &'static str) -> Self {
        Self {
            path,
            visibility: None,
        }
    }

    /// Pin the visibility instead of deriving it from the name.
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Qualified function path with marker and closure segments removed.
    ///
    /// # Panics
    ///
    /// Panics with an internal fault when no function name can be recovered.
    pub fn function(&self) -> &'static str {
        let path = clean_path(self.path);
        if path.is_empty() {
            panic!(
                "internal fault: cannot attribute check to a function (raw name {:?})",
                self.path
            );
        }
        path
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility.unwrap_or_else(|| Visibility::of(self.function()))
    }
}

/// Whether a function counts as part of the public surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    Exported,
    NotExported,
}

impl Visibility {
    /// Leading-case rule: the last path segment starting with an uppercase
    /// letter is exported.
    pub fn of(function: &str) -> Visibility {
        let name = function.rsplit("::").next().unwrap_or(function);
        let name = name.strip_prefix("r#").unwrap_or(name);
        match name.chars().next() {
            Some(c) if c.is_uppercase() => Visibility::Exported,
            _ => Visibility::NotExported,
        }
    }
}

/// `type_name` of a value's type; used on the marker fn item.
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Strip the marker item and trailing closure segments from a raw type name.
pub fn clean_path(raw: &'static str) -> &'static str {
    let mut path = raw;
    if let Some(rest) = path.strip_suffix(MARKER) {
        path = rest.strip_suffix("::").unwrap_or(rest);
    }
    while let Some(rest) = path.strip_suffix(CLOSURE) {
        path = rest.strip_suffix("::").unwrap_or(rest);
    }
    path
}

/// Build the failure record for a check that just failed.
pub fn attribute<V>(
    caller: Caller,
    location: &'static Location<'static>,
    position: u32,
    value: &V,
    condition: &str,
) -> IllegalArgument
where
    V: Debug + ?Sized,
{
    IllegalArgument::new(
        caller.function(),
        location.file(),
        location.line(),
        location.column(),
        position,
        format!("{value:?}"),
        condition,
    )
}
