//! Process-wide check policy.
//!
//! The store is three atomic bytes. Each chain takes a [`Policy`] snapshot when
//! it starts, so reconfiguring while checks are in flight never changes a chain
//! that already exists. Configure once at startup.

use precond_types::Mode;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::info;

/// Which pair of categories the two policy modes govern.
///
/// The two axes are alternatives; a policy is always on exactly one of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Release checks vs. debug checks (switched per chain with `Check::debug`).
    Build,
    /// Exported vs. not-exported functions (classified from the function name).
    Visibility,
}

impl Axis {
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Build => "build",
            Axis::Visibility => "visibility",
        }
    }

    const fn to_u8(self) -> u8 {
        match self {
            Axis::Build => 0,
            Axis::Visibility => 1,
        }
    }

    const fn from_u8(v: u8) -> Axis {
        match v {
            1 => Axis::Visibility,
            _ => Axis::Build,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Release,
    Debug,
    Exported,
    NotExported,
}

impl Category {
    pub fn axis(self) -> Axis {
        match self {
            Category::Release | Category::Debug => Axis::Build,
            Category::Exported | Category::NotExported => Axis::Visibility,
        }
    }

    /// Release and Exported are governed by [`Policy::primary`].
    pub fn is_primary(self) -> bool {
        matches!(self, Category::Release | Category::Exported)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Release => "release",
            Category::Debug => "debug",
            Category::Exported => "exported",
            Category::NotExported => "not_exported",
        }
    }
}

/// An immutable snapshot of the two modes and the axis they apply to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Policy {
    pub axis: Axis,
    /// Mode for release checks (Build) or exported functions (Visibility).
    pub primary: Mode,
    /// Mode for debug checks (Build) or not-exported functions (Visibility).
    pub secondary: Mode,
}

impl Policy {
    /// Release checks report errors, debug checks panic.
    pub const DEFAULT: Policy = Policy::build(Mode::Error, Mode::Panic);

    pub const fn build(release: Mode, debug: Mode) -> Self {
        Self {
            axis: Axis::Build,
            primary: release,
            secondary: debug,
        }
    }

    pub const fn visibility(exported: Mode, not_exported: Mode) -> Self {
        Self {
            axis: Axis::Visibility,
            primary: exported,
            secondary: not_exported,
        }
    }

    pub fn mode(&self, category: Category) -> Mode {
        if category.is_primary() {
            self.primary
        } else {
            self.secondary
        }
    }

    pub fn primary_category(&self) -> Category {
        match self.axis {
            Axis::Build => Category::Release,
            Axis::Visibility => Category::Exported,
        }
    }

    pub fn secondary_category(&self) -> Category {
        match self.axis {
            Axis::Build => Category::Debug,
            Axis::Visibility => Category::NotExported,
        }
    }

    pub fn is_all_off(&self) -> bool {
        self.primary.is_off() && self.secondary.is_off()
    }
}

impl Default for Policy {
    fn default() -> Self {
        Policy::DEFAULT
    }
}

static AXIS: AtomicU8 = AtomicU8::new(Policy::DEFAULT.axis.to_u8());
static PRIMARY: AtomicU8 = AtomicU8::new(Policy::DEFAULT.primary.to_u8());
static SECONDARY: AtomicU8 = AtomicU8::new(Policy::DEFAULT.secondary.to_u8());

/// Snapshot of the process-wide policy.
pub fn current() -> Policy {
    Policy {
        axis: Axis::from_u8(AXIS.load(Ordering::Relaxed)),
        primary: Mode::from_u8(PRIMARY.load(Ordering::Relaxed)),
        secondary: Mode::from_u8(SECONDARY.load(Ordering::Relaxed)),
    }
}

/// Replace the process-wide policy. Chains already started keep their snapshot.
pub fn set(policy: Policy) {
    AXIS.store(policy.axis.to_u8(), Ordering::Relaxed);
    PRIMARY.store(policy.primary.to_u8(), Ordering::Relaxed);
    SECONDARY.store(policy.secondary.to_u8(), Ordering::Relaxed);
    info!(
        axis = policy.axis.as_str(),
        primary = policy.primary.as_str(),
        secondary = policy.secondary.as_str(),
        "precondition policy installed"
    );
}

/// Restore [`Policy::DEFAULT`].
pub fn reset() {
    set(Policy::DEFAULT);
}
