use precond_types::Mode;

/// Known profile names, in documentation order.
pub const PROFILES: [&str; 4] = ["development", "production", "strict", "off"];

/// Preset profiles are opinionated defaults as `(primary, secondary)` modes.
///
/// Keep these small and readable. Anything specific belongs in `[modes]`.
pub fn preset(profile: &str) -> Option<(Mode, Mode)> {
    match profile {
        // Release checks report, debug checks panic.
        "development" => Some((Mode::Error, Mode::Panic)),
        // Debug checks cost nothing in production.
        "production" => Some((Mode::Error, Mode::Off)),
        "strict" => Some((Mode::Panic, Mode::Panic)),
        "off" => Some((Mode::Off, Mode::Off)),
        _ => None,
    }
}

/// Profile used when neither the file nor an override names one.
pub fn default_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "development"
    } else {
        "production"
    }
}
