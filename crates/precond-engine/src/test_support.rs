use crate::attribution::Caller;
use precond_types::Mode;

pub const MODES: [Mode; 3] = [Mode::Off, Mode::Error, Mode::Panic];

pub fn named() -> Caller {
    Caller::named("precond_engine::demo::target")
}
