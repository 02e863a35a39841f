//! Evaluation settings threaded through every search state.

/// Unifier settings.
///
/// A `Config` travels inside each [`State`](crate::core::state::State), so
/// two evaluations with different settings never interfere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Reject bindings that would make a variable contain itself.
    ///
    /// Off by default: without it, `walk_star` and `reify` may diverge on
    /// answers built from cyclic bindings.
    pub occurs_check: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_occurs_check(mut self, occurs_check: bool) -> Self {
        self.occurs_check = occurs_check;
        self
    }
}
