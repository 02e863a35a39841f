/// Indexed logic variable.
///
/// The index is the variable's generation number. Variables are handed out
/// by [`State::fresh_var`](crate::core::state::State::fresh_var) in strictly
/// increasing order, so two variables reachable in one search path are the
/// same variable iff their indices are equal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var(usize);

impl Var {
    /// Refer to the variable with the given index.
    ///
    /// Goals should obtain variables through `call_fresh` or `fresh!`;
    /// constructing one by hand can collide with a variable allocated later.
    pub fn new(index: usize) -> Self {
        Var(index)
    }

    /// Return the variable's generation number.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// Reified logic variable.
///
/// Reified variables represent logic variables that remain fresh
/// after goals have run.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ReifiedVar(pub usize);

impl std::fmt::Debug for ReifiedVar {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "_{}", self.0)
    }
}
