use crate::config::Config;
use crate::core::logic_variable::Var;
use crate::core::substitution::Substitution;
use crate::core::term::Term;
use log::trace;

/// Search state: the current bindings plus the counter that hands out
/// fresh variables.
///
/// States are values. Every goal gets its own copy; extending one never
/// affects another state derived from the same ancestor.
#[derive(Clone, Default, PartialEq)]
pub struct State {
    subs: Substitution,
    counter: usize,
    config: Config,
}

impl State {
    /// Initial state: no bindings, counter at zero.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(config: Config) -> Self {
        State {
            config,
            ..Self::default()
        }
    }

    pub fn substitution(&self) -> &Substitution {
        &self.subs
    }

    /// Index of the next variable [`fresh_var`](Self::fresh_var) will allocate.
    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the bindings, keeping counter and configuration.
    pub fn with_substitution(self, subs: Substitution) -> Self {
        State { subs, ..self }
    }

    /// Allocate a new variable and return it with the advanced state.
    pub fn fresh_var(self) -> (Var, Self) {
        let var = Var::new(self.counter);
        trace!("fresh {:?}", var);
        (
            var,
            State {
                counter: self.counter + 1,
                ..self
            },
        )
    }

    /// Unify `u` and `v` under this state's bindings and configuration.
    pub fn unify(&self, u: &Term, v: &Term) -> Option<Self> {
        let subs = self.subs.unify_with(u, v, &self.config)?;
        Some(self.clone().with_substitution(subs))
    }

    /// Resolve `t` to its most specific known value.
    pub fn walk(&self, t: &Term) -> Term {
        self.subs.walk(t).clone()
    }

    /// Resolve `t` deeply and reify the variables that are still fresh.
    pub fn reify(&self, t: &Term) -> Term {
        self.subs.reify(t)
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}#{}", self.subs, self.counter)
    }
}
