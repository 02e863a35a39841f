//! Substitutions map variables to terms.
//!
//! Bound terms can be literals, composite or variables themselves.
//! The map is persistent: extending a substitution shares structure with
//! the original and leaves it untouched, so every search state keeps the
//! bindings it was handed.

use crate::config::Config;
use crate::core::logic_variable::{ReifiedVar, Var};
use crate::core::term::Term;
use log::trace;
use rpds::HashTrieMapSync;
use std::fmt::Formatter;

/// Mapping of variables to terms.
#[derive(Clone, PartialEq)]
pub struct Substitution {
    bindings: HashTrieMapSync<Var, Term>,
}

impl Default for Substitution {
    fn default() -> Self {
        Self::empty()
    }
}

impl Substitution {
    /// Initialize an empty substitution
    pub fn empty() -> Self {
        Substitution {
            bindings: HashTrieMapSync::new_sync(),
        }
    }

    /// Get number of substituted variables
    pub fn len(&self) -> usize {
        self.bindings.size()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Var, &Term)> {
        self.bindings.iter()
    }

    /// Direct binding of `x`, without following chains.
    pub fn get(&self, x: &Var) -> Option<&Term> {
        self.bindings.get(x)
    }

    /// Resolve `t` to its most specific known value.
    ///
    /// Follows chains of bound variables until reaching a term that is
    /// either not a variable or an unbound variable.
    pub fn walk<'a>(&'a self, mut t: &'a Term) -> &'a Term {
        while let Term::Var(var) = t {
            match self.bindings.get(var) {
                Some(next) => t = next,
                None => break,
            }
        }
        t
    }

    /// Resolve every variable contained in `t`, recursing into pairs.
    pub fn walk_star(&self, t: &Term) -> Term {
        match self.walk(t) {
            Term::Pair(p) => Term::cons(self.walk_star(&p.head), self.walk_star(&p.tail)),
            other => other.clone(),
        }
    }

    /// Extend substitution with a variable => term mapping.
    ///
    /// An existing binding of `x` is shadowed. No cycle check is done.
    pub fn extend(&self, x: Var, t: Term) -> Self {
        Substitution {
            bindings: self.bindings.insert(x, t),
        }
    }

    /// Like [`extend`](Self::extend), but returns `None` if the binding
    /// would result in a cyclic substitution.
    pub fn extend_checked(&self, x: Var, t: Term) -> Option<Self> {
        if self.occurs(&x, &t) {
            trace!("occurs check rejected {:?} := {:?}", x, t);
            None
        } else {
            Some(self.extend(x, t))
        }
    }

    /// Returns `true` if `t` contains a variable that is equivalent
    /// to `x` under this substitution.
    pub fn occurs(&self, x: &Var, t: &Term) -> bool {
        match self.walk(t) {
            Term::Var(v) => v == x,
            Term::Pair(p) => self.occurs(x, &p.head) || self.occurs(x, &p.tail),
            _ => false,
        }
    }

    /// Attempt to unify `u` and `v` under this substitution.
    ///
    /// Uses the default configuration, i.e. without occurs check.
    pub fn unify(&self, u: &Term, v: &Term) -> Option<Self> {
        self.unify_with(u, v, &Config::default())
    }

    /// Attempt to unify `u` and `v` under this substitution.
    ///
    /// On failure nothing escapes: the receiver is left as it was and any
    /// bindings made on the way are dropped.
    pub fn unify_with(&self, u: &Term, v: &Term, config: &Config) -> Option<Self> {
        let u = self.walk(u);
        let v = self.walk(v);

        match (u, v) {
            (Term::Var(a), Term::Var(b)) if a == b => Some(self.clone()),
            (Term::Var(x), other) | (other, Term::Var(x)) => {
                if config.occurs_check {
                    self.extend_checked(*x, other.clone())
                } else {
                    Some(self.extend(*x, other.clone()))
                }
            }
            (Term::Pair(a), Term::Pair(b)) => self
                .unify_with(&a.head, &b.head, config)?
                .unify_with(&a.tail, &b.tail, config),
            _ if u == v => Some(self.clone()),
            _ => None,
        }
    }

    /// Bind every variable that remains fresh in `t` to a reified variable,
    /// numbered in order of first appearance.
    pub fn reify_s(&self, t: &Term) -> Self {
        match self.walk(t) {
            Term::Var(var) => {
                let reified = Term::from(ReifiedVar(self.len()));
                self.extend(*var, reified)
            }
            Term::Pair(p) => self.reify_s(&p.head).reify_s(&p.tail),
            _ => self.clone(),
        }
    }

    /// Replace all variables contained in `t` with their substituted
    /// values and reify variables without substitution.
    pub fn reify(&self, t: &Term) -> Term {
        let t = self.walk_star(t);
        let r = Substitution::empty().reify_s(&t);
        r.walk_star(&t)
    }
}

impl std::fmt::Debug for Substitution {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|(var, _)| **var);

        write!(f, "{{")?;
        let mut iter = entries.into_iter();
        if let Some((var, val)) = iter.next() {
            write!(f, "{:?}: {:?}", var, val)?;
        }
        for (var, val) in iter {
            write!(f, ", {:?}: {:?}", var, val)?;
        }
        write!(f, "}}")
    }
}

/// Construct a substitution
#[macro_export]
macro_rules! substitution {
    () => { $crate::prelude::Substitution::empty() };

    ($($var:ident : $val:expr),* $(,)?) => {{
        $crate::prelude::Substitution::empty()
        $(
            .extend($var, $crate::prelude::Term::from($val))
        )*
    }}
}
