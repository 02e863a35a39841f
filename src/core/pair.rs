use crate::core::term::Term;
use std::fmt::{Debug, Formatter, Result};

/// A cons cell.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pair {
    pub head: Term,
    pub tail: Term,
}

impl Pair {
    pub fn new(head: impl Into<Term>, tail: impl Into<Term>) -> Self {
        Pair {
            head: head.into(),
            tail: tail.into(),
        }
    }
}

impl Debug for Pair {
    fn fmt(&self, f: &mut Formatter) -> Result {
        if !f.alternate() {
            write!(f, "(")?;
        }

        match &self.tail {
            Term::Nil => write!(f, "{:?}", self.head)?,
            Term::Pair(next) => write!(f, "{:?} {:#?}", self.head, next)?,
            other => write!(f, "{:?} . {:?}", self.head, other)?,
        }

        if !f.alternate() {
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl From<(Term, Term)> for Pair {
    fn from(pair: (Term, Term)) -> Self {
        Pair {
            head: pair.0,
            tail: pair.1,
        }
    }
}
