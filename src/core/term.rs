//! The value space unification works on.
//!
//! A [`Term`] is a closed tagged union: scalar literals, logic variables,
//! cons cells and the empty list. Terms are inert, immutable data; cloning
//! one only bumps a reference count on shared structure.

use crate::core::logic_variable::{ReifiedVar, Var};
use crate::core::pair::Pair;
use crate::error::TermError;
use std::convert::TryFrom;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Opaque scalar value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Int(i64),
    Bool(bool),
    Str(Arc<str>),
}

impl Debug for Literal {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Str(s) => write!(f, "{:?}", s),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// The empty list.
    Nil,
    Lit(Literal),
    Var(Var),
    Pair(Arc<Pair>),
    /// Placeholder for a variable that is still fresh in a reified answer.
    Reified(ReifiedVar),
}

impl Term {
    pub fn new(val: impl Into<Term>) -> Self {
        val.into()
    }

    pub fn var(v: Var) -> Self {
        Term::Var(v)
    }

    pub fn rv(n: usize) -> Self {
        Term::Reified(ReifiedVar(n))
    }

    pub fn cons(head: impl Into<Term>, tail: impl Into<Term>) -> Self {
        Term::Pair(Arc::new(Pair::new(head, tail)))
    }

    /// Build a proper list from `items`.
    pub fn list<T: Into<Term>>(items: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<Term> = items.into_iter().map(Into::into).collect();
        Term::from(items)
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Term::Pair(_))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Term::Nil)
    }

    pub fn as_var(&self) -> Option<Var> {
        match self {
            Term::Var(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<(&Term, &Term)> {
        match self {
            Term::Pair(p) => Some((&p.head, &p.tail)),
            _ => None,
        }
    }

    pub fn head(&self) -> Option<&Term> {
        self.as_pair().map(|(h, _)| h)
    }

    pub fn tail(&self) -> Option<&Term> {
        self.as_pair().map(|(_, t)| t)
    }

    /// Collect the elements of a proper list.
    pub fn to_vec(&self) -> Result<Vec<Term>, TermError> {
        let mut items = vec![];
        let mut cursor = self;
        loop {
            match cursor {
                Term::Nil => return Ok(items),
                Term::Pair(p) => {
                    items.push(p.head.clone());
                    cursor = &p.tail;
                }
                other => return Err(TermError::ImproperList(other.clone())),
            }
        }
    }
}

impl Debug for Term {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Term::Nil => write!(f, "()"),
            Term::Lit(lit) => write!(f, "{:?}", lit),
            Term::Var(v) => write!(f, "{:?}", v),
            Term::Pair(p) => write!(f, "{:?}", p),
            Term::Reified(rv) => write!(f, "{:?}", rv),
        }
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Lit(lit)
    }
}

impl From<i64> for Term {
    fn from(i: i64) -> Self {
        Term::Lit(Literal::Int(i))
    }
}

impl From<i32> for Term {
    fn from(i: i32) -> Self {
        Term::Lit(Literal::Int(i.into()))
    }
}

impl From<bool> for Term {
    fn from(b: bool) -> Self {
        Term::Lit(Literal::Bool(b))
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::Lit(Literal::Str(s.into()))
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Term::Lit(Literal::Str(s.into()))
    }
}

impl From<Var> for Term {
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

impl From<&Var> for Term {
    fn from(v: &Var) -> Self {
        Term::Var(*v)
    }
}

impl From<ReifiedVar> for Term {
    fn from(rv: ReifiedVar) -> Self {
        Term::Reified(rv)
    }
}

impl From<&Term> for Term {
    fn from(t: &Term) -> Self {
        t.clone()
    }
}

impl From<Pair> for Term {
    fn from(p: Pair) -> Self {
        Term::Pair(Arc::new(p))
    }
}

impl From<(Term, Term)> for Term {
    fn from(pair: (Term, Term)) -> Self {
        Term::from(Pair::from(pair))
    }
}

impl From<Vec<Term>> for Term {
    fn from(items: Vec<Term>) -> Self {
        let mut list = Term::Nil;
        for v in items.into_iter().rev() {
            list = Term::cons(v, list);
        }
        list
    }
}

impl TryFrom<Term> for i64 {
    type Error = TermError;

    fn try_from(t: Term) -> Result<Self, Self::Error> {
        match t {
            Term::Lit(Literal::Int(i)) => Ok(i),
            found => Err(TermError::Mismatch {
                expected: "integer",
                found,
            }),
        }
    }
}

impl TryFrom<Term> for bool {
    type Error = TermError;

    fn try_from(t: Term) -> Result<Self, Self::Error> {
        match t {
            Term::Lit(Literal::Bool(b)) => Ok(b),
            found => Err(TermError::Mismatch {
                expected: "boolean",
                found,
            }),
        }
    }
}

impl TryFrom<Term> for String {
    type Error = TermError;

    fn try_from(t: Term) -> Result<Self, Self::Error> {
        match t {
            Term::Lit(Literal::Str(s)) => Ok(s.to_string()),
            found => Err(TermError::Mismatch {
                expected: "string",
                found,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    #[test]
    fn vectors_become_proper_lists() {
        let list = Term::from(vec![Term::new(1), Term::new(2)]);
        check!(list == Term::cons(1, Term::cons(2, Term::Nil)));
    }

    #[test]
    fn empty_vector_is_nil() {
        check!(Term::from(Vec::<Term>::new()) == Term::Nil);
    }

    #[test]
    fn shape_tests() {
        let x = Var::new(0);
        check!(Term::var(x).is_var());
        check!(!Term::new(1).is_var());
        check!(Term::cons(1, 2).is_pair());
        check!(Term::Nil.is_nil());
        check!(Term::var(x).as_var() == Some(x));
    }

    #[test]
    fn head_and_tail_of_pair() {
        let p = Term::cons("a", "b");
        check!(p.head() == Some(&Term::new("a")));
        check!(p.tail() == Some(&Term::new("b")));
        check!(Term::new(3).head().is_none());
    }

    #[test]
    fn literals_of_different_kind_are_not_equal() {
        check!(Term::new(1) != Term::new(true));
        check!(Term::new("1") != Term::new(1));
        check!(Term::new(1i64) == Term::new(1i32));
    }

    #[test]
    fn to_vec_reads_back_proper_lists() {
        let list = Term::list(vec![1, 2, 3]);
        let_assert!(Ok(items) = list.to_vec());
        check!(items == vec![Term::new(1), Term::new(2), Term::new(3)]);
    }

    #[test]
    fn to_vec_rejects_improper_lists() {
        let_assert!(Err(TermError::ImproperList(rest)) = Term::cons(1, 2).to_vec());
        check!(rest == Term::new(2));
    }

    #[test]
    fn try_from_extracts_scalars() {
        check!(i64::try_from(Term::new(42)) == Ok(42));
        check!(bool::try_from(Term::new(false)) == Ok(false));
        check!(String::try_from(Term::new("tea")) == Ok("tea".to_string()));
        let_assert!(Err(TermError::Mismatch { expected: "integer", .. }) = i64::try_from(Term::Nil));
    }

    #[test]
    fn terms_print_like_lisp() {
        check!(format!("{:?}", Term::list(vec![1, 2, 3])) == "(1 2 3)");
        check!(format!("{:?}", Term::new("x")) == "\"x\"");
        check!(format!("{:?}", Term::cons(Term::var(Var::new(1)), Term::rv(0))) == "(?1 . _0)");
    }
}
