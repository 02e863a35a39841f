//! Errors raised when reading answers back into Rust values.
//!
//! A goal that has no solution is not an error; it produces an empty stream.

use crate::core::term::Term;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TermError {
    /// The term does not have the shape of the requested Rust value.
    #[error("expected {expected}, found {found:?}")]
    Mismatch { expected: &'static str, found: Term },
    /// A list does not end in `()`.
    #[error("improper list ending in {0:?}")]
    ImproperList(Term),
}
