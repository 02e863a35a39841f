pub use crate::{
    config::Config,
    core::{
        goal::{eval_goal, Goal},
        logic_variable::{ReifiedVar, Var},
        pair::Pair,
        state::State,
        stream::Stream,
        substitution::Substitution,
        term::{Literal, Term},
    },
    error::TermError,
    goals::{combinators::*, list::*, primitive::*},
};
