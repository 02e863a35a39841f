//! Compose goals using combinators to build more complex goals
//!

use crate::core::goal::Goal;
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::goals::primitive::{conj2, disj2, fail, succeed};
use std::sync::Arc;

type SharedGoal = Arc<dyn Fn(State) -> Stream<State>>;

/// Soft cut: if `g_cond` has any answer, continue every one of them with
/// `g_then`; otherwise run `g_else` on the original state.
///
/// While the condition is suspended the result is suspended too, so a
/// divergent condition does not block sibling branches.
pub fn ifte(g_cond: impl Goal, g_then: impl Goal, g_else: impl Goal) -> impl Goal {
    let g_then: SharedGoal = Arc::new(g_then);
    let g_else: SharedGoal = Arc::new(g_else);
    move |s: State| {
        let answers = g_cond.apply(s.clone());
        ifte_inf(answers, s, g_then.clone(), g_else.clone())
    }
}

fn ifte_inf(
    answers: Stream<State>,
    s: State,
    g_then: SharedGoal,
    g_else: SharedGoal,
) -> Stream<State> {
    match answers {
        Stream::Empty => g_else(s),
        Stream::Suspension(sup) => Stream::suspension(move || ifte_inf(sup(), s, g_then, g_else)),
        ready => ready.append_map_inf(g_then),
    }
}

/// Creates a goal that succeeds at most once.
pub fn once(g: impl Goal) -> impl Goal {
    move |s: State| once_inf(g.apply(s))
}

fn once_inf(answers: Stream<State>) -> Stream<State> {
    match answers {
        Stream::Empty => Stream::Empty,
        Stream::Pair(first, _) => Stream::singleton(first),
        Stream::Suspension(sup) => Stream::suspension(move || once_inf(sup())),
    }
}

/// Creates a goal that succeeds if `goalfn` succeeds for every value.
pub fn everyg<T, G: Goal>(
    goalfn: impl Fn(T) -> G,
    values: impl IntoIterator<Item = T>,
) -> Box<dyn Goal> {
    let goals: Vec<G> = values.into_iter().map(goalfn).collect();
    goals
        .into_iter()
        .rev()
        .fold(Box::new(succeed()) as Box<dyn Goal>, |acc, g| {
            Box::new(conj2(g, acc))
        })
}

/// Creates a goal that succeeds if `goalfn` succeeds for any value.
pub fn anyg<T, G: Goal>(
    goalfn: impl Fn(T) -> G,
    values: impl IntoIterator<Item = T>,
) -> Box<dyn Goal> {
    let goals: Vec<G> = values.into_iter().map(goalfn).collect();
    goals
        .into_iter()
        .rev()
        .fold(Box::new(fail()) as Box<dyn Goal>, |acc, g| {
            Box::new(disj2(g, acc))
        })
}
