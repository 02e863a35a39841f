#[macro_use]
pub mod macros;
pub mod config;
pub mod core;
pub mod error;
pub mod goals;
pub mod prelude;

#[cfg(test)]
mod acceptance_tests;
#[cfg(test)]
mod testing;

use crate::config::Config;
use crate::core::goal::Goal;
use crate::core::logic_variable::Var;
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::core::term::Term;

/// Allocate the query variable, build the goal with `f` and evaluate it.
fn query<G: Goal>(config: Config, f: impl FnOnce(Var) -> G) -> (Term, Stream<State>) {
    let (q, s) = State::new(config).fresh_var();
    let goal = f(q);
    (Term::var(q), goal.apply(s))
}

/// At most `n` answers for the query variable passed to `f`, reified.
pub fn run_n<G: Goal>(n: usize, f: impl FnOnce(Var) -> G) -> Stream<Term> {
    run_n_with(Config::default(), n, f)
}

pub fn run_n_with<G: Goal>(config: Config, n: usize, f: impl FnOnce(Var) -> G) -> Stream<Term> {
    let (q, answers) = query(config, f);
    answers.take_inf(n).map(move |s| s.reify(&q))
}

/// All answers for the query variable passed to `f`, reified.
///
/// Does not return if there are infinitely many.
pub fn run_star<G: Goal>(f: impl FnOnce(Var) -> G) -> Stream<Term> {
    run_star_with(Config::default(), f)
}

pub fn run_star_with<G: Goal>(config: Config, f: impl FnOnce(Var) -> G) -> Stream<Term> {
    let (q, answers) = query(config, f);
    answers.take_inf_all().map(move |s| s.reify(&q))
}

/// Lazily produce the answers for the query variable passed to `f`.
pub fn run_iter<G: Goal>(f: impl FnOnce(Var) -> G) -> impl Iterator<Item = Term> {
    run_iter_with(Config::default(), f)
}

pub fn run_iter_with<G: Goal>(
    config: Config,
    f: impl FnOnce(Var) -> G,
) -> impl Iterator<Item = Term> {
    let (q, answers) = query(config, f);
    answers.into_iter().map(move |s| s.reify(&q))
}
