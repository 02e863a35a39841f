use super::stream::Stream;
use crate::config::Config;
use crate::core::state::State;
use crate::core::stream::StreamIter;
use log::trace;

/// A goal maps a search state to a stream of result states.
///
/// Every `Fn(State) -> Stream<State>` closure is a goal.
pub trait Goal: 'static + Fn(State) -> Stream<State> {
    fn apply(&self, s: State) -> Stream<State> {
        self(s)
    }

    /// Evaluate against the initial state.
    fn eval(&self) -> Stream<State> {
        self.eval_with(Config::default())
    }

    /// Evaluate against an initial state carrying `config`.
    fn eval_with(&self, config: Config) -> Stream<State> {
        trace!("evaluating goal with {:?}", config);
        self.apply(State::new(config))
    }

    fn run(&self, n: usize) -> Stream<State> {
        self.eval().take_inf(n)
    }

    fn run_inf(&self) -> Stream<State> {
        self.eval().take_inf_all()
    }

    fn iter(&self) -> StreamIter<State> {
        self.eval().into_iter()
    }
}

impl<G: 'static + Fn(State) -> Stream<State>> Goal for G {}

/// Evaluate `goal` against the empty state.
pub fn eval_goal(goal: &impl Goal) -> Stream<State> {
    goal.eval()
}
