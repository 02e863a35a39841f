use crate::core::goal::Goal;
use crate::core::logic_variable::Var;
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::core::term::Term;
use std::sync::Arc;

/// Creates a goal that succeeds if `u` and `v` unify.
pub fn eq(u: impl Into<Term>, v: impl Into<Term>) -> impl Goal {
    let u = u.into();
    let v = v.into();
    move |s: State| match s.unify(&u, &v) {
        Some(s) => Stream::singleton(s),
        None => Stream::empty(),
    }
}

pub fn succeed() -> impl Goal {
    |s: State| Stream::singleton(s)
}

pub fn fail() -> impl Goal {
    |_: State| Stream::empty()
}

/// Creates a goal that introduces a new variable and passes it to `f`.
///
/// The variable takes the next index from the state's counter, so indices
/// keep growing along every search path.
pub fn call_fresh<G: Goal>(f: impl 'static + Fn(Var) -> G) -> impl Goal {
    move |s: State| {
        let (x, s) = s.fresh_var();
        f(x).apply(s)
    }
}

/// Creates a goal that succeeds if either of its subgoals succeeds.
pub fn disj2(g1: impl Goal, g2: impl Goal) -> impl Goal {
    move |s: State| Stream::append_inf(g1.apply(s.clone()), g2.apply(s))
}

/// Creates a goal that succeeds if both of its subgoals succeed.
pub fn conj2(g1: impl Goal, g2: impl Goal) -> impl Goal {
    let g2: Arc<dyn Fn(State) -> Stream<State>> = Arc::new(g2);
    move |s: State| g1.apply(s).append_map_inf(g2.clone())
}

/// Creates a goal that never produces an answer but never fails either.
pub fn nevero() -> impl Goal {
    |s: State| Stream::suspension(move || nevero()(s))
}

/// Creates a goal that succeeds an unbounded number of times.
pub fn alwayso() -> impl Goal {
    |s: State| Stream::suspension(move || disj2(succeed(), alwayso())(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use pretty_assertions::assert_eq;

    fn x() -> Var {
        Var::new(0)
    }

    fn bindings(stream: Stream<State>, var: Var) -> Vec<Term> {
        stream
            .into_iter()
            .map(|s| s.walk(&Term::var(var)))
            .collect()
    }

    #[test]
    fn eq_binds_variable() {
        let states = eq(x(), 42).eval().into_vec();
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].walk(&x().into()), Term::new(42));
        assert_eq!(states[0].counter(), 0);
    }

    #[test]
    fn eq_on_equal_literals_leaves_state_unchanged() {
        assert_eq!(eq(42, 42).eval(), Stream::singleton(State::empty()));
    }

    #[test]
    fn eq_on_different_literals_fails() {
        assert!(eq(42, 123).eval().is_empty());
        assert!(eq(true, false).eval().is_empty());
    }

    #[test]
    fn succeed_and_fail() {
        assert_eq!(succeed().eval(), Stream::singleton(State::empty()));
        assert!(fail().eval().is_empty());
    }

    #[test]
    fn conj_of_consistent_equalities_yields_one_state() {
        let g = conj2(eq(x(), 1), eq(x(), 1));
        assert_eq!(bindings(g.eval(), x()), vec![Term::new(1)]);
    }

    #[test]
    fn conj_of_inconsistent_equalities_fails() {
        let g = conj2(eq(x(), 1), eq(x(), 2));
        assert!(g.eval().is_empty());
    }

    #[test]
    fn disj_yields_both_branches_in_order() {
        let g = disj2(eq(x(), 1), eq(x(), 2));
        assert_eq!(bindings(g.eval(), x()), vec![Term::new(1), Term::new(2)]);
    }

    #[test]
    fn disj_branches_do_not_see_each_others_bindings() {
        let y = Var::new(1);
        let g = disj2(eq(x(), 1), eq(y, 2));
        let states = g.eval().into_vec();
        assert_eq!(states[0].walk(&y.into()), Term::var(y));
        assert_eq!(states[1].walk(&x().into()), Term::var(x()));
    }

    #[test]
    fn conj_applies_second_goal_to_every_answer_of_the_first() {
        let y = Var::new(1);
        let g = conj2(disj2(eq(x(), 1), eq(x(), 2)), disj2(eq(y, "a"), eq(y, "b")));
        let answers: Vec<_> = g
            .eval()
            .into_iter()
            .map(|s| (s.walk(&x().into()), s.walk(&y.into())))
            .collect();
        assert_eq!(
            answers,
            vec![
                (Term::new(1), Term::new("a")),
                (Term::new(1), Term::new("b")),
                (Term::new(2), Term::new("a")),
                (Term::new(2), Term::new("b")),
            ]
        );
    }

    #[test]
    fn call_fresh_allocates_from_state_counter() {
        let g = call_fresh(|a| call_fresh(move |b| eq(a, b)));
        let states = g.eval().into_vec();
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].counter(), 2);
        assert_eq!(
            states[0].walk(&Term::var(Var::new(0))),
            Term::var(Var::new(1))
        );
    }

    #[test]
    fn call_fresh_indices_are_below_counter_on_every_path() {
        let g = call_fresh(|a| {
            disj2(
                call_fresh(move |b| eq(a, b)),
                call_fresh(move |b| call_fresh(move |c| eq(a, Term::cons(b, c)))),
            )
        });
        for s in g.eval() {
            for (var, _) in s.substitution().iter() {
                assert!(var.index() < s.counter(), "{:?} escapes {:?}", var, s);
            }
        }
        let counters: Vec<_> = g.eval().into_iter().map(|s| s.counter()).collect();
        assert_eq!(counters, vec![2, 3]);
    }

    #[test]
    fn conj_order_does_not_change_the_answer_set() {
        let y = Var::new(1);
        let g1 = || disj2(eq(x(), 1), eq(x(), 2));
        let g2 = || disj2(eq(y, 3), eq(y, 4));
        let answers = |stream: Stream<State>| {
            let mut out: Vec<(i64, i64)> = stream
                .into_iter()
                .map(|s| {
                    (
                        i64::try_from(s.walk(&x().into())).unwrap(),
                        i64::try_from(s.walk(&y.into())).unwrap(),
                    )
                })
                .collect();
            out.sort();
            out
        };
        assert_eq!(
            answers(conj2(g1(), g2()).eval()),
            answers(conj2(g2(), g1()).eval())
        );
    }

    #[test]
    fn eval_with_config_enables_occurs_check() {
        let g = eq(x(), Term::cons(x(), Term::Nil));
        assert_eq!(g.eval().len(), Some(1));
        assert!(g
            .eval_with(Config::default().with_occurs_check(true))
            .is_empty());
    }

    #[test]
    fn alwayso_succeeds_repeatedly() {
        assert_eq!(
            alwayso().run(3),
            Stream::from_iter(vec![State::empty(), State::empty(), State::empty()])
        );
    }

    #[test]
    fn nevero_suspends() {
        assert_eq!(nevero().eval().len(), None);
    }

    #[test]
    fn disj_with_divergent_left_branch_still_answers() {
        let g = disj2(nevero(), eq(x(), "found"));
        assert_eq!(bindings(g.run(1), x()), vec![Term::new("found")]);
    }
}
