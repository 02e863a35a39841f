use crate::prelude::*;
use crate::testing::{fails, has_unique_solution, succeeds};
use assert2::{check, let_assert};

#[test]
fn running_goal_that_fails_produces_empty_stream() {
    let stream = run!(*, q, fail());
    assert!(stream.is_empty())
}

#[test]
fn running_equality_goal_associates_value_to_fresh_variable() {
    let stream = run!(*, q, eq(q, 1));
    assert_eq!(stream, Stream::singleton(Term::new(1)));
}

#[test]
fn unconstrained_query_reifies_to_placeholder() {
    has_unique_solution(run!(q, succeed()), Term::rv(0));
}

#[test]
fn pair_unification_binds_inside_lists() {
    has_unique_solution(
        run!(q, eq(list![q, 2], list![1, 2])),
        Term::new(1),
    );
    fails(fresh!((x), eq(list![x, 2], list![1, 3])));
}

#[test]
fn eval_goal_exposes_states_for_walking() {
    let states = eval_goal(&call_fresh(|x| disj2(eq(x, 1), eq(x, 2)))).into_vec();
    let values: Vec<_> = states
        .iter()
        .map(|s| s.walk(&Term::var(Var::new(0))))
        .collect();
    check!(values == vec![Term::new(1), Term::new(2)]);
    check!(states.iter().all(|s| s.counter() == 1));
}

#[test]
fn conde_collects_every_line() {
    let answers = run!(*, q, conde! {
        eq(q, "olive"), succeed();
        eq(q, "oil");
        fail(), eq(q, "lard");
    });
    assert_eq!(answers.into_vec(), vec![Term::new("olive"), Term::new("oil")]);
}

#[test]
fn conda_commits_to_first_line_whose_head_succeeds() {
    let answers = run!(*, q, conda! {
        eq("olive", q), succeed();
        eq("oil", q);
    });
    assert_eq!(answers.into_vec(), vec![Term::new("olive")]);

    fails(fresh!((x), conda! {
        eq("virgin", x), eq("olive", x);
        eq("olive", x);
    }));
}

#[test]
fn condu_commits_to_first_answer_of_the_head() {
    let answers = run!(*, q, condu! {
        alwayso(), eq(q, true);
        eq(q, false);
    });
    assert_eq!(answers.into_vec(), vec![Term::new(true)]);
}

#[test]
fn recursive_relation_interleaves_with_finite_branch() {
    defrel! {
        nat(n) {
            conde! {
                eq(n.clone(), 0);
                fresh!{ (m), eq(n.clone(), Term::cons("s", m)), nat(m) };
            }
        }
    }

    let answers: Vec<_> = run!(q, disj2(nat(q), eq(q, "done"))).take(3).collect();
    check!(answers.contains(&Term::new("done")));
    check!(answers.contains(&Term::new(0)));
}

#[test]
fn divergent_left_branch_does_not_starve_the_right() {
    let mut answers = run!(q, disj2(nevero(), eq(q, 7)));
    check!(answers.next() == Some(Term::new(7)));
}

#[test]
fn everyg_and_anyg_over_lists() {
    succeeds(everyg(|n: i64| membero(n, list![1, 2, 3]), vec![1, 3]));
    fails(everyg(|n: i64| membero(n, list![1, 2, 3]), vec![1, 4]));
    let answers = run!(*, q, anyg(|n: i64| eq(q, n), vec![5, 6])).into_vec();
    check!(answers == vec![Term::new(5), Term::new(6)]);
}

#[test]
fn answers_convert_back_into_rust_values() {
    let answers = run!(*, q, membero(q, list![1, 2])).into_vec();
    let numbers: Result<Vec<i64>, _> = answers.into_iter().map(i64::try_from).collect();
    check!(numbers == Ok(vec![1, 2]));

    let_assert!(Some(list) = run!(q, appendo(list![1], list![2], q)).next());
    let_assert!(Ok(items) = list.to_vec());
    check!(items == vec![Term::new(1), Term::new(2)]);

    let_assert!(Some(unbound) = run!(q, succeed()).next());
    let_assert!(Err(TermError::Mismatch { .. }) = bool::try_from(unbound));
}

#[test]
fn occurs_check_is_opt_in() {
    let cyclic = |_q: Var| fresh!((x), eq(x, list![x]));
    check!(crate::run_n(1, cyclic).len() == Some(1));
    check!(crate::run_n_with(Config::new().with_occurs_check(true), 1, cyclic).is_empty());
}
