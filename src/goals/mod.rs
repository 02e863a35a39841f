//! Library of goals

use crate::core::state::State;
use crate::core::term::Term;
use log::{debug, log_enabled, Level};

pub mod combinators;
pub mod list;
pub mod primitive;

/// Log one application of a traced relation with its arguments reified
/// against `s`.
///
/// Used by `defrel! { trace .. }`.
#[doc(hidden)]
pub fn trace_relation(name: &str, args: &[(&str, &Term)], s: &State) {
    if !log_enabled!(Level::Debug) {
        return;
    }

    let shown = args
        .iter()
        .map(|(arg, t)| format!(" {}={:?}", arg, s.reify(t)))
        .collect::<String>();

    debug!("{} apply:{}", name, shown);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::goal::Goal;
    use crate::core::logic_variable::Var;
    use crate::core::stream::Stream;
    use crate::goals::primitive::eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static STEPS_TAKEN: AtomicUsize = AtomicUsize::new(0);

    fn step() -> impl Goal {
        |s: State| {
            STEPS_TAKEN.fetch_add(1, Ordering::SeqCst);
            Stream::singleton(s)
        }
    }

    defrel! {
        trace stepo(x) {
            step(),
            eq(x, "done")
        }
    }

    #[test]
    fn traced_relation_runs_its_body_once_per_application() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .try_init();

        let x = Var::new(0);
        let answers = stepo(x).eval().into_vec();

        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].reify(&x.into()), Term::new("done"));
        assert_eq!(STEPS_TAKEN.load(Ordering::SeqCst), 1);
    }
}
