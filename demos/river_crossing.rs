//! A farmer with a wolf, a goat and a cabbage must cross a river by boat.
//! The boat carries the farmer and at most one item. Left alone together,
//! the wolf eats the goat and the goat eats the cabbage.
//!
//! A bank position is the list `(farmer wolf goat cabbage)`, each entry
//! `"west"` or `"east"`. A plan is the list of cargo carried on every
//! crossing. Run with `RUST_LOG=debug` to trace every attempted move.

use clap::Parser;
use ukanren::prelude::*;
use ukanren::{conda, conde, defrel, fresh, list};

/// Search for plans that get everything across the river.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Maximum number of plans to print
    #[arg(short, long, default_value_t = 2)]
    solutions: usize,

    /// Reject cyclic bindings during unification
    #[arg(long, env = "UKANREN_OCCURS_CHECK")]
    occurs_check: bool,
}

defrel! {
    /// `a` and `b` are opposite banks.
    oppositeo(a, b) {
        conde! {
            eq(a.clone(), "west"), eq(b.clone(), "east");
            eq(a, "east"), eq(b, "west");
        }
    }
}

defrel! {
    /// Nobody gets eaten: the goat is with the farmer or alone.
    safeo(position) {
        fresh!{ (farmer, wolf, goat, cabbage),
            eq(list![farmer, wolf, goat, cabbage], position.clone()),
            conde! {
                eq(goat, farmer);
                oppositeo(goat, farmer), oppositeo(goat, wolf), oppositeo(goat, cabbage);
            }
        }
    }
}

defrel! {
    /// The farmer crosses from `from` to `to`, carrying `cargo`.
    trace moveo(from, cargo, to) {
        fresh!{ (farmer, wolf, goat, cabbage, across),
            eq(list![farmer, wolf, goat, cabbage], from.clone()),
            oppositeo(farmer, across),
            conde! {
                eq(cargo.clone(), "nothing"), eq(to.clone(), list![across, wolf, goat, cabbage]);
                eq(cargo.clone(), "wolf"), eq(wolf, farmer), eq(to.clone(), list![across, across, goat, cabbage]);
                eq(cargo.clone(), "goat"), eq(goat, farmer), eq(to.clone(), list![across, wolf, across, cabbage]);
                eq(cargo.clone(), "cabbage"), eq(cabbage, farmer), eq(to.clone(), list![across, wolf, goat, across]);
            }
        }
    }
}

defrel! {
    /// `plan` leads from `position` to the east bank without revisiting
    /// any position in `history`.
    plano(position, history, plan) {
        conde! {
            eq(position.clone(), list!["east", "east", "east", "east"]), eq(plan.clone(), Term::Nil);
            fresh!{ (cargo, next, rest),
                moveo(position.clone(), cargo, next),
                safeo(next),
                conda! {
                    membero(next, history.clone()), fail();
                    succeed();
                },
                eq(plan.clone(), Term::cons(cargo, rest)),
                plano(next, Term::cons(next, history.clone()), rest),
            };
        }
    }
}

fn main() -> Result<(), TermError> {
    env_logger::Builder::new().parse_default_env().init();

    let cli = Cli::parse();
    let config = Config::new().with_occurs_check(cli.occurs_check);
    log::info!("searching for {} plan(s) with {:?}", cli.solutions, config);

    let start = list!["west", "west", "west", "west"];
    let plans = ukanren::run_n_with(config, cli.solutions, move |plan| {
        plano(start.clone(), list![start], plan)
    });

    for (i, plan) in plans.into_iter().enumerate() {
        let steps = plan
            .to_vec()?
            .into_iter()
            .map(String::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        println!("plan {}: {}", i + 1, steps.join(", "));
    }

    Ok(())
}
