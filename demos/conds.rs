//! Demonstrate different kinds of cond

use ukanren::prelude::*;
use ukanren::{conda, conde, condu, conj, defrel, list, run};

defrel! {
    /// Create a goal that succeeds if x occurs in s1 or s2 and r contains the correct result
    whiche(x, s1, s2, r) {
        conde! {
            membero(x.clone(), s1.clone()), membero(x.clone(), s2.clone()), eq(r.clone(), "both");
            membero(x.clone(), s1.clone()), eq(r.clone(), "one");
            membero(x.clone(), s2.clone()), eq(r.clone(), "two");
        }
    }
}

defrel! {
    /// Create a goal that succeeds if x occurs in s1 or s2 and r contains the correct result
    whicha(x, s1, s2, r) {
        conda! {
            conj!(membero(x.clone(), s1.clone()), membero(x.clone(), s2.clone())), eq(r.clone(), "both");
            membero(x.clone(), s1.clone()), eq(r.clone(), "one");
            membero(x.clone(), s2.clone()), eq(r.clone(), "two");
        }
    }
}

defrel! {
    /// Like `whicha`, but every line contributes at most one membership proof
    whichu(x, s1, s2, r) {
        condu! {
            membero(x.clone(), s1.clone()), eq(r.clone(), "one");
            membero(x.clone(), s2.clone()), eq(r.clone(), "two");
        }
    }
}

fn main() {
    env_logger::Builder::new().parse_default_env().init();

    println!(
        "Which list contains 3 using conde? {:?}",
        run!(*, q, whiche(3, list![1, 2, 3], list![3, 4, 5], q))
    );
    println!(
        "Which list contains 3 using conda? {:?}",
        run!(*, q, whicha(3, list![1, 2, 3], list![3, 4, 5], q))
    );
    println!(
        "Which list contains 3 using condu? {:?}",
        run!(*, q, whichu(3, list![3, 3, 3], list![3, 4, 5], q))
    );
}
