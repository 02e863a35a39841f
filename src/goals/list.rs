//! Relations over lists built from pairs.

use crate::core::term::Term;
use crate::goals::primitive::eq;

defrel! {
    /// `p` is the pair with head `a` and tail `d`.
    pub conso(a, d, p) {
        eq(Term::cons(a, d), p)
    }
}

defrel! {
    /// `a` is the head of the pair `p`.
    pub caro(p, a) {
        fresh!{ (d),
            eq(Term::cons(a.clone(), d), p.clone())
        }
    }
}

defrel! {
    /// `d` is the tail of the pair `p`.
    pub cdro(p, d) {
        fresh!{ (a),
            eq(Term::cons(a, d.clone()), p.clone())
        }
    }
}

defrel! {
    /// `x` is the empty list.
    pub nullo(x) {
        eq(x, Term::Nil)
    }
}

defrel! {
    /// `p` is a pair.
    pub pairo(p) {
        fresh!{ (a, d),
            conso(a, d, p.clone())
        }
    }
}

defrel! {
    /// `x` is an element of the list `l`.
    pub membero(x, l) {
        conde!(
            caro(l.clone(), x.clone());
            fresh!{ (d),
                cdro(l.clone(), d),
                membero(x.clone(), d),
            })
    }
}

defrel! {
    /// `out` is the list `l` followed by the elements of `t`.
    pub appendo(l, t, out) {
        conde!(
            nullo(l.clone()), eq(t.clone(), out.clone());
            fresh!{ (a, d, res),
                conso(a, d, l.clone()),
                conso(a, res, out.clone()),
                appendo(d, t.clone(), res),
            })
    }
}
