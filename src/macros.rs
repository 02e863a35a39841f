//! Macros for embedding microKanren as DSL in Rust

/// Creates a goal that succeeds if any of its subgoals succeeds
#[macro_export]
macro_rules! disj {
    () => { $crate::prelude::fail() };
    ($g:expr $(;)?) => { $g };
    ($g0:expr; $($g:expr);+ $(;)?) => { $crate::prelude::disj2($g0, $crate::disj!($($g);+)) };
}

/// Creates a goal that succeeds if all of its subgoals succeed
#[macro_export]
macro_rules! conj {
    () => { $crate::prelude::succeed() };
    ($g:expr $(,)?) => { $g };
    ($g0:expr, $($g:expr),+ $(,)?) => { $crate::prelude::conj2($g0, $crate::conj!($($g),+)) };
}

/// Define a relation.
/// A relation is a function that creates a goal.
///
/// Every argument accepts anything that converts into a
/// [`Term`](crate::prelude::Term). Inside the body the arguments are
/// `Term`s that may be consumed once; clone them to use them again.
/// The body is suspended, so recursive relations are productive.
///
/// Prefixing the name with `trace` logs every application of the
/// relation at `debug` level.
#[macro_export]
macro_rules! defrel {
    ($(#[$outer:meta])* pub trace $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        pub fn $name($($args: impl 'static + Into<$crate::prelude::Term>),*) -> impl $crate::prelude::Goal {
            $crate::defrel!(@tracebody: $name, $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* trace $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        fn $name($($args: impl 'static + Into<$crate::prelude::Term>),*) -> impl $crate::prelude::Goal {
            $crate::defrel!(@tracebody: $name, $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* pub $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        pub fn $name($($args: impl 'static + Into<$crate::prelude::Term>),*) -> impl $crate::prelude::Goal {
            $crate::defrel!(@body: $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        fn $name($($args: impl 'static + Into<$crate::prelude::Term>),*) -> impl $crate::prelude::Goal {
            $crate::defrel!(@body: $($args),* { $($g),* })
        }
    };

    // alternate syntax: separate goals with ;
    ($(#[$outer:meta])* pub $name:ident($($args:ident),*) { $($g:expr);* $(;)? }) => {
        $crate::defrel!{$(#[$outer])* pub $name($($args),*) { $($g),* }}
    };

    // alternate syntax: separate goals with ;
    ($(#[$outer:meta])* $name:ident($($args:ident),*) { $($g:expr);* $(;)? }) => {
        $crate::defrel!{$(#[$outer])* $name($($args),*) { $($g),* }}
    };

    (@body: $($args:ident),* { $($g:expr),* }) => {{
        $(
            let $args: $crate::prelude::Term = $args.into();
        )*
        move |s: $crate::prelude::State| {
            $(
                let $args = $args.clone();
            )*
            $crate::prelude::Stream::suspension(move || {
                $crate::prelude::Goal::apply(&$crate::conj!($($g),*), s)
            })
        }
    }};

    (@tracebody: $name:ident, $($args:ident),* { $($g:expr),* }) => {{
        $(
            let $args: $crate::prelude::Term = $args.into();
        )*
        move |s: $crate::prelude::State| {
            $crate::goals::trace_relation(
                stringify!($name),
                &[$((stringify!($args), &$args)),*],
                &s,
            );

            $(
                let $args = $args.clone();
            )*
            $crate::prelude::Stream::suspension(move || {
                $crate::prelude::Goal::apply(&$crate::conj!($($g),*), s)
            })
        }
    }};
}

/// Run one or more goals.
///
/// The syntax `run!(n, var(s), goal1, goal2, ...)` produces at most n
/// solutions; in Scheme you would write `(run n var(s) goal1 goal2 ...)`.
/// The syntax `run!(*, var(s), goal1, goal2, ...)` produces all
/// solutions; in Scheme you would write `(run* var(s) goal1 goal2 ...)`.
/// The latter does not return if there are infinitely many solutions.
///
/// We support an additional syntax `run!(var(s), goal1, goal2, ...)`
/// that returns a (possibly infinite) iterator over all solutions.
///
/// With a single query variable every solution is the reified value of
/// that variable. With a tuple of variables every solution is the list
/// of their reified values.
#[macro_export]
macro_rules! run {
    (*, ($($x:ident),*), $($body:tt)*) => {
        $crate::run!(@ *, ($($x),*), $($body)*)
    };

    (*, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@ *, $q, $($g),*)
    };

    ($n:expr, ($($x:ident),*), $($body:tt)*) => {
        $crate::run!(@ $n, ($($x),*), $($body)*)
    };

    ($n:tt, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@ $n, $q, $($g),*)
    };

    (($($x:ident),*), $($body:tt)*) => {
        $crate::run!(@ iter, ($($x),*), $($body)*)
    };

    ($q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@ iter, $q, $($g),*)
    };

    (@ $n:tt, ($($x:ident),*), $($g:expr),* $(,)?) => {
        $crate::run!(@ $n, q, {
            $crate::fresh!(
                ($($x),*),
                $crate::prelude::eq(
                    $crate::prelude::Term::list(vec![$($crate::prelude::Term::from($x)),*]),
                    q
                ),
                $($g),*
            )
        })
    };

    (@ *, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run_star(|#[allow(unused_variables)] $q: $crate::prelude::Var| $crate::conj!($($g),*))
    };

    (@ iter, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run_iter(|#[allow(unused_variables)] $q: $crate::prelude::Var| $crate::conj!($($g),*))
    };

    (@ $n:expr, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run_n($n, |#[allow(unused_variables)] $q: $crate::prelude::Var| $crate::conj!($($g),*))
    };
}

/// Bind fresh variables with scope inside the body of `fresh!`.
///
/// Each variable takes the next index from the search state when the
/// goal is applied. The body goals are rebuilt on every application, so
/// captured terms must be cloned where they are passed by value.
#[macro_export]
macro_rules! fresh {
    (($($x:ident),*), $($g:expr),* $(,)?) => {
        move |s: $crate::prelude::State| {
            $( let ($x, s) = s.fresh_var(); )*
            $crate::prelude::Goal::apply(&$crate::conj!($($g),*), s)
        }
    };
}

/// Creates a goal that succeeds if any of its *lines* succeeds.
/// Every successful *line* contributes one or more values.
///
/// A *line* (separated by `;`) succeeds if all of its
/// goals (separated by `,`) succeed.
#[macro_export]
macro_rules! conde {
    ( $($($g:expr),+);+ $(;)? ) => {
        $crate::disj!($($crate::conj!( $($g),+ ));+)
    };
}

/// Creates a goal that succeeds if any of its *lines* succeeds.
/// Only the first *line* whose first goal succeeds can contribute values.
///
/// A *line* (separated by `;`) succeeds if all of its
/// goals (separated by `,`) succeed.
#[macro_export]
macro_rules! conda {
    ($($g:expr),+ $(;)?) => { $crate::conj!($($g),+) };

    ($g0:expr $(, $g:expr)*; $($rest:tt)+) => {
        $crate::prelude::ifte($g0, $crate::conj!($($g),*), $crate::conda!($($rest)+))
    };
}

/// `condu!` behaves like `conda!`, except that a successful line
/// succeeds only once.
#[macro_export]
macro_rules! condu {
    ($g0:expr $(, $g:expr)* $(;)?) => {
        $crate::conj!($crate::prelude::once($g0) $(, $g)*)
    };

    ($g0:expr $(, $g:expr)*; $($rest:tt)+) => {
        $crate::prelude::ifte(
            $crate::prelude::once($g0),
            $crate::conj!($($g),*),
            $crate::condu!($($rest)+),
        )
    };
}

/// Build a proper list term, or an improper one with `;` before the tail.
///
/// `list![1, 2, 3]` is `(1 2 3)`, `list![1, 2 ; x]` is `(1 2 . x)` and a
/// parenthesized element starts a nested list.
#[macro_export]
macro_rules! list {
    () => { $crate::prelude::Term::Nil };

    (($($first:tt)*) $(,)?) => {
        $crate::prelude::Term::cons($crate::list![$($first)*], $crate::prelude::Term::Nil)
    };

    (($($first:tt)*), $($rest:tt)*) => {
        $crate::prelude::Term::cons($crate::list![$($first)*], $crate::list![$($rest)*])
    };

    ($single:expr $(,)?) => {
        $crate::prelude::Term::cons($single, $crate::prelude::Term::Nil)
    };

    ($car:expr ; $cdr:expr) => {
        $crate::prelude::Term::cons($car, $cdr)
    };

    ($first:expr, $($rest:tt)*) => {
        $crate::prelude::Term::cons($first, $crate::list![$($rest)*])
    };
}
