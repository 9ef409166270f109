//! Deferred arguments
//!
//! Rust has no implicit wrapping of an argument expression into a closure,
//! so the autoclosure form is a macro: [`eval_lazy!`](macro@crate::eval_lazy)
//! accepts a bare expression and hands the callee a [`Deferred`] that has not
//! run yet. [`eval_explicit`] is the same contract with the closure written
//! out at the call site.
//!
//! Neither form evaluates anything before the callee forces it, and a
//! `Deferred` that is dropped unforced never runs at all.

use std::fmt;

use tracing::trace;

/// An expression whose evaluation is postponed until [`Deferred::force`].
///
/// The lifetime lets the expression borrow the caller's locals; unlike a
/// registered completion handler it cannot escape the call it is passed to.
pub struct Deferred<'a, T> {
    thunk: Box<dyn FnOnce() -> T + 'a>,
}

impl<'a, T> Deferred<'a, T> {
    pub fn new<F>(thunk: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Deferred {
            thunk: Box::new(thunk),
        }
    }

    /// Run the expression now.
    pub fn force(self) -> T {
        (self.thunk)()
    }
}

impl<T> fmt::Debug for Deferred<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Deferred(<unevaluated>)")
    }
}

/// Wrap a bare expression into a [`Deferred`] without evaluating it.
#[macro_export]
macro_rules! deferred {
    ($expr:expr) => {
        $crate::lazy::Deferred::new(|| $expr)
    };
}

/// Call [`eval_lazy`](crate::lazy::eval_lazy) with a bare expression as the
/// argument, e.g. `eval_lazy!(friends.remove_first())`.
#[macro_export]
macro_rules! eval_lazy {
    ($expr:expr) => {
        $crate::lazy::eval_lazy($crate::deferred!($expr))
    };
}

/// Force `expr` inside the callee and return its value.
pub fn eval_lazy<T>(expr: Deferred<'_, T>) -> T {
    trace!("forcing deferred argument");
    expr.force()
}

/// Like [`eval_lazy`], but the caller builds the closure explicitly.
pub fn eval_explicit<T, F>(closure: F) -> T
where
    F: FnOnce() -> T,
{
    trace!("invoking explicit closure argument");
    closure()
}

/// Force `expr` only when `condition` holds; otherwise it is dropped
/// unevaluated.
pub fn eval_when<T>(condition: bool, expr: Deferred<'_, T>) -> Option<T> {
    if condition {
        Some(expr.force())
    } else {
        trace!("dropping deferred argument unevaluated");
        None
    }
}
