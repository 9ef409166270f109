//! Nested functions and captured values
//!
//! A nested function can only use what it is handed, so returning one that
//! "remembers" the outer argument means pairing it with a `move` closure.
//! The closure variants capture the outer argument directly.

use std::rc::Rc;

use tracing::trace;

/// Boxed unary function over integers, as returned by the closure variant.
pub type UnaryFn = Box<dyn Fn(i64) -> i64>;

// ============================================================================
// Nested Function Call
// ============================================================================

/// Define a nested function and call it from the enclosing body.
///
/// Returns the messages in the order they were produced.
pub fn outer_function() -> Vec<&'static str> {
    let mut trace = vec!["outer function"];

    fn inner_function(trace: &mut Vec<&'static str>) {
        trace.push("inner function");
    }

    inner_function(&mut trace);
    trace
}

// ============================================================================
// Capture
// ============================================================================

/// Return a function adding `value` to its argument, built on a named nested
/// function.
pub fn outer_function_with(value: i64) -> impl Fn(i64) -> i64 {
    fn inner_function(value: i64, another_value: i64) -> i64 {
        value + another_value
    }

    trace!(value, "capturing into nested function");
    move |another_value| inner_function(value, another_value)
}

/// Same contract as [`outer_function_with`], expressed as an anonymous
/// closure bound to a local before being returned.
pub fn outer_function_with_closure(value: i64) -> UnaryFn {
    let closure: UnaryFn = Box::new(move |another_value: i64| value + another_value);
    trace!(value, "capturing into closure");
    closure
}

/// Captures through a shared cell instead of by value.
///
/// The returned function keeps the cell alive for as long as it is reachable.
pub fn outer_function_shared(value: i64) -> impl Fn(i64) -> i64 {
    let cell = Rc::new(value);
    move |another_value| *cell + another_value
}
