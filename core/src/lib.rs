//! Closure demonstration library for Enclose
//!
//! Nested functions, captured values, escaping completion handlers,
//! deferred arguments, and sorting with comparator closures. The
//! [`demo`] module runs all of them in a fixed order; the `enclose`
//! binary prints that run.

pub mod capture;
pub mod config;
pub mod demo;
pub mod error;
pub mod lazy;
pub mod names;
pub mod registry;
pub mod sort;

// Re-export commonly used items for convenience
pub use capture::{
    UnaryFn, outer_function, outer_function_shared, outer_function_with,
    outer_function_with_closure,
};
pub use config::DemoConfig;
pub use error::{Error, Result};
pub use lazy::{Deferred, eval_explicit, eval_lazy, eval_when};
pub use names::{KAKAO_FRIENDS, NameList, NameListError, Removal};
pub use registry::{
    CompletionHandler, CompletionHandlers, HandlerId, register, registered_count,
};
pub use sort::{
    sort_using_closure, sort_using_closure_short, sort_using_nested_function, sorted_by,
};
