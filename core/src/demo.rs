//! The demonstration run
//!
//! Exercises every module in a fixed order and writes one line per result.

use std::io::Write;

use tracing::{debug, info};

use crate::capture::{outer_function, outer_function_with, outer_function_with_closure};
use crate::config::DemoConfig;
use crate::error::Result;
use crate::lazy::eval_explicit;
use crate::names::NameList;
use crate::registry::{register, registered_count};
use crate::sort::{sort_using_closure, sort_using_closure_short, sort_using_nested_function};

/// Run the demonstration, writing its results to `out`.
///
/// Fails only if a removal hits an empty name list or `out` cannot be
/// written.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    info!("starting closure demonstration");

    debug!("nested function call");
    for line in outer_function() {
        writeln!(out, "{line}")?;
    }

    debug!("capture");
    let (value, argument) = config.nested_capture;
    let result_function = outer_function_with(value);
    writeln!(out, "{}", result_function(argument))?;

    let (value, argument) = config.closure_capture;
    let result_closure = outer_function_with_closure(value);
    writeln!(out, "{}", result_closure(argument))?;

    debug!("deferred arguments");
    let mut friends: NameList = config.names.iter().cloned().collect();
    let first = crate::eval_lazy!(friends.remove_first())?;
    writeln!(out, "removeAt: {first}")?;
    let last = crate::eval_lazy!(friends.remove_last())?;
    writeln!(out, "removeAt: {last}")?;
    let next = eval_explicit(|| friends.remove_first())?;
    writeln!(out, "removeAtWithoutAutoclosure: {next}")?;
    writeln!(out, "{friends}")?;

    debug!("escaping closures");
    let remaining = friends.to_vec();
    register(move || debug!(?remaining, "completion handler"));
    writeln!(out, "completion handlers: {}", registered_count())?;

    debug!("comparator sorts");
    let [nested, closure, short] = &config.sort_inputs;
    writeln!(out, "{:?}", sort_using_nested_function(nested))?;
    writeln!(out, "{:?}", sort_using_closure(closure))?;
    writeln!(out, "{:?}", sort_using_closure_short(short))?;

    info!("closure demonstration complete");
    Ok(())
}
