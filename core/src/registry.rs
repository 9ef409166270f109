//! Deferred-invocation registry
//!
//! Completion handlers are stored for later and never called here. The
//! `'static` bound is what makes them escaping: a handler, and everything it
//! captured, must stay valid after the registering call has returned.

use std::cell::RefCell;
use std::fmt;

use tracing::debug;

/// A stored zero-argument callback.
pub type CompletionHandler = Box<dyn Fn()>;

/// Position of a handler in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandlerId(pub usize);

/// Append-only, ordered collection of completion handlers.
#[derive(Default)]
pub struct CompletionHandlers {
    handlers: Vec<CompletionHandler>,
}

impl CompletionHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handler` after every handler registered before it.
    pub fn register<F>(&mut self, handler: F) -> HandlerId
    where
        F: Fn() + 'static,
    {
        let id = HandlerId(self.handlers.len());
        self.handlers.push(Box::new(handler));
        debug!(id = id.0, "registered completion handler");
        id
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for CompletionHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionHandlers")
            .field("handlers", &format_args!("<{} handlers>", self.handlers.len()))
            .finish()
    }
}

// ============================================================================
// Process-wide Registry
// ============================================================================

thread_local! {
    static COMPLETION_HANDLERS: RefCell<CompletionHandlers> =
        RefCell::new(CompletionHandlers::new());
}

/// Append `handler` to this thread's process-wide registry.
pub fn register<F>(handler: F) -> HandlerId
where
    F: Fn() + 'static,
{
    COMPLETION_HANDLERS.with_borrow_mut(|handlers| handlers.register(handler))
}

/// Number of handlers registered on this thread so far.
pub fn registered_count() -> usize {
    COMPLETION_HANDLERS.with_borrow(CompletionHandlers::len)
}
