//! Stack growth for recursive descent.
//!
//! Both the parser and the evaluator recurse once per nesting level of the
//! program. Deep programs (long `Seq` chains, deeply nested calls) would
//! overflow the thread stack, so every recursive entry point goes through
//! [`ensure_sufficient_stack`], which moves onto a fresh heap-allocated stack
//! segment when the current one runs low.
//!
//! On `wasm32` the closure is called directly.

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Remaining stack below which a new segment is allocated.
    const RED_ZONE: usize = 128 * 1024;

    /// Size of each newly allocated stack segment.
    const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
