//! Tracing support for the AOS containers
//!
//! This module provides structured tracing capabilities that work in both
//! std and no_std environments. It wraps the `tracing` crate and provides
//! container-specific span helpers for following capacity decisions.

pub use ::tracing::{debug, error, info, trace, warn};
pub use ::tracing::{debug_span, error_span, info_span, span, trace_span, warn_span};
pub use ::tracing::{event, Level, Span};

/// Re-export tracing macros for convenience
pub use ::tracing::{field, span_enabled};

/// Trace spans for container operations
#[derive(Debug, Clone)]
pub struct ContainerTrace;

impl ContainerTrace {
    /// Create a span for a bulk insertion into a bounded container
    #[inline]
    pub fn inserting(container: &'static str, len: usize, count: usize, capacity: usize) -> Span {
        trace_span!("container_insert", container = %container, len = %len, count = %count, capacity = %capacity)
    }

    /// Create a span for an in-place sort
    #[inline]
    pub fn sorting(len: usize) -> Span {
        trace_span!("container_sort", len = %len)
    }

    /// Create a span for binding a typed view to a buffer
    #[inline]
    pub fn binding(container: &'static str, size: usize) -> Span {
        debug_span!("container_bind", container = %container, buffer_size = %size)
    }
}

/// Trace spans for heap-owning containers
#[derive(Debug, Clone)]
pub struct AllocationTrace;

impl AllocationTrace {
    /// Create a span for the single allocation of a dynamic container
    #[inline]
    pub fn allocating(container: &'static str, size: usize) -> Span {
        debug_span!("container_alloc", container = %container, size = %size)
    }
}
