//! crates/logging/src/tracing_macros.rs
//! Convenience macros for dircat-specific tracing.
//!
//! These macros provide ergonomic wrappers around standard tracing macros
//! with appropriate targets for dircat subsystems.

/// Emit a traversal trace.
///
/// # Example
/// ```ignore
/// trace_walk!("entering directory {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_walk {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "dircat::walk", $($arg)*);
    };
}

/// Emit a filter decision trace.
///
/// # Example
/// ```ignore
/// trace_filter!("pruned {}: {}", rel, reason);
/// ```
#[macro_export]
macro_rules! trace_filter {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "dircat::filter", $($arg)*);
    };
}

/// Emit a document rendering trace.
///
/// # Example
/// ```ignore
/// trace_render!("wrote block {} for {}", index, rel);
/// ```
#[macro_export]
macro_rules! trace_render {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "dircat::render", $($arg)*);
    };
}
