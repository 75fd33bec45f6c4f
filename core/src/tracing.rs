//! Tracing utilities for statement assembly observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event with the assembled SQL text and dialect.
///
/// ```ignore
/// quarry_trace_assemble!(&sql, self.adapter.dialect());
/// ```
#[macro_export]
macro_rules! quarry_trace_assemble {
    ($sql:expr, $dialect:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(sql = %$sql, dialect = %$dialect, "quarry.assemble");
    };
}

/// Emit a debug-level tracing event when a builder call is rejected.
///
/// ```ignore
/// quarry_trace_reject!("where", &err);
/// ```
#[macro_export]
macro_rules! quarry_trace_reject {
    ($operation:expr, $error:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(operation = $operation, error = %$error, "quarry.rejected");
    };
}
