//! Diagnostics module
//!
//! Non-fatal problems detected by the engine: bad page sizes, out-of-range
//! navigation, ambiguous ownership and malformed collections.
//!
//! # Overview
//!
//! Nothing in here alters control flow. The engine detects a problem,
//! corrects or ignores the offending input, and hands a [`Diagnostic`] to
//! whatever [`DiagnosticSink`] the caller injected. The default sink forwards
//! to `tracing` in debug builds only.

mod sink;
mod types;

pub use sink::{DiagnosticSink, NullSink, RecordingSink, TracingSink, LOG_PREFIX};
pub use types::{Diagnostic, DiagnosticKind};
