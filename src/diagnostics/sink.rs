//! Diagnostic sinks
//!
//! Sinks take `&self` so a paginator can report from read-only operations.

use super::types::Diagnostic;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Prefix attached to every diagnostic forwarded to the log
pub const LOG_PREFIX: &str = "[pagekit]";

/// Receives diagnostics emitted by the engine
pub trait DiagnosticSink {
    /// Handle a single diagnostic
    fn emit(&self, diagnostic: &Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn emit(&self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn emit(&self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Rc<S> {
    fn emit(&self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn emit(&self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` as warnings
///
/// Silent in release builds.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        if cfg!(debug_assertions) {
            tracing::warn!(kind = ?diagnostic.kind(), "{} {}", LOG_PREFIX, diagnostic);
        }
    }
}

/// Discards every diagnostic
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: &Diagnostic) {}
}

/// Collects diagnostics in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    recorded: RefCell<Vec<Diagnostic>>,
}

impl RecordingSink {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.recorded.borrow().clone()
    }

    /// Drain everything recorded so far
    pub fn take(&self) -> Vec<Diagnostic> {
        self.recorded.take()
    }

    /// Number of recorded diagnostics
    pub fn len(&self) -> usize {
        self.recorded.borrow().len()
    }

    /// True when nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.recorded.borrow().is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.recorded.borrow_mut().push(diagnostic.clone());
    }
}
