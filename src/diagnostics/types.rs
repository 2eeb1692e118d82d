//! Diagnostic taxonomy

use thiserror::Error;

/// Broad category of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Page size or position corrected to a safe value
    InvalidConfiguration,
    /// Explicit navigation target rejected
    OutOfRangeNavigation,
    /// Controlled/uncontrolled ownership is unclear or misused
    AmbiguousOwnership,
    /// Input expected to be a sequence was something else
    MalformedCollection,
}

/// A single non-fatal problem reported by the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    // ============================================================================
    // Invalid Configuration
    // ============================================================================
    #[error("page size must be a positive number, got {value}. Defaulting to {fallback}.")]
    InvalidPageSize { value: i64, fallback: usize },

    #[error("page size must be a positive number, got {value}. Ignoring.")]
    PageSizeRejected { value: i64 },

    #[error(
        "current page {requested} is out of bounds. Clamping to {clamped} (valid range: 1-{total_pages})."
    )]
    PositionClamped {
        requested: i64,
        clamped: usize,
        total_pages: usize,
    },

    // ============================================================================
    // Out-of-range Navigation
    // ============================================================================
    #[error("Page {requested} is out of bounds. Valid range: 1-{total_pages}")]
    OutOfRange { requested: i64, total_pages: usize },

    #[error("'{input}' is not a page number")]
    Unparseable { input: String },

    // ============================================================================
    // Ambiguous Ownership
    // ============================================================================
    #[error(
        "A current page was provided without a page change handler. The paginator is read-only."
    )]
    ControlledWithoutHandler,

    #[error("Both an initial page and a current page were provided. The current page takes precedence.")]
    BothPositionsSupplied,

    #[error("Cannot {attempted}: the paginator is {mode}. Ownership is fixed when it is built.")]
    ModeChange {
        attempted: &'static str,
        mode: &'static str,
    },

    // ============================================================================
    // Malformed Collection
    // ============================================================================
    #[error("data must be an array, got {found}. Defaulting to an empty collection.")]
    MalformedCollection { found: String },
}

impl Diagnostic {
    /// Category this diagnostic belongs to
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::InvalidPageSize { .. }
            | Self::PageSizeRejected { .. }
            | Self::PositionClamped { .. } => DiagnosticKind::InvalidConfiguration,
            Self::OutOfRange { .. } | Self::Unparseable { .. } => {
                DiagnosticKind::OutOfRangeNavigation
            }
            Self::ControlledWithoutHandler
            | Self::BothPositionsSupplied
            | Self::ModeChange { .. } => DiagnosticKind::AmbiguousOwnership,
            Self::MalformedCollection { .. } => DiagnosticKind::MalformedCollection,
        }
    }
}
