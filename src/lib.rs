//! # pagekit
//!
//! A headless pagination engine for in-memory collections.
//!
//! ## Features
//!
//! - **Page windows**: slice any `&[T]` into pages with 1-based bounds
//! - **Controlled and uncontrolled ownership**: the paginator stores the
//!   current page, or mirrors one stored by the caller
//! - **Display sequences**: bounded, ellipsis-compressed page numbers for
//!   navigation controls
//! - **Headless controls**: first/prev/pages/next/last without markup
//! - **Non-fatal diagnostics**: invalid input is corrected and reported
//!   through an injectable sink, never raised
//!
//! ## Quick Start
//!
//! ```rust
//! use pagekit::{Paginator, range::display_sequence};
//!
//! let items: Vec<u32> = (1..=47).collect();
//! let mut paginator = Paginator::builder(&items)
//!     .page_size(10)
//!     .on_page_change(|page| println!("now on page {page}"))
//!     .build();
//!
//! paginator.go_to_last();
//! let window = paginator.read();
//! assert_eq!(window.items, &[41, 42, 43, 44, 45, 46, 47]);
//! assert!(!window.has_next);
//!
//! let sequence = display_sequence(window.position, window.total_pages, 5);
//! assert_eq!(sequence.len(), 5);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Paginator                         │
//! │  read() → PageWindow   go_to_*()   set_page_size()       │
//! └──────────────────────────────────────────────────────────┘
//!                 │                              │
//! ┌───────────────┴──────────────┐  ┌────────────┴───────────┐
//! │            range             │  │       diagnostics      │
//! ├──────────────────────────────┤  ├────────────────────────┤
//! │ slice / total_pages          │  │ Diagnostic             │
//! │ display_sequence             │  │ TracingSink / Recording│
//! └──────────────────────────────┘  └────────────────────────┘
//!                 │
//! ┌───────────────┴──────────────┐
//! │           controls           │
//! │ build_controls / render_text │
//! └──────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for file loading and the CLI
pub mod error;

/// Non-fatal diagnostics and sinks
pub mod diagnostics;

/// Page window and display sequence calculations
pub mod range;

/// Pagination state resolver
pub mod pagination;

/// Headless control strip model
pub mod controls;

/// Collection and settings loading
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink};
pub use error::{Error, Result};
pub use pagination::{IntoPageNumber, Ownership, PaginationConfig, Paginator, PaginatorBuilder};
pub use range::{DisplayEntry, GapKind, PageWindow};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
