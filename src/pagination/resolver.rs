//! Pagination state resolver
//!
//! Single source of truth for "which page are we on" over a borrowed
//! collection. All operations are synchronous: a change callback runs
//! before the navigation that triggered it returns.

use super::types::{IntoPageNumber, Ownership, PaginationConfig};
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::range::{self, DisplayEntry, PageWindow};
use std::fmt;

type ChangeCallback<'a> = Box<dyn FnMut(usize) + 'a>;

/// Stateful paginator over a borrowed collection
pub struct Paginator<'a, T> {
    data: &'a [T],
    page_size: usize,
    ownership: Ownership,
    on_page_change: Option<ChangeCallback<'a>>,
    sink: Box<dyn DiagnosticSink + 'a>,
}

impl<'a, T> Paginator<'a, T> {
    /// Create an uncontrolled or controlled paginator from a config
    ///
    /// Diagnostics go to [`TracingSink`]. Use [`Paginator::builder`] to
    /// attach a change callback or a different sink.
    pub fn new(data: &'a [T], config: PaginationConfig) -> Self {
        Self::builder(data).config(config).build()
    }

    /// Start building a paginator
    pub fn builder(data: &'a [T]) -> PaginatorBuilder<'a, T> {
        PaginatorBuilder::new(data)
    }

    /// Current page window
    ///
    /// Reflects the latest position and page size. A controlled position
    /// outside the valid range is clamped here and reported.
    pub fn read(&self) -> PageWindow<'a, T> {
        range::slice(
            self.data,
            self.page_size as i64,
            self.ownership.raw_position(),
            &*self.sink,
        )
    }

    /// Current page, clamped into range
    pub fn position(&self) -> usize {
        range::clamp_position(self.ownership.raw_position(), self.total_pages())
    }

    /// Number of pages under the current page size
    pub fn total_pages(&self) -> usize {
        range::total_pages(self.data.len(), self.page_size)
    }

    /// Items per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The borrowed collection
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Ownership mode chosen at build time
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Check if the caller owns the position
    pub fn is_controlled(&self) -> bool {
        self.ownership.is_controlled()
    }

    /// A page exists after the current one
    pub fn has_next(&self) -> bool {
        self.position() < self.total_pages()
    }

    /// A page exists before the current one
    pub fn has_prev(&self) -> bool {
        self.position() > 1
    }

    /// Page numbers to show in navigation controls
    pub fn display_sequence(&self, max_buttons: usize) -> Vec<DisplayEntry> {
        range::display_sequence(self.position(), self.total_pages(), max_buttons)
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Navigate to `page`
    ///
    /// Targets outside `1..=total_pages` and unparseable input are rejected
    /// with a diagnostic and leave the position untouched. Accepted targets
    /// update the position (uncontrolled mode) and are passed to the change
    /// callback (both modes), even when equal to the current page.
    pub fn go_to_page(&mut self, page: impl IntoPageNumber) {
        let requested = match page.into_page_number() {
            Ok(requested) => requested,
            Err(input) => {
                self.sink.emit(&Diagnostic::Unparseable { input });
                return;
            }
        };

        let total_pages = self.total_pages();
        if requested < 1 || requested > total_pages as i64 {
            self.sink.emit(&Diagnostic::OutOfRange {
                requested,
                total_pages,
            });
            return;
        }

        self.commit(requested as usize);
    }

    /// Navigate one page forward; no-op on the last page
    pub fn go_to_next(&mut self) {
        if self.has_next() {
            self.go_to_page(self.position() + 1);
        }
    }

    /// Navigate one page back; no-op on the first page
    pub fn go_to_prev(&mut self) {
        if self.has_prev() {
            self.go_to_page(self.position() - 1);
        }
    }

    /// Navigate to page 1
    pub fn go_to_first(&mut self) {
        self.go_to_page(1_usize);
    }

    /// Navigate to the last page
    pub fn go_to_last(&mut self) {
        self.go_to_page(self.total_pages());
    }

    // ========================================================================
    // Reconfiguration
    // ========================================================================

    /// Change the page size
    ///
    /// Non-positive sizes are rejected. Otherwise the position is clamped
    /// into the new range, and the change callback fires if clamping moved
    /// it.
    pub fn set_page_size(&mut self, page_size: i64) {
        if page_size <= 0 {
            self.sink
                .emit(&Diagnostic::PageSizeRejected { value: page_size });
            return;
        }

        let previous = self.position();
        self.page_size = page_size as usize;
        let clamped = range::clamp_position(previous as i64, self.total_pages());

        if let Ownership::Uncontrolled { position } = &mut self.ownership {
            *position = clamped;
        }

        if clamped != previous {
            tracing::debug!(previous, clamped, page_size, "page size change moved position");
            self.notify(clamped);
        }
    }

    /// Mirror the caller's position in controlled mode
    ///
    /// The value is stored as given; [`read`](Self::read) clamps it.
    /// Ignored with a diagnostic on an uncontrolled paginator.
    pub fn set_current_page(&mut self, page: i64) {
        let mode = self.ownership.label();
        match &mut self.ownership {
            Ownership::Controlled { position } => *position = page,
            Ownership::Uncontrolled { .. } => self.sink.emit(&Diagnostic::ModeChange {
                attempted: "set the current page",
                mode,
            }),
        }
    }

    /// Replace the borrowed collection
    ///
    /// In uncontrolled mode the position is clamped to the new page count,
    /// and the change callback fires if clamping moved it. A controlled
    /// position is left to the caller; reads clamp it.
    pub fn set_collection(&mut self, data: &'a [T]) {
        let previous = self.position();
        self.data = data;

        if self.is_controlled() {
            return;
        }

        let clamped = range::clamp_position(previous as i64, self.total_pages());
        if let Ownership::Uncontrolled { position } = &mut self.ownership {
            *position = clamped;
        }

        if clamped != previous {
            tracing::debug!(previous, clamped, "collection change moved position");
            self.notify(clamped);
        }
    }

    fn commit(&mut self, page: usize) {
        if let Ownership::Uncontrolled { position } = &mut self.ownership {
            *position = page;
        }
        tracing::debug!(page, controlled = self.is_controlled(), "navigated");
        self.notify(page);
    }

    fn notify(&mut self, page: usize) {
        if let Some(callback) = self.on_page_change.as_mut() {
            callback(page);
        }
    }
}

impl<T> fmt::Debug for Paginator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("total_items", &self.data.len())
            .field("page_size", &self.page_size)
            .field("ownership", &self.ownership)
            .field("has_callback", &self.on_page_change.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Paginator`]
pub struct PaginatorBuilder<'a, T> {
    data: &'a [T],
    config: PaginationConfig,
    on_page_change: Option<ChangeCallback<'a>>,
    sink: Option<Box<dyn DiagnosticSink + 'a>>,
}

impl<'a, T> PaginatorBuilder<'a, T> {
    /// Create a builder with default settings
    pub fn new(data: &'a [T]) -> Self {
        Self {
            data,
            config: PaginationConfig::default(),
            on_page_change: None,
            sink: None,
        }
    }

    /// Replace all serializable settings
    pub fn config(mut self, config: PaginationConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the page size
    pub fn page_size(mut self, page_size: i64) -> Self {
        self.config.page_size = page_size;
        self
    }

    /// Set the starting page for uncontrolled mode
    pub fn initial_page(mut self, page: i64) -> Self {
        self.config.initial_page = Some(page);
        self
    }

    /// Select controlled mode with the caller's current page
    pub fn current_page(mut self, page: i64) -> Self {
        self.config.current_page = Some(page);
        self
    }

    /// Callback receiving every accepted page change
    pub fn on_page_change(mut self, callback: impl FnMut(usize) + 'a) -> Self {
        self.on_page_change = Some(Box::new(callback));
        self
    }

    /// Sink receiving diagnostics (default: [`TracingSink`])
    pub fn diagnostics(mut self, sink: impl DiagnosticSink + 'a) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Finish building
    ///
    /// Ownership warnings are emitted here, once per paginator.
    pub fn build(self) -> Paginator<'a, T> {
        let sink: Box<dyn DiagnosticSink + 'a> =
            self.sink.unwrap_or_else(|| Box::new(TracingSink));
        let config = self.config;

        if config.current_page.is_some() {
            if self.on_page_change.is_none() {
                sink.emit(&Diagnostic::ControlledWithoutHandler);
            }
            if config.initial_page.is_some() {
                sink.emit(&Diagnostic::BothPositionsSupplied);
            }
        }

        let page_size = range::sanitize_page_size(config.page_size, &*sink);

        let ownership = match config.current_page {
            Some(position) => Ownership::Controlled { position },
            None => {
                let requested = config.initial_page.unwrap_or(1);
                let total_pages = range::total_pages(self.data.len(), page_size);
                let position = range::clamp_position(requested, total_pages);
                if position as i64 != requested {
                    sink.emit(&Diagnostic::PositionClamped {
                        requested,
                        clamped: position,
                        total_pages,
                    });
                }
                Ownership::Uncontrolled { position }
            }
        };

        Paginator {
            data: self.data,
            page_size,
            ownership,
            on_page_change: self.on_page_change,
            sink,
        }
    }
}

impl<T> fmt::Debug for PaginatorBuilder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginatorBuilder")
            .field("total_items", &self.data.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
