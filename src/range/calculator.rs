//! Window and display sequence calculations

use super::types::{DisplayEntry, GapKind, PageWindow};
use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// Page size used when none (or an invalid one) is given
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of numbered buttons used when none (or zero) is given
pub const DEFAULT_MAX_BUTTONS: usize = 5;

/// Number of pages needed for `total_items`, never less than 1
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested position into `1..=total_pages`
pub fn clamp_position(position: i64, total_pages: usize) -> usize {
    let upper = total_pages.max(1) as i64;
    position.clamp(1, upper) as usize
}

/// Replace a non-positive page size with [`DEFAULT_PAGE_SIZE`]
pub fn sanitize_page_size(page_size: i64, sink: &dyn DiagnosticSink) -> usize {
    if page_size > 0 {
        page_size as usize
    } else {
        sink.emit(&Diagnostic::InvalidPageSize {
            value: page_size,
            fallback: DEFAULT_PAGE_SIZE,
        });
        DEFAULT_PAGE_SIZE
    }
}

/// Cut the page at `position` out of `data`
///
/// Page size and position are sanitized first: a non-positive page size
/// falls back to the default, an out-of-range position is clamped. Both
/// corrections are reported to `sink`.
pub fn slice<'a, T>(
    data: &'a [T],
    page_size: i64,
    position: i64,
    sink: &dyn DiagnosticSink,
) -> PageWindow<'a, T> {
    let page_size = sanitize_page_size(page_size, sink);
    let total_items = data.len();
    let total_pages = total_pages(total_items, page_size);

    let clamped = clamp_position(position, total_pages);
    if clamped as i64 != position {
        sink.emit(&Diagnostic::PositionClamped {
            requested: position,
            clamped,
            total_pages,
        });
    }

    let start = ((clamped - 1) * page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);

    PageWindow {
        items: &data[start..end],
        position: clamped,
        page_size,
        start_index: start + 1,
        end_index: end,
        total_items,
        total_pages,
        has_next: clamped < total_pages,
        has_prev: clamped > 1,
    }
}

/// Build the sequence of page numbers to show for navigation
///
/// Shows every page when they fit in `max_buttons`. Otherwise a window of
/// exactly `max_buttons` pages is centered on `position` and shifted to
/// stay in bounds, then page 1 and `total_pages` are attached with a gap
/// sentinel wherever at least one page is elided. A `position` outside
/// `1..=total_pages` is clamped first.
pub fn display_sequence(
    position: usize,
    total_pages: usize,
    max_buttons: usize,
) -> Vec<DisplayEntry> {
    let total_pages = total_pages.max(1);
    let max_buttons = if max_buttons == 0 {
        DEFAULT_MAX_BUTTONS
    } else {
        max_buttons
    };

    if total_pages <= max_buttons {
        return (1..=total_pages).map(DisplayEntry::Page).collect();
    }

    let position = clamp_position(i64::try_from(position).unwrap_or(i64::MAX), total_pages);
    let (start, end) = window_bounds(position, total_pages, max_buttons);
    let mut sequence = Vec::with_capacity(max_buttons + 4);

    if start > 1 {
        sequence.push(DisplayEntry::Page(1));
        if start > 2 {
            sequence.push(DisplayEntry::Gap(GapKind::Leading));
        }
    }

    sequence.extend((start..=end).map(DisplayEntry::Page));

    if end < total_pages {
        if end < total_pages - 1 {
            sequence.push(DisplayEntry::Gap(GapKind::Trailing));
        }
        sequence.push(DisplayEntry::Page(total_pages));
    }

    sequence
}

/// Inclusive bounds of a `width`-page window around `position`
///
/// Requires `total_pages > width` and `position` within `1..=total_pages`.
fn window_bounds(position: usize, total_pages: usize, width: usize) -> (usize, usize) {
    let half = (width / 2) as i64;
    let width = width as i64;
    let total = total_pages as i64;

    let mut start = position as i64 - half;
    let mut end = start + width - 1;

    if start < 1 {
        start = 1;
        end = width;
    }

    if end > total {
        end = total;
        start = total - width + 1;
    }

    (start as usize, end as usize)
}
