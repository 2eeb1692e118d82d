//! Range module
//!
//! Pure page arithmetic: slicing a collection into a page window, counting
//! pages, and building the ellipsis-compressed sequence of page numbers shown
//! in navigation controls.
//!
//! # Overview
//!
//! Every function here is stateless and safe to call on its own. Inputs are
//! sanitized defensively even when the caller has already validated them,
//! so [`slice`] never produces a window outside `1..=total_pages`.

mod calculator;
mod types;

pub use calculator::{
    clamp_position, display_sequence, sanitize_page_size, slice, total_pages,
    DEFAULT_MAX_BUTTONS, DEFAULT_PAGE_SIZE,
};
pub use types::{DisplayEntry, GapKind, PageWindow};
