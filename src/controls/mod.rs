//! Controls module
//!
//! Headless model of a pagination control strip: which buttons exist, what
//! they are labelled, where they lead, and whether they are current or
//! disabled. Rendering them is left to the caller.
//!
//! # Overview
//!
//! [`build_controls`] turns a [`PageWindow`](crate::range::PageWindow) and a
//! set of [`ControlOptions`] into an ordered list of [`Control`]s:
//! first, previous, numbered pages with gaps, next, last.

mod builder;
mod types;

pub use builder::{build_controls, render_text};
pub use types::{Control, ControlKind, ControlOptions, Labels};
