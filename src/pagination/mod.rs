//! Pagination module
//!
//! Owns or mirrors the current page and exposes navigation over it.
//!
//! # Overview
//!
//! A [`Paginator`] runs in one of two ownership modes, fixed when it is
//! built:
//!
//! - **Uncontrolled** - the paginator stores the position and mutates it on
//!   navigation.
//! - **Controlled** - the caller stores the position. Navigation only
//!   proposes a new page through the change callback, and the caller feeds
//!   its updated value back with [`Paginator::set_current_page`].
//!
//! Invalid input never fails. It is corrected or ignored, and a
//! [`Diagnostic`](crate::diagnostics::Diagnostic) is emitted.

mod resolver;
mod types;

pub use resolver::{Paginator, PaginatorBuilder};
pub use types::{IntoPageNumber, Ownership, PaginationConfig};
