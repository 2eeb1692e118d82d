//! Page window and display sequence types

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// The slice of a collection visible at one position
///
/// A derived view: rebuilt on every read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageWindow<'a, T> {
    /// Items on this page
    pub items: &'a [T],
    /// Current page (1-based, always within `1..=total_pages`)
    pub position: usize,
    /// Items per page after sanitizing
    pub page_size: usize,
    /// 1-based index of the first item on the page
    pub start_index: usize,
    /// 1-based index of the last item on the page (0 for an empty collection)
    pub end_index: usize,
    /// Length of the whole collection
    pub total_items: usize,
    /// Number of pages, never less than 1
    pub total_pages: usize,
    /// A page exists after this one
    pub has_next: bool,
    /// A page exists before this one
    pub has_prev: bool,
}

impl<T> PageWindow<'_, T> {
    /// True when this is the first page
    pub fn is_first(&self) -> bool {
        self.position == 1
    }

    /// True when this is the last page
    pub fn is_last(&self) -> bool {
        self.position == self.total_pages
    }
}

/// Which side of the visible window a gap sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GapKind {
    /// Between page 1 and the window
    Leading,
    /// Between the window and the last page
    Trailing,
}

impl GapKind {
    /// Stable identifier, also used as the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Leading => "gap-leading",
            Self::Trailing => "gap-trailing",
        }
    }
}

/// One slot in a display sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayEntry {
    /// A concrete page number
    Page(usize),
    /// Elided page numbers
    Gap(GapKind),
}

impl DisplayEntry {
    /// Page number, if this entry is one
    pub fn page(&self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(*page),
            Self::Gap(_) => None,
        }
    }

    /// Check if this entry is a gap sentinel
    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Gap(_))
    }
}

/// Pages serialize as bare numbers, gaps as `{"kind": "gap-leading"}`
impl Serialize for DisplayEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(page) => serializer.serialize_u64(*page as u64),
            Self::Gap(kind) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("kind", kind.as_str())?;
                map.end()
            }
        }
    }
}
