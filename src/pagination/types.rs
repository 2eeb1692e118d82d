//! Pagination configuration and input types

use crate::range::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Serializable paginator settings
///
/// The change callback and diagnostic sink are not part of this struct;
/// supply them through [`PaginatorBuilder`](super::PaginatorBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Items per page. Non-positive values fall back to the default.
    pub page_size: i64,
    /// Starting page for uncontrolled mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_page: Option<i64>,
    /// Caller-owned page. Setting this selects controlled mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<i64>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE as i64,
            initial_page: None,
            current_page: None,
        }
    }
}

impl PaginationConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the starting page
    pub fn with_initial_page(mut self, page: i64) -> Self {
        self.initial_page = Some(page);
        self
    }

    /// Hand ownership of the position to the caller
    pub fn with_current_page(mut self, page: i64) -> Self {
        self.current_page = Some(page);
        self
    }

    /// Check if this config selects controlled mode
    pub fn is_controlled(&self) -> bool {
        self.current_page.is_some()
    }
}

/// Who owns the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Position stored and mutated by the paginator
    Uncontrolled {
        /// Current page, kept within range by every mutation
        position: usize,
    },
    /// Position stored by the caller and mirrored here
    Controlled {
        /// Last value the caller supplied, unvalidated
        position: i64,
    },
}

impl Ownership {
    /// Check if the caller owns the position
    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled { .. })
    }

    /// Raw stored position, before clamping
    pub fn raw_position(&self) -> i64 {
        match self {
            Self::Uncontrolled { position } => *position as i64,
            Self::Controlled { position } => *position,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Uncontrolled { .. } => "uncontrolled",
            Self::Controlled { .. } => "controlled",
        }
    }
}

/// Anything that can be read as a page number
///
/// On failure the input is returned in display form for diagnostics.
pub trait IntoPageNumber {
    /// Normalize to an integer page number
    fn into_page_number(self) -> Result<i64, String>;
}

macro_rules! impl_into_page_number_int {
    ($($ty:ty),*) => {
        $(
            impl IntoPageNumber for $ty {
                fn into_page_number(self) -> Result<i64, String> {
                    i64::try_from(self).map_err(|_| self.to_string())
                }
            }
        )*
    };
}

impl_into_page_number_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoPageNumber for f64 {
    fn into_page_number(self) -> Result<i64, String> {
        if self.is_finite() {
            Ok(self.trunc() as i64)
        } else {
            Err(self.to_string())
        }
    }
}

impl IntoPageNumber for f32 {
    fn into_page_number(self) -> Result<i64, String> {
        f64::from(self).into_page_number()
    }
}

impl IntoPageNumber for &str {
    fn into_page_number(self) -> Result<i64, String> {
        parse_leading_integer(self).ok_or_else(|| self.to_string())
    }
}

impl IntoPageNumber for String {
    fn into_page_number(self) -> Result<i64, String> {
        self.as_str().into_page_number()
    }
}

impl IntoPageNumber for &String {
    fn into_page_number(self) -> Result<i64, String> {
        self.as_str().into_page_number()
    }
}

/// Parse the integer at the start of `input`
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit ("12abc" is 12, "3.7" is 3). Returns `None` without any digits.
/// Values beyond `i64` saturate.
fn parse_leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude = &rest[..digits];
    let value = match magnitude.parse::<i64>() {
        Ok(value) => value,
        Err(_) => i64::MAX,
    };

    Some(if negative { -value } else { value })
}
