//! Settings file types

use crate::controls::ControlOptions;
use crate::pagination::PaginationConfig;
use serde::{Deserialize, Serialize};

/// Contents of a settings file
///
/// ```yaml
/// pagination:
///   page_size: 20
///   initial_page: 2
/// controls:
///   max_buttons: 7
///   show_first_last: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pagination: PaginationConfig,
    pub controls: ControlOptions,
}
