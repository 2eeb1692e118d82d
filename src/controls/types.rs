//! Control strip types

use crate::pagination::Paginator;
use crate::range::{GapKind, DEFAULT_MAX_BUTTONS};
use serde::{Deserialize, Serialize};

/// Button labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Previous-page button
    pub prev: String,
    /// Next-page button
    pub next: String,
    /// First-page button
    pub first: String,
    /// Last-page button
    pub last: String,
    /// Text shown in place of elided pages
    pub ellipsis: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            prev: "Previous".to_string(),
            next: "Next".to_string(),
            first: "First".to_string(),
            last: "Last".to_string(),
            ellipsis: "...".to_string(),
        }
    }
}

/// Which controls to build and how
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlOptions {
    /// Width of the numbered window (0 falls back to the default)
    pub max_buttons: usize,
    /// Include numbered page buttons
    pub show_numbers: bool,
    /// Include previous/next buttons
    pub show_prev_next: bool,
    /// Include first/last buttons
    pub show_first_last: bool,
    /// Disable every button
    pub disabled: bool,
    /// Button texts
    pub labels: Labels,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            max_buttons: DEFAULT_MAX_BUTTONS,
            show_numbers: true,
            show_prev_next: true,
            show_first_last: false,
            disabled: false,
            labels: Labels::default(),
        }
    }
}

impl ControlOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the numbered window width
    pub fn with_max_buttons(mut self, max_buttons: usize) -> Self {
        self.max_buttons = max_buttons;
        self
    }

    /// Toggle first/last buttons
    pub fn with_first_last(mut self, show: bool) -> Self {
        self.show_first_last = show;
        self
    }

    /// Disable every button
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// What a control does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    First,
    Prev,
    Page(usize),
    Gap(GapKind),
    Next,
    Last,
}

/// One entry in a control strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Navigation this control performs
    pub kind: ControlKind,
    /// Visible text
    pub label: String,
    /// Accessible name; gaps have none
    pub aria_label: Option<String>,
    /// Page this control leads to
    pub target: Option<usize>,
    /// Marks the page currently shown
    pub current: bool,
    /// Cannot be activated (always set for gaps)
    pub disabled: bool,
}

impl Control {
    /// Check if activating this control does anything
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !matches!(self.kind, ControlKind::Gap(_))
    }

    /// Run the navigation this control stands for
    ///
    /// Disabled controls and gaps do nothing.
    pub fn activate<T>(&self, paginator: &mut Paginator<'_, T>) {
        if !self.is_interactive() {
            return;
        }

        match self.kind {
            ControlKind::First => paginator.go_to_first(),
            ControlKind::Prev => paginator.go_to_prev(),
            ControlKind::Page(page) => paginator.go_to_page(page),
            ControlKind::Next => paginator.go_to_next(),
            ControlKind::Last => paginator.go_to_last(),
            ControlKind::Gap(_) => {}
        }
    }
}
