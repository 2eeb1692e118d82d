//! Control strip construction

use super::types::{Control, ControlKind, ControlOptions};
use crate::range::{self, DisplayEntry, PageWindow};

/// Build the control strip for `window`
///
/// Returns nothing for an empty collection or a single page.
pub fn build_controls<T>(window: &PageWindow<'_, T>, options: &ControlOptions) -> Vec<Control> {
    if window.total_items == 0 || window.total_pages <= 1 {
        return Vec::new();
    }

    let labels = &options.labels;
    let back_disabled = options.disabled || !window.has_prev;
    let forward_disabled = options.disabled || !window.has_next;
    let mut controls = Vec::new();

    if options.show_first_last {
        controls.push(nav(ControlKind::First, &labels.first, 1, back_disabled));
    }
    if options.show_prev_next {
        controls.push(nav(
            ControlKind::Prev,
            &labels.prev,
            window.position.saturating_sub(1),
            back_disabled,
        ));
    }

    if options.show_numbers {
        let sequence =
            range::display_sequence(window.position, window.total_pages, options.max_buttons);
        for entry in sequence {
            controls.push(match entry {
                DisplayEntry::Page(page) => Control {
                    kind: ControlKind::Page(page),
                    label: page.to_string(),
                    aria_label: Some(format!("Go to page {page}")),
                    target: Some(page),
                    current: page == window.position,
                    disabled: options.disabled,
                },
                DisplayEntry::Gap(kind) => Control {
                    kind: ControlKind::Gap(kind),
                    label: labels.ellipsis.clone(),
                    aria_label: None,
                    target: None,
                    current: false,
                    disabled: true,
                },
            });
        }
    }

    if options.show_prev_next {
        controls.push(nav(
            ControlKind::Next,
            &labels.next,
            window.position + 1,
            forward_disabled,
        ));
    }
    if options.show_first_last {
        controls.push(nav(
            ControlKind::Last,
            &labels.last,
            window.total_pages,
            forward_disabled,
        ));
    }

    controls
}

fn nav(kind: ControlKind, label: &str, target: usize, disabled: bool) -> Control {
    Control {
        kind,
        label: label.to_string(),
        aria_label: Some(label.to_string()),
        target: (!disabled).then_some(target),
        current: false,
        disabled,
    }
}

/// Plain-text rendering: `[n]` marks the current page, `(label)` a disabled
/// button
pub fn render_text(controls: &[Control]) -> String {
    controls
        .iter()
        .map(|control| match control.kind {
            ControlKind::Gap(_) => control.label.clone(),
            _ if control.current => format!("[{}]", control.label),
            _ if control.disabled => format!("({})", control.label),
            _ => control.label.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
