//! Integration tests through the public API
//!
//! Tests the full flow: collection → paginator → window → controls

use pagekit::controls::{build_controls, ControlKind, ControlOptions};
use pagekit::diagnostics::{Diagnostic, DiagnosticKind, RecordingSink};
use pagekit::loader::{collection_from_str, settings_from_str, SettingsFormat};
use pagekit::range::{display_sequence, slice, total_pages};
use pagekit::{DisplayEntry, GapKind, PaginationConfig, Paginator};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: u32,
    name: String,
}

fn rows(n: u32) -> Vec<Row> {
    (1..=n)
        .map(|id| Row {
            id,
            name: format!("row-{id}"),
        })
        .collect()
}

// ============================================================================
// Uncontrolled Flow
// ============================================================================

#[test]
fn test_uncontrolled_browse_struct_rows() {
    let data = rows(47);
    let sink = Rc::new(RecordingSink::new());
    let mut paginator = Paginator::builder(&data)
        .diagnostics(Rc::clone(&sink))
        .build();

    let window = paginator.read();
    assert_eq!(window.items.first().map(|r| r.id), Some(1));
    assert_eq!(window.items.last().map(|r| r.id), Some(10));

    paginator.go_to_next();
    paginator.go_to_next();
    let window = paginator.read();
    assert_eq!(window.position, 3);
    assert_eq!(window.items[0].name, "row-21");
    assert_eq!((window.start_index, window.end_index), (21, 30));

    paginator.go_to_page(9);
    assert_eq!(paginator.read().position, 3);
    assert_eq!(
        sink.take(),
        vec![Diagnostic::OutOfRange {
            requested: 9,
            total_pages: 5
        }]
    );
}

#[test]
fn test_read_after_navigate_is_synchronous() {
    let data = rows(100);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);

    let mut paginator = Paginator::builder(&data)
        .page_size(20)
        .on_page_change(move |page| log.borrow_mut().push(page))
        .diagnostics(RecordingSink::new())
        .build();

    for page in [4, 2, 5, 1] {
        paginator.go_to_page(page);
        assert_eq!(paginator.read().position, page);
        assert_eq!(seen.borrow().last(), Some(&page));
    }
    assert_eq!(seen.borrow().len(), 4);
}

// ============================================================================
// Controlled Flow
// ============================================================================

#[test]
fn test_controlled_round_trip_with_caller_state() {
    let data = rows(47);
    let requested = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&requested);

    let mut paginator = Paginator::builder(&data)
        .config(PaginationConfig::new().with_current_page(1))
        .on_page_change(move |page| *slot.borrow_mut() = Some(page))
        .diagnostics(RecordingSink::new())
        .build();

    paginator.go_to_last();
    assert_eq!(paginator.read().position, 1);

    // caller honors the request and feeds it back
    let page = requested.borrow_mut().take().unwrap();
    paginator.set_current_page(page as i64);
    assert_eq!(paginator.read().position, 5);
    assert!(!paginator.read().has_next);
}

#[test]
fn test_controlled_misconfiguration_is_reported_once() {
    let data = rows(10);
    let sink = Rc::new(RecordingSink::new());
    let paginator = Paginator::builder(&data)
        .initial_page(1)
        .current_page(1)
        .diagnostics(Rc::clone(&sink))
        .build();

    for _ in 0..3 {
        let _ = paginator.read();
    }

    let kinds: Vec<DiagnosticKind> = sink.take().iter().map(Diagnostic::kind).collect();
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::AmbiguousOwnership,
            DiagnosticKind::AmbiguousOwnership
        ]
    );
}

// ============================================================================
// Calculator Properties
// ============================================================================

#[test]
fn test_slices_partition_collection() {
    let data = rows(53);
    for page_size in 1..=12_i64 {
        let pages = total_pages(data.len(), page_size as usize);
        let rebuilt: Vec<Row> = (1..=pages)
            .flat_map(|p| slice(&data, page_size, p as i64, &RecordingSink::new()).items.to_vec())
            .collect();
        assert_eq!(rebuilt, data);
    }
}

#[test]
fn test_display_sequence_baseline() {
    assert_eq!(
        display_sequence(10, 20, 5),
        vec![
            DisplayEntry::Page(1),
            DisplayEntry::Gap(GapKind::Leading),
            DisplayEntry::Page(8),
            DisplayEntry::Page(9),
            DisplayEntry::Page(10),
            DisplayEntry::Page(11),
            DisplayEntry::Page(12),
            DisplayEntry::Gap(GapKind::Trailing),
            DisplayEntry::Page(20),
        ]
    );
}

#[test]
fn test_page_size_change_keeps_position_valid() {
    let data = rows(61);
    let mut paginator = Paginator::builder(&data)
        .diagnostics(RecordingSink::new())
        .build();
    paginator.go_to_last();

    for page_size in [3, 100, 8, 1, 61, 62] {
        paginator.set_page_size(page_size);
        let window = paginator.read();
        assert!(window.position >= 1);
        assert!(window.position <= 61_usize.div_ceil(page_size as usize));
    }
}

// ============================================================================
// Loader → Paginator → Controls
// ============================================================================

#[test]
fn test_json_collection_to_controls() {
    let sink = RecordingSink::new();
    let json = serde_json::to_string(&(1..=120).collect::<Vec<_>>()).unwrap();
    let data = collection_from_str(&json, &sink).unwrap();

    let settings = settings_from_str(
        "pagination:\n  page_size: 10\n  initial_page: 7\ncontrols:\n  show_first_last: true\n",
        SettingsFormat::Yaml,
    )
    .unwrap();

    let paginator = Paginator::builder(&data)
        .config(settings.pagination)
        .diagnostics(RecordingSink::new())
        .build();
    let controls = build_controls(&paginator.read(), &settings.controls);

    assert_eq!(controls.first().map(|c| c.kind), Some(ControlKind::First));
    assert_eq!(controls.last().map(|c| c.kind), Some(ControlKind::Last));
    let pages: Vec<usize> = controls
        .iter()
        .filter_map(|c| match c.kind {
            ControlKind::Page(p) => Some(p),
            _ => None,
        })
        .collect();
    assert_eq!(pages, vec![1, 5, 6, 7, 8, 9, 12]);
}

#[test]
fn test_malformed_collection_degrades_to_empty() {
    let sink = RecordingSink::new();
    let data = collection_from_str(r#"{"not": "an array"}"#, &sink).unwrap();
    assert_eq!(
        sink.snapshot()[0].kind(),
        DiagnosticKind::MalformedCollection
    );

    let paginator = Paginator::builder(&data)
        .diagnostics(RecordingSink::new())
        .build();
    let window = paginator.read();
    assert_eq!(window.total_pages, 1);
    assert_eq!(window.position, 1);
    assert!(window.items.is_empty());
    assert!(build_controls(&window, &ControlOptions::new()).is_empty());
}
