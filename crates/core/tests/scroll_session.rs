//! Integration test: build a page from its JSON description, scroll it
//! top to bottom and back, and verify the visibility log lines come out
//! in order, each exactly once.

use colwatch_core::{ColumnTracker, PageModel, RecordingSink};
use colwatch_protocol::{EdgePosition, Signal};

const PAGE_JSON: &str = r#"{
    "viewport_height": 800,
    "nodes": [
        { "top": 0, "height": 3000 },
        { "id": "first",  "top": 200,  "height": 400, "parent": 0, "column": true },
        { "id": "second", "top": 1200, "height": 400, "parent": 0, "column": true },
        { "id": "third",  "top": 2200, "height": 400, "parent": 0, "column": true }
    ]
}"#;

#[test]
fn scrolling_through_the_page_reports_each_column_once() {
    let mut page: PageModel =
        serde_json::from_str(PAGE_JSON).expect("failed to parse page description");
    assert_eq!(page.columns(), vec![1, 2, 3]);

    let mut tracker = ColumnTracker::new(&page, page.columns());
    let mut sink = RecordingSink::new();

    // Scroll to the bottom in 100px increments, then back to the top.
    let mut offsets: Vec<f64> = (0..=24).map(|i| f64::from(i) * 100.0).collect();
    offsets.extend((0..=24).rev().map(|i| f64::from(i) * 100.0));

    for offset in offsets {
        page.set_scroll_top(offset);
        tracker.handle_signal(Signal::Scroll, &page, &mut sink);
    }

    // Every column is 400px tall inside an 800px viewport, so all three
    // positions of all three columns fire — nine events, no repeats.
    assert_eq!(sink.len(), 9, "events: {:?}", sink.events());
    for id in ["first", "second", "third"] {
        for position in EdgePosition::ALL {
            let count = sink
                .events()
                .iter()
                .filter(|e| e.column == id && e.position == position)
                .count();
            assert_eq!(count, 1, "column {id} position {position:?}");
        }
    }

    // Columns appear in document order on the way down, and start leads
    // center leads end for each.
    let first_msgs: Vec<String> = sink
        .messages()
        .into_iter()
        .filter(|m| m.contains("id:first"))
        .collect();
    assert_eq!(
        first_msgs,
        vec![
            "Column with id:first started to become visible on the page.",
            "Column with id:first is now more than 50% visible on the page.",
            "Column with id:first is now fully visible on the page.",
        ]
    );
}

#[test]
fn resize_signal_re_evaluates_with_the_new_viewport() {
    let mut page: PageModel =
        serde_json::from_str(PAGE_JSON).expect("failed to parse page description");
    let mut tracker = ColumnTracker::new(&page, page.columns());
    let mut sink = RecordingSink::new();

    // Shrink the viewport so only the first column's top edge fits.
    page.set_viewport_height(250.0);
    page.set_scroll_top(10.0);
    tracker.handle_signal(Signal::Scroll, &page, &mut sink);
    let before = sink.len();
    assert_eq!(before, 1, "events: {:?}", sink.events());

    // Growing the window brings the rest of the column in without any
    // scrolling at all.
    page.set_viewport_height(800.0);
    tracker.handle_signal(Signal::Resize, &page, &mut sink);
    assert_eq!(sink.len(), 3, "events: {:?}", sink.events());
}

#[test]
fn columns_added_after_construction_are_not_tracked() {
    let mut page: PageModel =
        serde_json::from_str(PAGE_JSON).expect("failed to parse page description");

    // Capture only the first two columns, as if the third appeared in
    // the document after construction.
    let captured: Vec<usize> = page.columns().into_iter().take(2).collect();
    let mut tracker = ColumnTracker::new(&page, captured);
    let mut sink = RecordingSink::new();

    for offset in [0.0, 800.0, 1600.0, 2400.0] {
        page.set_scroll_top(offset);
        tracker.evaluate(&page, &mut sink);
    }

    assert!(sink.events().iter().any(|e| e.column == "first"));
    assert!(sink.events().iter().any(|e| e.column == "second"));
    assert!(!sink.events().iter().any(|e| e.column == "third"));
}
