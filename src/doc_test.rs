#![allow(clippy::float_cmp)]

use super::*;

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::new(Point::new(x1, y1), Point::new(x2, y2))
}

// --- Segment ---

#[test]
fn segment_length() {
    assert_eq!(seg(0.0, 0.0, 3.0, 4.0).length(), 5.0);
}

#[test]
fn segment_midpoint() {
    assert_eq!(seg(0.0, 0.0, 10.0, 4.0).midpoint(), Point::new(5.0, 2.0));
}

#[test]
fn degenerate_segment() {
    assert!(seg(2.0, 3.0, 2.0, 3.0).is_degenerate());
    assert!(!seg(2.0, 3.0, 2.0, 3.1).is_degenerate());
}

#[test]
fn segment_serde_round_trip() {
    let segment = seg(0.0, 0.0, 3.0, 4.0);
    let json = serde_json::to_string(&segment).unwrap();
    assert_eq!(json, r#"{"start":{"x":0.0,"y":0.0},"end":{"x":3.0,"y":4.0}}"#);
    let back: Segment = serde_json::from_str(&json).unwrap();
    assert_eq!(back, segment);
}

// --- format_length ---

#[test]
fn length_labels_use_two_decimals() {
    assert_eq!(format_length(5.0), "5.00cm");
    assert_eq!(format_length(0.0), "0.00cm");
    assert_eq!(format_length(1.239), "1.24cm");
}

// --- Sketch ---

#[test]
fn new_sketch_is_empty() {
    let sketch = Sketch::new();
    assert!(sketch.is_empty());
    assert_eq!(sketch.len(), 0);
    assert!(sketch.last().is_none());
}

#[test]
fn push_preserves_order() {
    let mut sketch = Sketch::new();
    sketch.push(seg(0.0, 0.0, 1.0, 0.0));
    sketch.push(seg(1.0, 0.0, 2.0, 0.0));
    assert_eq!(sketch.len(), 2);
    assert_eq!(sketch.segments()[0].start, Point::new(0.0, 0.0));
    assert_eq!(sketch.segments()[1].end, Point::new(2.0, 0.0));
    assert_eq!(sketch.last(), Some(&seg(1.0, 0.0, 2.0, 0.0)));
}

#[test]
fn replace_last_end_touches_only_the_last_segment() {
    let mut sketch = Sketch::new();
    sketch.push(seg(0.0, 0.0, 1.0, 0.0));
    sketch.push(seg(1.0, 0.0, 2.0, 0.0));
    assert!(sketch.replace_last_end(Point::new(9.0, 9.0)));
    assert_eq!(sketch.segments()[0], seg(0.0, 0.0, 1.0, 0.0));
    assert_eq!(sketch.segments()[1], seg(1.0, 0.0, 9.0, 9.0));
}

#[test]
fn replace_last_end_on_empty_sketch_reports_failure() {
    let mut sketch = Sketch::new();
    assert!(!sketch.replace_last_end(Point::new(1.0, 1.0)));
    assert!(sketch.is_empty());
}

#[test]
fn clear_drops_everything() {
    let mut sketch = Sketch::new();
    sketch.push(seg(0.0, 0.0, 1.0, 0.0));
    sketch.clear();
    assert!(sketch.is_empty());
}
