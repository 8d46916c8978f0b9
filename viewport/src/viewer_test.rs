#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::MAX_SCALE;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn zoomed(steps: usize) -> ZoomPanViewer {
    let mut viewer = ZoomPanViewer::new();
    for _ in 0..steps {
        viewer.zoom_in();
    }
    viewer
}

// =============================================================
// Wheel
// =============================================================

#[test]
fn wheel_up_zooms_in_by_ten_percent() {
    let mut viewer = ZoomPanViewer::new();
    viewer.on_wheel(-100.0);
    assert!(approx_eq(viewer.scale(), 1.1));
}

#[test]
fn wheel_down_at_rest_stays_at_minimum() {
    let mut viewer = ZoomPanViewer::new();
    viewer.on_wheel(100.0);
    assert_eq!(viewer.scale(), MIN_SCALE);
}

#[test]
fn wheel_zero_delta_counts_as_zoom_out() {
    let mut viewer = zoomed(4);
    viewer.on_wheel(0.0);
    assert!(approx_eq(viewer.scale(), 2.0 * 0.9));
}

#[test]
fn wheel_never_leaves_scale_range() {
    let mut viewer = ZoomPanViewer::new();
    for _ in 0..200 {
        viewer.on_wheel(-1e9);
        assert!(viewer.scale() >= MIN_SCALE && viewer.scale() <= MAX_SCALE);
    }
    assert_eq!(viewer.scale(), MAX_SCALE);

    for _ in 0..200 {
        viewer.on_wheel(1e9);
        assert!(viewer.scale() >= MIN_SCALE && viewer.scale() <= MAX_SCALE);
    }
    assert_eq!(viewer.scale(), MIN_SCALE);
}

#[test]
fn wheel_handles_non_finite_delta() {
    let mut viewer = zoomed(2);
    viewer.on_wheel(f64::NAN);
    assert!(viewer.scale() >= MIN_SCALE && viewer.scale() <= MAX_SCALE);
    viewer.on_wheel(f64::NEG_INFINITY);
    assert!(viewer.scale() >= MIN_SCALE && viewer.scale() <= MAX_SCALE);
}

#[test]
fn wheel_does_not_touch_offset() {
    let mut viewer = zoomed(4);
    viewer.on_pointer_down(Point::new(0.0, 0.0));
    viewer.on_pointer_move(Point::new(40.0, 25.0));
    viewer.on_pointer_up();
    viewer.on_wheel(-1.0);
    viewer.on_wheel(1.0);
    assert_eq!(viewer.transform().offset(), Point::new(40.0, 25.0));
}

// =============================================================
// Drag
// =============================================================

#[test]
fn pointer_down_while_unzoomed_is_ignored() {
    let mut viewer = ZoomPanViewer::new();
    assert!(!viewer.on_pointer_down(Point::new(10.0, 10.0)));
    assert!(!viewer.is_dragging());
    assert!(!viewer.on_pointer_move(Point::new(50.0, 50.0)));
    assert_eq!(viewer.transform().offset(), Point::new(0.0, 0.0));
}

#[test]
fn pointer_down_records_origin_relative_to_offset() {
    let mut viewer = zoomed(1);
    viewer.on_pointer_down(Point::new(0.0, 0.0));
    viewer.on_pointer_move(Point::new(20.0, 10.0));
    viewer.on_pointer_up();

    assert!(viewer.on_pointer_down(Point::new(100.0, 100.0)));
    assert_eq!(
        viewer.drag_session(),
        Some(DragSession { origin: Point::new(80.0, 90.0) })
    );
}

#[test]
fn drag_tracks_pointer_one_to_one() {
    let mut viewer = zoomed(2);
    viewer.on_pointer_down(Point::new(100.0, 100.0));
    assert!(viewer.on_pointer_move(Point::new(130.0, 90.0)));
    assert_eq!(viewer.transform().offset(), Point::new(30.0, -10.0));
}

#[test]
fn drag_offset_is_path_independent() {
    let mut direct = zoomed(3);
    direct.on_pointer_down(Point::new(5.0, 5.0));
    direct.on_pointer_move(Point::new(65.0, -15.0));

    let mut wandering = zoomed(3);
    wandering.on_pointer_down(Point::new(5.0, 5.0));
    for p in [(300.0, 2.0), (-40.0, 90.0), (12.5, 12.5), (65.0, -15.0)] {
        wandering.on_pointer_move(Point::new(p.0, p.1));
    }

    assert_eq!(direct.transform(), wandering.transform());
    assert_eq!(wandering.transform().offset(), Point::new(60.0, -20.0));
}

#[test]
fn second_drag_continues_from_previous_offset() {
    let mut viewer = zoomed(2);
    viewer.on_pointer_down(Point::new(0.0, 0.0));
    viewer.on_pointer_move(Point::new(10.0, 10.0));
    viewer.on_pointer_up();

    viewer.on_pointer_down(Point::new(50.0, 50.0));
    viewer.on_pointer_move(Point::new(55.0, 45.0));
    assert_eq!(viewer.transform().offset(), Point::new(15.0, 5.0));
}

#[test]
fn pointer_up_ends_session_unconditionally() {
    let mut viewer = zoomed(1);
    viewer.on_pointer_up();
    assert!(!viewer.is_dragging());

    viewer.on_pointer_down(Point::new(1.0, 1.0));
    assert!(viewer.is_dragging());
    viewer.on_pointer_up();
    assert!(!viewer.is_dragging());
    assert!(!viewer.on_pointer_move(Point::new(9.0, 9.0)));
}

#[test]
fn pointer_cancel_ends_drag_and_restores_grab_state() {
    let mut viewer = zoomed(1);
    viewer.on_pointer_down(Point::new(10.0, 10.0));
    viewer.on_pointer_move(Point::new(30.0, 25.0));
    let offset = viewer.transform().offset();

    viewer.on_pointer_cancel();

    assert!(!viewer.is_dragging());
    assert_eq!(viewer.cursor(), Cursor::Grab);
    assert_eq!(viewer.css_transition(), "transform 0.25s ease");
    assert!(!viewer.on_pointer_move(Point::new(90.0, 90.0)));
    assert_eq!(viewer.transform().offset(), offset);
}

// =============================================================
// Buttons
// =============================================================

#[test]
fn zoom_in_steps_by_quarter_and_caps() {
    let mut viewer = ZoomPanViewer::new();
    viewer.zoom_in();
    assert_eq!(viewer.scale(), 1.25);
    for _ in 0..50 {
        viewer.zoom_in();
    }
    assert_eq!(viewer.scale(), MAX_SCALE);
}

#[test]
fn zoom_out_above_threshold_keeps_offset() {
    let mut viewer = zoomed(2);
    viewer.on_pointer_down(Point::new(0.0, 0.0));
    viewer.on_pointer_move(Point::new(20.0, 20.0));
    viewer.on_pointer_up();

    viewer.zoom_out();
    assert_eq!(viewer.scale(), 1.25);
    assert_eq!(viewer.transform().offset(), Point::new(20.0, 20.0));
}

#[test]
fn zoom_out_to_minimum_recenters() {
    let mut viewer = zoomed(2);
    viewer.on_pointer_down(Point::new(0.0, 0.0));
    viewer.on_pointer_move(Point::new(-30.0, 12.0));
    viewer.on_pointer_up();

    viewer.zoom_out();
    viewer.zoom_out();
    assert_eq!(viewer.scale(), MIN_SCALE);
    assert_eq!(viewer.transform().offset(), Point::new(0.0, 0.0));
}

#[test]
fn zoom_out_into_snap_band_recenters_without_reaching_minimum() {
    let mut viewer = ZoomPanViewer::new();
    for _ in 0..3 {
        viewer.on_wheel(-1.0);
    }
    viewer.on_pointer_down(Point::new(0.0, 0.0));
    viewer.on_pointer_move(Point::new(8.0, 8.0));
    viewer.on_pointer_up();

    viewer.zoom_out();
    assert!(viewer.scale() > MIN_SCALE && viewer.scale() <= SNAP_BACK_SCALE);
    assert_eq!(viewer.transform().offset(), Point::new(0.0, 0.0));
}

#[test]
fn zoom_out_at_rest_is_stable() {
    let mut viewer = ZoomPanViewer::new();
    viewer.zoom_out();
    assert_eq!(viewer, ZoomPanViewer::new());
}

#[test]
fn reset_clears_zoom_offset_and_drag() {
    let mut viewer = zoomed(5);
    viewer.on_pointer_down(Point::new(0.0, 0.0));
    viewer.on_pointer_move(Point::new(3.0, 4.0));
    viewer.reset();
    assert_eq!(viewer, ZoomPanViewer::new());
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn cursor_reflects_zoom_and_drag() {
    let mut viewer = ZoomPanViewer::new();
    assert_eq!(viewer.cursor(), Cursor::Default);
    viewer.zoom_in();
    assert_eq!(viewer.cursor(), Cursor::Grab);
    viewer.on_pointer_down(Point::new(0.0, 0.0));
    assert_eq!(viewer.cursor(), Cursor::Grabbing);
    viewer.on_pointer_up();
    assert_eq!(viewer.cursor(), Cursor::Grab);
}

#[test]
fn cursor_css_names() {
    assert_eq!(Cursor::Default.as_css(), "default");
    assert_eq!(Cursor::Grab.as_css(), "grab");
    assert_eq!(Cursor::Grabbing.as_css(), "grabbing");
}

#[test]
fn transition_suspended_while_dragging() {
    let mut viewer = zoomed(1);
    assert_eq!(viewer.css_transition(), "transform 0.25s ease");
    viewer.on_pointer_down(Point::new(0.0, 0.0));
    assert_eq!(viewer.css_transition(), "none");
    viewer.on_pointer_up();
    assert_eq!(viewer.css_transition(), "transform 0.25s ease");
}

#[test]
fn css_transform_follows_state() {
    let mut viewer = zoomed(4);
    viewer.on_pointer_down(Point::new(10.0, 10.0));
    viewer.on_pointer_move(Point::new(15.0, 7.0));
    assert_eq!(viewer.css_transform(), "translate(5px, -3px) scale(2)");
}
