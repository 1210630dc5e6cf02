mod common;

use common::*;
use paint_select::core::{GesturePhase, Point, ScrollDirection, SelectorConfig, StrokeEnd};
use pretty_assertions::assert_eq;

const VISIBLE: f64 = 100.0;
const ROWS: usize = 100;

/// Finger inside the bottom edge zone (margin is 10).
const BOTTOM_EDGE: Point = Point { x: 5.0, y: 95.0 };
const TOP_EDGE: Point = Point { x: 5.0, y: 5.0 };

/// Fire the active tick, apply the requested scroll and notify the machine,
/// the way a host does.  Returns the new offset.
fn tick_and_deliver(m: &mut Machine, offset: f64) -> f64 {
    let tick = m.autoscroll().active_tick().expect("auto-scroll running");
    m.on_auto_scroll_tick(tick);
    let offset = offset + m.host_mut().drain_scroll();
    m.on_list_scrolled(&geometry(offset, VISIBLE, ROWS));
    offset
}

fn start_at_bottom(offset: f64) -> Machine {
    let geo = geometry(offset, VISIBLE, ROWS);
    let mut m = machine(RecordingHost::with_rows(ROWS));
    m.on_touch_began(Point::new(5.0, 55.0), &geo);
    m.on_touch_moved(BOTTOM_EDGE, &geo);
    m
}

#[test]
fn test_held_touch_requests_one_scroll_per_tick() {
    let mut m = start_at_bottom(0.0);
    assert!(m.is_auto_scrolling());
    let tick = m.autoscroll().active_tick().unwrap();

    for _ in 0..5 {
        m.on_auto_scroll_tick(tick);
    }

    assert_eq!(m.host().scroll_requests, vec![10.0; 5]);
    assert_eq!(m.autoscroll().timer().starts.len(), 1);
}

#[test]
fn test_scroll_notifications_apply_exposed_rows_once() {
    let mut m = start_at_bottom(0.0);
    assert_eq!(m.host().call_rows(), vec![5, 6, 7, 8, 9]);

    let mut offset = 0.0;
    for _ in 0..3 {
        offset = tick_and_deliver(&mut m, offset);
    }

    assert_eq!(offset, 30.0);
    assert_eq!(m.host().call_rows(), (5..=12).collect::<Vec<_>>());
    assert_eq!(m.autoscroll().timer().starts.len(), 1);
}

#[test]
fn test_leaving_edge_zone_stops_timer() {
    let mut m = start_at_bottom(0.0);
    let tick = m.autoscroll().active_tick().unwrap();

    m.on_touch_moved(Point::new(5.0, 50.0), &geometry(0.0, VISIBLE, ROWS));
    assert!(!m.is_auto_scrolling());
    assert_eq!(m.autoscroll().timer().cancels, 1);
    assert_eq!(m.autoscroll().timer().running, None);

    // a tick already queued before the cancel changes nothing
    m.on_auto_scroll_tick(tick);
    assert!(m.host().scroll_requests.is_empty());
    assert_eq!(m.phase(), GesturePhase::Tracking);
}

#[test]
fn test_stops_at_content_bound() {
    let mut m = start_at_bottom(880.0);
    assert_eq!(m.host().call_rows(), vec![93, 94, 95, 96, 97]);

    let mut offset = 880.0;
    offset = tick_and_deliver(&mut m, offset);
    assert!(m.is_auto_scrolling());
    offset = tick_and_deliver(&mut m, offset);

    assert_eq!(offset, 900.0);
    assert!(!m.is_auto_scrolling());
    assert_eq!(m.autoscroll().timer().cancels, 1);
    assert_eq!(m.host().call_rows(), vec![93, 94, 95, 96, 97, 98, 99]);
}

#[test]
fn test_step_is_clamped_near_bound() {
    let mut m = start_at_bottom(895.0);
    let tick = m.autoscroll().active_tick().unwrap();
    m.on_auto_scroll_tick(tick);
    assert_eq!(m.host().scroll_requests, vec![5.0]);
}

#[test]
fn test_clamp_counts_requests_the_host_has_not_applied() {
    let mut m = start_at_bottom(880.0);
    let tick = m.autoscroll().active_tick().unwrap();

    for _ in 0..3 {
        m.on_auto_scroll_tick(tick);
    }
    assert_eq!(m.host().scroll_requests, vec![10.0, 10.0]);
    assert!(!m.is_auto_scrolling());

    let offset = 880.0 + m.host_mut().drain_scroll();
    m.on_list_scrolled(&geometry(offset, VISIBLE, ROWS));
    assert_eq!(m.host().call_rows(), vec![93, 94, 95, 96, 97, 98, 99]);
    assert_eq!(m.autoscroll().timer().starts.len(), 1);
}

#[test]
fn test_partially_applied_requests_still_count() {
    let mut m = start_at_bottom(870.0);
    let tick = m.autoscroll().active_tick().unwrap();

    m.on_auto_scroll_tick(tick);
    m.on_auto_scroll_tick(tick);
    // host has applied only the first step so far
    m.on_list_scrolled(&geometry(880.0, VISIBLE, ROWS));
    m.on_auto_scroll_tick(tick);
    m.on_auto_scroll_tick(tick);

    assert_eq!(m.host().scroll_requests, vec![10.0, 10.0, 10.0]);
}

#[test]
fn test_host_failure_during_auto_scroll_cancels_timer() {
    let config = SelectorConfig {
        skip_unchanged_rows: true,
        ..config()
    };
    let mut host = RecordingHost::with_rows(ROWS);
    host.failing_rows.insert(10);
    let mut m = machine_with(host, config);
    let geo = geometry(0.0, VISIBLE, ROWS);
    m.on_touch_began(Point::new(5.0, 55.0), &geo);
    m.on_touch_moved(BOTTOM_EDGE, &geo);
    let tick = m.autoscroll().active_tick().unwrap();

    // the scroll exposes row 10, whose query fails
    tick_and_deliver(&mut m, 0.0);

    assert_eq!(m.phase(), GesturePhase::Idle);
    assert_eq!(m.last_end(), Some(StrokeEnd::HostFailure));
    assert_eq!(m.autoscroll().timer().cancels, 1);
    assert_eq!(m.autoscroll().timer().running, None);
    assert_eq!(m.host().call_rows(), vec![5, 6, 7, 8, 9]);

    m.on_auto_scroll_tick(tick);
    assert!(m.host().scroll_requests.is_empty());
}

#[test]
fn test_top_edge_scrolls_up() {
    let geo = geometry(200.0, VISIBLE, ROWS);
    let mut m = machine(RecordingHost::with_rows(ROWS));
    m.on_touch_began(Point::new(5.0, 55.0), &geo);
    m.on_touch_moved(TOP_EDGE, &geo);
    assert_eq!(m.autoscroll().direction(), Some(ScrollDirection::Up));

    let offset = tick_and_deliver(&mut m, 200.0);

    assert_eq!(offset, 190.0);
    assert_eq!(m.host().call_rows(), vec![25, 24, 23, 22, 21, 20, 19]);
}

#[test]
fn test_reversing_direction_reuses_timer() {
    let geo = geometry(100.0, VISIBLE, ROWS);
    let mut m = machine(RecordingHost::with_rows(ROWS));
    m.on_touch_began(Point::new(5.0, 55.0), &geo);
    m.on_touch_moved(BOTTOM_EDGE, &geo);
    m.on_touch_moved(TOP_EDGE, &geo);

    assert_eq!(m.autoscroll().direction(), Some(ScrollDirection::Up));
    assert_eq!(m.autoscroll().timer().starts.len(), 1);
    assert_eq!(m.autoscroll().timer().cancels, 0);
}

#[test]
fn test_touch_end_stops_timer_and_drops_late_ticks() {
    let mut m = start_at_bottom(0.0);
    let tick = m.autoscroll().active_tick().unwrap();

    m.on_touch_ended();
    m.on_auto_scroll_tick(tick);

    assert!(!m.is_auto_scrolling());
    assert_eq!(m.autoscroll().timer().running, None);
    assert!(m.host().scroll_requests.is_empty());
}

#[test]
fn test_reload_stops_timer() {
    let mut m = start_at_bottom(0.0);
    let tick = m.autoscroll().active_tick().unwrap();
    let calls = m.host().calls.len();

    m.on_list_reloaded();
    m.on_auto_scroll_tick(tick);
    m.on_list_scrolled(&geometry(10.0, VISIBLE, ROWS));

    assert_eq!(m.last_end(), Some(StrokeEnd::Reloaded));
    assert_eq!(m.autoscroll().timer().cancels, 1);
    assert!(m.host().scroll_requests.is_empty());
    assert_eq!(m.host().calls.len(), calls);
}

#[test]
fn test_new_stroke_gets_fresh_tick_id() {
    let mut m = start_at_bottom(0.0);
    let first = m.autoscroll().active_tick().unwrap();
    m.on_touch_ended();

    let geo = geometry(0.0, VISIBLE, ROWS);
    m.on_touch_began(Point::new(5.0, 55.0), &geo);
    m.on_touch_moved(BOTTOM_EDGE, &geo);
    let second = m.autoscroll().active_tick().unwrap();
    assert_ne!(first, second);

    m.on_auto_scroll_tick(first);
    assert!(m.host().scroll_requests.is_empty());
    m.on_auto_scroll_tick(second);
    assert_eq!(m.host().scroll_requests, vec![10.0]);
}
