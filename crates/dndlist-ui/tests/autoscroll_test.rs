//! Edge autoscroll driven by the manual clock.

use dndlist_foundation::RowPosition;
use dndlist_testing::{DelegateEvent, ListRobot};

fn twenty_rows() -> Vec<String> {
    (0..20).map(|i| format!("r{i}")).collect()
}

fn robot_with_twenty_rows() -> ListRobot {
    let rows = twenty_rows();
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    ListRobot::new(&[&refs])
}

#[test]
fn stationary_pointer_in_the_bottom_band_keeps_retargeting() {
    let robot = robot_with_twenty_rows();

    // 20 rows x 40px = 800px of content in a 400px viewport.
    robot.long_press(50.0, 20.0);
    robot.move_pointer(50.0, 30.0);
    robot.move_pointer(50.0, 390.0);

    let scroll_before = robot.widget().borrow().scroll_state().value();
    robot.advance(100);
    let scroll_after = robot.widget().borrow().scroll_state().value();
    assert!(scroll_after > scroll_before);

    // The pointer never moved, but the rows under it did.
    robot.advance(2000);
    robot.release(50.0, 390.0);

    let rows = robot.rows();
    assert_eq!(rows[0].last().map(String::as_str), Some("r0"));
    assert_eq!(
        robot.events().last(),
        Some(&DelegateEvent::DidEnd {
            origin: RowPosition::new(0, 0),
            destination: RowPosition::new(0, 19),
            has_proxy: true,
        })
    );
}

#[test]
fn autoscroll_never_passes_the_content_limit() {
    let robot = robot_with_twenty_rows();

    robot.long_press(50.0, 20.0);
    robot.move_pointer(50.0, 30.0);
    robot.move_pointer(50.0, 399.0);
    robot.advance(10_000);

    let scroll = robot.widget().borrow().scroll_state().value();
    assert_eq!(scroll, 400.0);
    // The timer retired itself at the limit.
    assert_eq!(robot.timers_pending(), 0);
    robot.release(50.0, 399.0);
}

#[test]
fn leaving_the_band_stops_scrolling() {
    let robot = robot_with_twenty_rows();

    robot.long_press(50.0, 20.0);
    robot.move_pointer(50.0, 30.0);
    robot.move_pointer(50.0, 390.0);
    robot.advance(50);
    let mid_scroll = robot.widget().borrow().scroll_state().value();
    assert!(mid_scroll > 0.0);

    robot.move_pointer(50.0, 200.0);
    assert_eq!(robot.timers_pending(), 0);
    robot.advance(1000);
    assert_eq!(robot.widget().borrow().scroll_state().value(), mid_scroll);
    robot.release(50.0, 200.0);
}

#[test]
fn release_in_the_band_stops_the_timer_before_committing() {
    let robot = robot_with_twenty_rows();

    robot.long_press(50.0, 20.0);
    robot.move_pointer(50.0, 30.0);
    robot.move_pointer(50.0, 390.0);
    robot.advance(50);
    robot.release(50.0, 390.0);

    assert_eq!(robot.timers_pending(), 0);
    let settled = robot.widget().borrow().scroll_state().value();
    robot.advance(1000);
    assert_eq!(robot.widget().borrow().scroll_state().value(), settled);
}

#[test]
fn external_mutation_during_autoscroll_abandons_the_session() {
    let robot = robot_with_twenty_rows();

    robot.long_press(50.0, 20.0);
    robot.move_pointer(50.0, 30.0);
    robot.move_pointer(50.0, 390.0);

    // The host mutates the source between ticks; the next tick must not
    // retarget against stale counts.
    robot.source().borrow_mut().remove_row(RowPosition::new(0, 19));
    robot.advance(20);

    assert_eq!(robot.timers_pending(), 0);
    assert_eq!(robot.events().len(), 1);
    assert!(!robot.controller().is_dragging());
}

#[test]
fn top_band_scrolls_upward() {
    let robot = robot_with_twenty_rows();
    robot.scroll_widget_by(400.0);

    // Row 15 renders at y = 200 once scrolled to the bottom.
    robot.long_press(50.0, 220.0);
    robot.move_pointer(50.0, 230.0);
    robot.move_pointer(50.0, 10.0);
    robot.advance(100);

    let scroll = robot.widget().borrow().scroll_state().value();
    assert!(scroll < 400.0);
    robot.release(50.0, 10.0);
}
