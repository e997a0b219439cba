use super::*;
use crate::input::{Key, MouseButton, ShapeMode};

fn create_test_input_state() -> InputState {
    InputState::with_shape_mode(ShapeMode::Path)
}

#[test]
fn drag_commits_points_in_arrival_order() {
    let mut state = create_test_input_state();

    state.on_pointer_press(MouseButton::Left, 10, 10);
    state.on_pointer_motion(20, 25);
    state.on_pointer_motion(30, 40);
    state.on_pointer_release(MouseButton::Left);

    assert_eq!(state.frame.len(), 1);
    assert_eq!(
        state.frame.strokes[0].points,
        vec![(10, 10), (20, 25), (30, 40)]
    );
    assert!(!state.is_drawing());
    assert!(state.active_points().is_empty());
}

#[test]
fn each_gesture_commits_exactly_one_stroke() {
    let mut state = create_test_input_state();

    for i in 0..3 {
        state.on_pointer_press(MouseButton::Left, i, i);
        state.on_pointer_motion(i + 1, i + 1);
        state.on_pointer_release(MouseButton::Left);
        assert_eq!(state.frame.len(), (i + 1) as usize);
    }
}

#[test]
fn click_without_motion_commits_a_single_point() {
    let mut state = create_test_input_state();

    state.on_pointer_press(MouseButton::Left, 7, 9);
    state.on_pointer_release(MouseButton::Left);

    assert_eq!(state.frame.len(), 1);
    assert_eq!(state.frame.strokes[0].points, vec![(7, 9)]);
}

#[test]
fn release_without_press_is_a_noop() {
    let mut state = create_test_input_state();
    state.needs_redraw = false;

    state.on_pointer_release(MouseButton::Left);
    state.on_pointer_leave();

    assert!(state.frame.is_empty());
    assert!(!state.is_drawing());
    assert!(!state.needs_redraw);
}

#[test]
fn motion_while_idle_records_nothing() {
    let mut state = create_test_input_state();
    state.needs_redraw = false;

    state.on_pointer_motion(50, 50);

    assert!(state.frame.is_empty());
    assert!(state.active_points().is_empty());
    assert!(!state.needs_redraw);
}

#[test]
fn leave_mid_drag_commits_like_release() {
    let mut released = create_test_input_state();
    released.on_pointer_press(MouseButton::Left, 1, 2);
    released.on_pointer_motion(3, 4);
    released.on_pointer_release(MouseButton::Left);

    let mut left = create_test_input_state();
    left.on_pointer_press(MouseButton::Left, 1, 2);
    left.on_pointer_motion(3, 4);
    left.on_pointer_leave();

    assert_eq!(released.frame.strokes, left.frame.strokes);
    assert!(!left.is_drawing());
}

#[test]
fn repress_restarts_the_active_stroke() {
    let mut state = create_test_input_state();

    state.on_pointer_press(MouseButton::Left, 0, 0);
    state.on_pointer_motion(5, 5);
    state.on_pointer_press(MouseButton::Left, 100, 100);

    // Nothing committed; the active stroke restarts at the new press point.
    assert!(state.frame.is_empty());
    assert_eq!(state.active_points(), &[(100, 100)]);
}

#[test]
fn non_left_buttons_are_ignored() {
    let mut state = create_test_input_state();

    state.on_pointer_press(MouseButton::Right, 10, 10);
    assert!(!state.is_drawing());

    state.on_pointer_press(MouseButton::Left, 10, 10);
    state.on_pointer_release(MouseButton::Middle);
    assert!(state.is_drawing());

    state.on_pointer_release(MouseButton::Left);
    assert_eq!(state.frame.len(), 1);
}

#[test]
fn shape_mode_selection_leaves_strokes_and_redraw_untouched() {
    let mut state = create_test_input_state();

    state.on_pointer_press(MouseButton::Left, 0, 0);
    state.on_pointer_motion(1, 1);
    state.on_pointer_release(MouseButton::Left);
    let strokes_before = state.frame.strokes.clone();
    state.needs_redraw = false;

    state.on_key_press(Key::Char('r'));
    assert_eq!(state.shape_mode, ShapeMode::Rect);

    state.on_key_press(Key::Tab);
    assert_eq!(state.shape_mode, ShapeMode::Path);

    state.on_key_press(Key::Char('P'));
    assert_eq!(state.shape_mode, ShapeMode::Path);

    assert_eq!(state.frame.strokes, strokes_before);
    assert!(!state.needs_redraw);
}

#[test]
fn escape_requests_exit() {
    let mut state = create_test_input_state();
    assert!(!state.should_exit);

    state.on_key_press(Key::Escape);
    assert!(state.should_exit);
}

#[test]
fn unmapped_keys_are_ignored() {
    let mut state = create_test_input_state();
    state.needs_redraw = false;

    state.on_key_press(Key::Char('z'));
    state.on_key_press(Key::Unknown);

    assert_eq!(state.shape_mode, ShapeMode::Path);
    assert!(!state.should_exit);
    assert!(!state.needs_redraw);
}

#[test]
fn resize_retains_committed_strokes() {
    let mut state = create_test_input_state();

    state.on_pointer_press(MouseButton::Left, 5, 5);
    state.on_pointer_motion(6, 6);
    state.on_pointer_release(MouseButton::Left);

    state.update_surface_dimensions(800, 600);

    assert_eq!(state.surface_width, 800);
    assert_eq!(state.surface_height, 600);
    assert_eq!(state.frame.len(), 1);
    assert_eq!(state.frame.strokes[0].points, vec![(5, 5), (6, 6)]);
}

#[test]
fn gesture_survives_a_resize_mid_drag() {
    let mut state = create_test_input_state();

    state.on_pointer_press(MouseButton::Left, 5, 5);
    state.update_surface_dimensions(1024, 768);
    state.on_pointer_motion(6, 6);
    state.on_pointer_release(MouseButton::Left);

    assert_eq!(state.frame.strokes[0].points, vec![(5, 5), (6, 6)]);
}
