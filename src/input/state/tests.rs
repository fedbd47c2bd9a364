use super::*;
use crate::draw::color::{BLACK, RED, WHITE};
use crate::draw::{Drawable, StickerStyle};
use crate::input::{Action, MouseButton, Tool};
use std::cell::RefCell;
use std::rc::Rc;

fn create_test_sketch_state() -> SketchState {
    SketchState::with_defaults(
        BLACK,
        2.0, // thin_thickness
        5.0, // thick_thickness
        vec!["🐱".to_string(), "🌮".to_string()],
        StickerStyle::default(),
        WHITE,
        256,
        256,
    )
}

fn draw_stroke(state: &mut SketchState, points: &[(i32, i32)]) {
    let (x0, y0) = points[0];
    state.on_mouse_press(MouseButton::Left, x0, y0);
    for &(x, y) in &points[1..] {
        state.on_mouse_motion(x, y);
    }
    let (xn, yn) = points[points.len() - 1];
    state.on_mouse_release(MouseButton::Left, xn, yn);
}

#[test]
fn drag_commits_single_stroke_with_all_points() {
    let mut state = create_test_sketch_state();

    draw_stroke(&mut state, &[(10, 10), (20, 20), (30, 10)]);

    assert_eq!(
        state.drawables(),
        &[Drawable::Stroke {
            points: vec![(10, 10), (20, 20), (30, 10)],
            color: BLACK,
            thick: 2.0,
        }]
    );
    assert_eq!(state.drawing_state(), DrawingState::Idle);
}

#[test]
fn undo_then_redo_round_trips_stroke() {
    let mut state = create_test_sketch_state();
    draw_stroke(&mut state, &[(10, 10), (20, 20), (30, 10)]);
    let stroke = state.drawables()[0].clone();

    assert!(state.undo());
    assert!(state.drawables().is_empty());
    assert_eq!(state.history().redo_stack(), &[stroke.clone()]);

    assert!(state.redo());
    assert_eq!(state.drawables(), &[stroke]);
    assert!(state.history().redo_stack().is_empty());
}

#[test]
fn undo_past_empty_is_noop() {
    let mut state = create_test_sketch_state();
    draw_stroke(&mut state, &[(0, 0), (5, 5)]);

    assert!(state.undo());
    for _ in 0..10 {
        assert!(!state.undo());
    }
    assert!(state.drawables().is_empty());
    assert_eq!(state.history().redo_stack().len(), 1);
}

#[test]
fn redo_on_empty_sequence_is_noop() {
    let mut state = create_test_sketch_state();
    draw_stroke(&mut state, &[(0, 0), (5, 5)]);
    state.needs_redraw = false;

    assert!(!state.redo());
    assert_eq!(state.drawables().len(), 1);
    assert!(!state.needs_redraw);
}

#[test]
fn new_stroke_after_undo_discards_redo() {
    let mut state = create_test_sketch_state();
    draw_stroke(&mut state, &[(0, 0), (5, 5)]);
    draw_stroke(&mut state, &[(10, 10), (15, 15)]);
    state.undo();
    state.undo();

    draw_stroke(&mut state, &[(50, 50), (60, 60)]);

    assert!(!state.redo());
    assert_eq!(state.drawables().len(), 1);
}

#[test]
fn sticker_placement_after_undo_discards_redo() {
    let mut state = create_test_sketch_state();
    draw_stroke(&mut state, &[(0, 0), (5, 5)]);
    state.undo();

    state.select_sticker("🌮");
    state.on_mouse_press(MouseButton::Left, 40, 40);
    state.on_mouse_release(MouseButton::Left, 40, 40);

    assert!(!state.redo());
    assert_eq!(
        state.drawables(),
        &[Drawable::Sticker {
            x: 40,
            y: 40,
            glyph: "🌮".to_string(),
        }]
    );
}

#[test]
fn sticker_click_places_once_and_reverts_to_pen() {
    let mut state = create_test_sketch_state();
    state.select_sticker("🐱");
    assert_eq!(state.tool().sticker_glyph(), Some("🐱"));

    state.on_mouse_press(MouseButton::Left, 50, 50);
    state.on_mouse_release(MouseButton::Left, 50, 50);

    assert_eq!(
        state.drawables(),
        &[Drawable::Sticker {
            x: 50,
            y: 50,
            glyph: "🐱".to_string(),
        }]
    );
    assert_eq!(state.tool(), &Tool::Pen);
    assert_ne!(state.drawing_state(), DrawingState::Drawing);

    // Next press without reselecting draws a stroke instead.
    state.on_mouse_press(MouseButton::Left, 60, 60);
    assert!(state.is_drawing());
    assert!(matches!(
        state.drawables().last(),
        Some(Drawable::Stroke { points, .. }) if points == &vec![(60, 60)]
    ));
}

fn preview_surface_context() -> cairo::Context {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 64, 64).unwrap();
    cairo::Context::new(&surface).unwrap()
}

#[test]
fn sticker_press_from_hover_returns_to_idle_without_preview() {
    let mut state = create_test_sketch_state();
    let ctx = preview_surface_context();
    state.select_sticker("🐱");
    state.on_mouse_motion(30, 30);
    assert_eq!(state.drawing_state(), DrawingState::PreviewingTool);
    assert!(state.render_tool_preview(&ctx));

    state.on_mouse_press(MouseButton::Left, 30, 30);
    assert_eq!(state.drawing_state(), DrawingState::Idle);
    assert!(state.is_pointer_down());
    assert!(!state.render_tool_preview(&ctx));

    // Dragging with the button still held shows no preview either.
    state.on_mouse_motion(40, 40);
    assert_eq!(state.drawing_state(), DrawingState::Idle);
    assert!(!state.render_tool_preview(&ctx));

    state.on_mouse_release(MouseButton::Left, 40, 40);
    assert!(!state.is_pointer_down());
    assert!(!state.render_tool_preview(&ctx));

    state.on_mouse_motion(41, 41);
    assert_eq!(state.drawing_state(), DrawingState::PreviewingTool);
    assert!(state.render_tool_preview(&ctx));
}

#[test]
fn sticker_drag_does_not_extend_anything() {
    let mut state = create_test_sketch_state();
    state.select_sticker("🐱");
    state.on_mouse_press(MouseButton::Left, 50, 50);
    state.on_mouse_motion(70, 70);
    state.on_mouse_release(MouseButton::Left, 70, 70);

    assert_eq!(state.drawables().len(), 1);
    assert!(matches!(
        &state.drawables()[0],
        Drawable::Sticker { x: 50, y: 50, .. }
    ));
}

#[test]
fn extend_without_stroke_is_noop() {
    let mut state = create_test_sketch_state();
    assert!(!state.extend_stroke(5, 5));
    assert!(state.drawables().is_empty());

    draw_stroke(&mut state, &[(0, 0), (1, 1)]);
    assert!(!state.extend_stroke(2, 2));
    assert!(matches!(
        &state.drawables()[0],
        Drawable::Stroke { points, .. } if points.len() == 2
    ));
}

#[test]
fn thickness_change_does_not_touch_committed_strokes() {
    let mut state = create_test_sketch_state();
    draw_stroke(&mut state, &[(0, 0), (5, 5)]);

    state.handle_action(Action::Thick);
    assert_eq!(state.current_thickness, 5.0);
    draw_stroke(&mut state, &[(10, 10), (15, 15)]);

    let thicknesses: Vec<f64> = state
        .drawables()
        .iter()
        .map(|drawable| match drawable {
            Drawable::Stroke { thick, .. } => *thick,
            Drawable::Sticker { .. } => panic!("unexpected sticker"),
        })
        .collect();
    assert_eq!(thicknesses, vec![2.0, 5.0]);

    state.handle_action(Action::Thin);
    assert_eq!(state.current_thickness, 2.0);
}

#[test]
fn thickness_presets_leave_sticker_mode() {
    let mut state = create_test_sketch_state();
    state.select_sticker("🐱");
    state.handle_action(Action::Thick);
    assert_eq!(state.tool(), &Tool::Pen);
}

#[test]
fn set_thickness_clamps_to_range() {
    let mut state = create_test_sketch_state();
    state.set_thickness(0.0);
    assert_eq!(state.current_thickness, MIN_THICKNESS);
    state.set_thickness(100.0);
    assert_eq!(state.current_thickness, MAX_THICKNESS);
}

#[test]
fn set_thickness_rejects_nan() {
    let mut state = create_test_sketch_state();
    state.set_thickness(3.0);
    state.set_thickness(f64::NAN);
    state.set_thickness(f64::INFINITY);
    assert_eq!(state.current_thickness, 3.0);

    draw_stroke(&mut state, &[(0, 0), (5, 5)]);
    assert!(matches!(
        &state.drawables()[0],
        Drawable::Stroke { thick, .. } if *thick == 3.0
    ));
}

#[test]
fn color_change_applies_to_new_strokes_only() {
    let mut state = create_test_sketch_state();
    draw_stroke(&mut state, &[(0, 0), (5, 5)]);
    state.set_color(RED);
    draw_stroke(&mut state, &[(10, 10), (15, 15)]);

    let colors: Vec<_> = state
        .drawables()
        .iter()
        .filter_map(|drawable| match drawable {
            Drawable::Stroke { color, .. } => Some(*color),
            Drawable::Sticker { .. } => None,
        })
        .collect();
    assert_eq!(colors, vec![BLACK, RED]);
}

#[test]
fn clear_empties_committed_and_redo() {
    let mut state = create_test_sketch_state();
    draw_stroke(&mut state, &[(0, 0), (5, 5)]);
    draw_stroke(&mut state, &[(10, 10), (15, 15)]);
    state.undo();

    state.handle_action(Action::Clear);

    assert!(state.drawables().is_empty());
    assert!(state.history().redo_stack().is_empty());
    assert!(!state.redo());
}

#[test]
fn undo_during_drag_ends_stroke() {
    let mut state = create_test_sketch_state();
    state.on_mouse_press(MouseButton::Left, 0, 0);
    state.on_mouse_motion(5, 5);

    assert!(state.undo());
    assert!(!state.is_drawing());

    state.on_mouse_motion(10, 10);
    assert!(state.drawables().is_empty());
}

#[test]
fn motion_while_up_enters_preview_and_leave_hides_it() {
    let mut state = create_test_sketch_state();
    assert_eq!(state.drawing_state(), DrawingState::Idle);

    state.on_mouse_motion(100, 120);
    assert_eq!(state.drawing_state(), DrawingState::PreviewingTool);
    assert_eq!(state.cursor(), Some((100, 120)));

    state.on_pointer_leave();
    assert_eq!(state.drawing_state(), DrawingState::Idle);
    assert_eq!(state.cursor(), None);
}

#[test]
fn leave_while_drawing_finishes_stroke() {
    let mut state = create_test_sketch_state();
    state.on_mouse_press(MouseButton::Left, 0, 0);
    state.on_mouse_motion(5, 5);
    state.on_pointer_leave();

    assert!(!state.is_drawing());
    state.on_mouse_motion(10, 10);
    assert!(matches!(
        &state.drawables()[0],
        Drawable::Stroke { points, .. } if points == &vec![(0, 0), (5, 5)]
    ));
}

#[test]
fn non_primary_buttons_are_ignored() {
    let mut state = create_test_sketch_state();
    state.on_mouse_press(MouseButton::Right, 10, 10);
    state.on_mouse_press(MouseButton::Middle, 10, 10);
    assert!(state.drawables().is_empty());
    assert!(!state.is_drawing());
}

#[test]
fn coordinates_outside_surface_are_accepted() {
    let mut state = create_test_sketch_state();
    draw_stroke(&mut state, &[(-20, -20), (400, 300)]);
    assert!(matches!(
        &state.drawables()[0],
        Drawable::Stroke { points, .. } if points == &vec![(-20, -20), (400, 300)]
    ));
}

#[test]
fn custom_sticker_blank_input_is_cancelled() {
    let mut state = create_test_sketch_state();
    assert_eq!(state.add_custom_sticker(""), None);
    assert_eq!(state.add_custom_sticker("   "), None);
    assert_eq!(state.stickers().len(), 2);
}

#[test]
fn custom_sticker_is_appended_once() {
    let mut state = create_test_sketch_state();
    assert_eq!(state.add_custom_sticker(" 🦀 "), Some(2));
    assert_eq!(state.add_custom_sticker("🦀"), Some(2));
    assert_eq!(state.add_custom_sticker("🐱"), Some(0));
    assert_eq!(state.stickers(), &["🐱", "🌮", "🦀"]);
}

#[test]
fn deselect_returns_to_pen() {
    let mut state = create_test_sketch_state();
    state.select_sticker("🐱");
    state.handle_action(Action::Deselect);
    assert_eq!(state.tool(), &Tool::Pen);

    state.on_mouse_press(MouseButton::Left, 1, 1);
    assert!(state.is_drawing());
}

#[test]
fn listeners_receive_content_changes_synchronously() {
    let mut state = create_test_sketch_state();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    state.subscribe(move |change| sink.borrow_mut().push(change));

    draw_stroke(&mut state, &[(0, 0), (5, 5)]);
    assert_eq!(*seen.borrow(), vec![Change::Content, Change::Content]);

    seen.borrow_mut().clear();
    state.undo();
    state.undo(); // no-op, no notification
    state.redo();
    state.on_mouse_motion(3, 3);
    assert_eq!(
        *seen.borrow(),
        vec![Change::Content, Change::Content, Change::ToolMoved]
    );
}

#[test]
fn independent_states_do_not_share_history() {
    let mut first = create_test_sketch_state();
    let second = create_test_sketch_state();

    draw_stroke(&mut first, &[(0, 0), (5, 5)]);

    assert_eq!(first.drawables().len(), 1);
    assert!(second.drawables().is_empty());
}
