use doodle_canvas::{Color, DrawingSession, Tool};
use egui::{Pos2, pos2};

fn session(width: u32, height: u32) -> DrawingSession {
    let mut session = DrawingSession::new(width, height, Color::WHITE).unwrap();
    session.set_stroke_width(1);
    session
}

// Runs a full pointer gesture through the given points
fn drag(session: &mut DrawingSession, points: &[Pos2]) {
    let (first, rest) = points.split_first().unwrap();
    session.pointer_down(*first);
    for &p in rest {
        session.pointer_move(p);
    }
    session.pointer_up(*points.last().unwrap());
}

fn count(session: &DrawingSession, color: Color) -> usize {
    session
        .buffer()
        .as_raw()
        .chunks_exact(4)
        .filter(|px| *px == color.to_array())
        .count()
}

#[test]
fn test_can_undo_after_init_action_and_clear() {
    let mut session = session(8, 8);
    assert!(!session.can_undo());

    drag(&mut session, &[pos2(1.0, 1.0), pos2(5.0, 5.0)]);
    assert!(session.can_undo());

    session.clear();
    assert!(!session.can_undo());
    assert_eq!(count(&session, Color::WHITE), 64);
}

#[test]
fn test_undo_restores_previous_action() {
    let mut session = session(8, 8);
    let blank = session.buffer().clone();

    session.set_color(Color::RED);
    drag(&mut session, &[pos2(0.0, 0.0), pos2(7.0, 0.0)]);
    let after_first = session.buffer().clone();

    drag(&mut session, &[pos2(0.0, 7.0), pos2(7.0, 7.0)]);
    assert_ne!(session.buffer(), &after_first);

    assert!(session.undo());
    assert_eq!(session.buffer(), &after_first);
    assert!(session.undo());
    assert_eq!(session.buffer(), &blank);
    assert!(!session.undo());
    assert_eq!(session.buffer(), &blank);
}

#[test]
fn test_rectangle_preview_leaves_no_trail() {
    let mut session = session(10, 10);
    session.set_tool(Tool::Rectangle);
    session.set_color(Color::RED);

    session.pointer_down(pos2(1.0, 1.0));
    session.pointer_move(pos2(8.0, 8.0));
    session.pointer_move(pos2(5.0, 4.0));
    session.pointer_move(pos2(3.0, 3.0));
    assert!(session.is_drawing());
    session.pointer_up(pos2(3.0, 3.0));

    // Only the final 3x3 outline survives
    assert_eq!(count(&session, Color::RED), 8);
    assert_eq!(session.buffer().get(2, 2).unwrap(), Color::WHITE);
    assert_eq!(session.buffer().get(8, 8).unwrap(), Color::WHITE);
    assert!(session.can_undo());
}

#[test]
fn test_line_and_circle_commit() {
    let mut session = session(12, 12);
    session.set_color(Color::RED);

    session.set_tool(Tool::Line);
    drag(&mut session, &[pos2(0.0, 0.0), pos2(6.0, 6.0), pos2(11.0, 0.0)]);
    assert_eq!(session.buffer().get(11, 0).unwrap(), Color::RED);
    assert_eq!(session.buffer().get(3, 3).unwrap(), Color::WHITE);

    session.set_tool(Tool::Circle);
    drag(&mut session, &[pos2(6.0, 6.0), pos2(6.0, 2.0)]);
    assert_eq!(session.buffer().get(6, 10).unwrap(), Color::RED);
    assert_eq!(session.buffer().get(6, 6).unwrap(), Color::WHITE);

    assert_eq!(session.history().len(), 3);
}

#[test]
fn test_fill_tool_commits_immediately() {
    let mut session = session(4, 4);
    session.set_tool(Tool::Fill);
    session.set_color(Color::BLACK);

    session.pointer_down(pos2(0.0, 0.0));
    assert!(!session.is_drawing());
    assert!(session.can_undo());
    assert_eq!(count(&session, Color::BLACK), 16);

    // Filling with the color already there still counts as an action
    let filled = session.buffer().clone();
    let entries = session.history().len();
    session.pointer_down(pos2(2.0, 2.0));
    assert_eq!(session.history().len(), entries + 1);
    assert!(session.undo());
    assert_eq!(session.buffer(), &filled);
    assert!(session.can_undo());
}

#[test]
fn test_unchanged_fill_on_fresh_session_is_undoable() {
    let mut session = session(4, 4);
    session.set_tool(Tool::Fill);
    session.set_color(Color::WHITE);

    session.pointer_down(pos2(1.0, 1.0));
    assert!(session.can_undo());
    assert!(session.undo());
    assert!(!session.can_undo());
    assert_eq!(count(&session, Color::WHITE), 16);
}

#[test]
fn test_empty_gesture_undo_keeps_earlier_action() {
    let mut session = session(8, 8);
    session.pointer_down(pos2(2.0, 2.0));
    session.pointer_up(pos2(2.0, 2.0));
    let after_dot = session.buffer().clone();

    // Line pressed and released without moving paints nothing
    session.set_tool(Tool::Line);
    session.pointer_down(pos2(5.0, 5.0));
    session.pointer_up(pos2(5.0, 5.0));
    assert_eq!(session.buffer(), &after_dot);
    assert_eq!(session.history().len(), 3);

    assert!(session.undo());
    assert_eq!(session.buffer(), &after_dot);
    assert_eq!(session.buffer().get(2, 2).unwrap(), Color::BLACK);
}

#[test]
fn test_shape_release_keeps_last_preview() {
    let mut session = session(10, 10);
    session.set_tool(Tool::Line);
    session.set_color(Color::RED);

    session.pointer_down(pos2(0.0, 0.0));
    session.pointer_move(pos2(9.0, 0.0));
    let preview = session.buffer().clone();
    session.pointer_up(pos2(0.0, 9.0));

    assert_eq!(session.buffer(), &preview);
    assert_eq!(session.buffer().get(0, 9).unwrap(), Color::WHITE);

    session.set_tool(Tool::Circle);
    session.pointer_down(pos2(5.0, 5.0));
    session.pointer_move(pos2(5.0, 7.0));
    let preview = session.buffer().clone();
    session.pointer_leave(pos2(-20.0, 5.0));
    assert_eq!(session.buffer(), &preview);
    assert!(session.undo());
    assert_eq!(count(&session, Color::RED), 10);
}

#[test]
fn test_eraser_over_paint() {
    let mut session = session(6, 6);
    session.set_tool(Tool::Fill);
    session.set_color(Color::RED);
    session.pointer_down(pos2(0.0, 0.0));

    session.set_tool(Tool::Eraser);
    drag(&mut session, &[pos2(0.0, 2.0), pos2(5.0, 2.0)]);
    for x in 0..6 {
        assert_eq!(session.buffer().get(x, 2).unwrap(), Color::TRANSPARENT);
    }
    assert_eq!(count(&session, Color::RED), 30);
}

#[test]
fn test_pointer_leave_ends_gesture() {
    let mut session = session(6, 6);
    session.pointer_down(pos2(1.0, 1.0));
    session.pointer_move(pos2(3.0, 1.0));
    session.pointer_leave(pos2(-4.0, 1.0));

    assert!(!session.is_drawing());
    assert!(session.can_undo());

    // Moves after leaving paint nothing
    let before = session.buffer().clone();
    session.pointer_move(pos2(3.0, 4.0));
    assert_eq!(session.buffer(), &before);
}

#[test]
fn test_undo_depth_capped() {
    let mut session = DrawingSession::with_history_capacity(4, 4, Color::WHITE, 3).unwrap();
    session.set_stroke_width(1);
    session.set_tool(Tool::Fill);

    for shade in 1..=5u8 {
        session.set_color(Color::rgb(shade, shade, shade));
        session.pointer_down(pos2(0.0, 0.0));
    }

    assert!(session.undo());
    assert!(session.undo());
    assert!(!session.undo());
    // The blank canvas and the first fills were evicted
    assert_eq!(session.buffer().get(0, 0).unwrap(), Color::rgb(3, 3, 3));
}

#[test]
fn test_export_image_matches_buffer() {
    let mut session = session(5, 4);
    session.set_color(Color::RED);
    drag(&mut session, &[pos2(0.0, 0.0), pos2(4.0, 3.0)]);

    let image = session.export_image().unwrap();
    assert_eq!(image.dimensions(), (5, 4));
    assert_eq!(image.as_raw().as_slice(), session.buffer().as_raw());

    let png = session.export_png().unwrap();
    assert!(png.starts_with(b"\x89PNG"));
}

#[test]
fn test_far_outside_points_paint_nothing() {
    let far = [
        pos2(1e19, 4.0),
        pos2(-1e19, 1e19),
        pos2(f32::INFINITY, 2.0),
        pos2(2.0, f32::NEG_INFINITY),
        pos2(f32::NAN, 3.0),
        pos2(f32::NAN, f32::NAN),
    ];

    for tool in Tool::ALL {
        let mut session = session(8, 8);
        session.set_stroke_width(3);
        session.set_color(Color::RED);
        session.set_tool(tool);

        for &point in &far {
            session.pointer_down(point);
            session.pointer_move(point);
            session.pointer_move(pos2(f32::NAN, 1.0));
            session.pointer_move(point + egui::vec2(1e6, 0.0));
            session.pointer_up(point);
        }

        assert_eq!(count(&session, Color::WHITE), 64, "{} painted from outside", tool.name());
        assert_eq!(session.buffer().size(), [8, 8]);
    }
}

#[test]
fn test_shapes_toward_far_points_clip_to_canvas() {
    let mut session = session(8, 8);
    session.set_color(Color::RED);

    // A huge circle around an on-canvas centre never crosses the canvas
    session.set_tool(Tool::Circle);
    drag(&mut session, &[pos2(4.0, 4.0), pos2(1e19, 4.0)]);
    drag(&mut session, &[pos2(4.0, 4.0), pos2(f32::INFINITY, 4.0)]);
    assert_eq!(count(&session, Color::RED), 0);

    session.set_tool(Tool::Rectangle);
    drag(&mut session, &[pos2(2.0, 2.0), pos2(1e19, 1e19)]);
    for i in 2..8 {
        assert_eq!(session.buffer().get(i, 2).unwrap(), Color::RED);
        assert_eq!(session.buffer().get(2, i).unwrap(), Color::RED);
    }
    assert_eq!(count(&session, Color::RED), 11);

    session.set_tool(Tool::Brush);
    drag(&mut session, &[pos2(0.0, 0.0), pos2(f32::NAN, 0.0), pos2(-1e19, 0.0)]);
    assert_eq!(session.buffer().get(0, 0).unwrap(), Color::RED);
    assert_eq!(session.buffer().get(1, 0).unwrap(), Color::WHITE);
}

#[test]
fn test_malformed_color_keeps_previous() {
    let mut session = session(4, 4);
    session.set_color(Color::RED);

    for bad in ["#+f+f+f", "+fffff", "#-1-1-1", "  ", "#fff", "#12345g", "ff0000ff00"] {
        assert!(session.set_color_hex(bad).is_err(), "{bad:?} should be rejected");
        assert_eq!(session.color(), Color::RED);
    }

    session.set_color_hex("#00ff00").unwrap();
    assert_eq!(session.color(), Color::rgb(0, 255, 0));
}
