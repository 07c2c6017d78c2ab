use super::*;

#[test]
fn follows_pointer_every_tick() {
    let mut c = CursorFollower::new(Point::new(640.0, 360.0));
    assert_eq!(c.pose().position, Point::new(640.0, 360.0));
    c.on_pointer_move(Point::new(10.0, 20.0));
    assert_eq!(c.tick(1.0 / 60.0).position, Point::new(10.0, 20.0));
}

#[test]
fn hover_tweens_to_enlarged_pose_and_back() {
    let mut c = CursorFollower::new(Point::ZERO);
    c.set_hover(true);
    assert!(c.is_hovering());
    assert_eq!(c.pose().dot_color, HOVER_DOT_COLOR);

    let mid = c.tick(0.15);
    assert!(mid.line_scale > 1.0 && mid.line_scale < 1.5);
    assert!(mid.line_opacity < 1.0 && mid.line_opacity > 0.3);

    let done = c.tick(0.2);
    assert_eq!(done.line_scale, 1.5);
    assert_eq!(done.line_opacity, 0.3);
    assert_eq!(done.dot_scale, 3.0);

    c.set_hover(false);
    let back = c.tick(1.0);
    assert_eq!(back.line_scale, 1.0);
    assert_eq!(back.line_opacity, 1.0);
    assert_eq!(back.dot_scale, 1.0);
    assert_eq!(back.dot_color, ACCENT_DOT_COLOR);
}

#[test]
fn repeated_hover_does_not_restart_tween() {
    let mut c = CursorFollower::new(Point::ZERO);
    c.set_hover(true);
    c.tick(0.2);
    let before = c.pose().dot_scale;
    c.set_hover(true);
    assert_eq!(c.pose().dot_scale, before);
}
