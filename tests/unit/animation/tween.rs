use super::*;

#[test]
fn linear_tween_reaches_target_and_stops() {
    let mut t = Tween::new(0.0, 10.0, 1.0, Ease::Linear);
    assert_eq!(t.value(), 0.0);
    assert_eq!(t.advance(0.25), 2.5);
    assert!(!t.is_finished());
    assert_eq!(t.advance(5.0), 10.0);
    assert!(t.is_finished());
    assert_eq!(t.advance(1.0), 10.0);
}

#[test]
fn zero_duration_is_immediate() {
    let t = Tween::new(1.0, 3.0, 0.0, Ease::OutCubic);
    assert!(t.is_finished());
    assert_eq!(t.value(), 3.0);
    assert_eq!(Tween::settled(4.0).value(), 4.0);
}

#[test]
fn retarget_starts_from_current_value() {
    let mut t = Tween::new(1.0, 2.0, 1.0, Ease::Linear);
    t.advance(0.5);
    t.retarget(1.0, 1.0, Ease::Linear);
    assert_eq!(t.value(), 1.5);
    assert_eq!(t.target(), 1.0);
    assert_eq!(t.advance(1.0), 1.0);
}

#[test]
fn bad_dt_is_ignored() {
    let mut t = Tween::new(0.0, 1.0, 1.0, Ease::Linear);
    t.advance(-1.0);
    t.advance(f64::NAN);
    assert_eq!(t.value(), 0.0);
}
