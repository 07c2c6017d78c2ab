use super::*;

#[test]
fn idle_reading() {
    let g = RpmGauge::new();
    let r = g.reading();
    assert_eq!(r.label, "0900 RPM");
    assert_eq!(r.fill_percent, 10.0);
    assert!(!r.redline);
}

#[test]
fn velocity_sets_capped_target() {
    let mut g = RpmGauge::new();
    g.on_scroll_velocity(-10.0);
    assert_eq!(g.target(), 900.0 + 1500.0);
    g.on_scroll_velocity(1e6);
    assert_eq!(g.target(), MAX_RPM);
    g.on_scroll_velocity(f64::NAN);
    assert_eq!(g.target(), IDLE_RPM);
}

#[test]
fn tick_applies_decay_then_follow() {
    let mut g = RpmGauge::new();
    g.on_scroll_velocity(10.0);
    let r = g.tick();
    let target = 2400.0 - (2400.0 - 900.0) * 0.08;
    let current = 900.0 + (target - 900.0) * 0.15;
    assert!((g.target() - target).abs() < 1e-9);
    assert!((r.rpm - current).abs() < 1e-9);
}

#[test]
fn sustained_fast_scroll_hits_redline_then_settles_to_idle() {
    let mut g = RpmGauge::new();
    let mut hit = false;
    for _ in 0..60 {
        g.on_scroll_velocity(100.0);
        hit |= g.tick().redline;
    }
    assert!(hit);

    for _ in 0..600 {
        g.tick();
    }
    assert!((g.current() - IDLE_RPM).abs() < 1.0);
    assert_eq!(g.reading().label, "0900 RPM");
    assert!(!g.reading().redline);
}
