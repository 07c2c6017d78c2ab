use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(100, 128), ((100u16 * 128 + 127) / 255) as u8);
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
    assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
}

#[test]
fn progress_between_clamps_and_handles_empty_span() {
    assert_eq!(progress_between(50.0, 0.0, 100.0), 0.5);
    assert_eq!(progress_between(-10.0, 0.0, 100.0), 0.0);
    assert_eq!(progress_between(150.0, 0.0, 100.0), 1.0);
    assert_eq!(progress_between(5.0, 5.0, 5.0), 1.0);
    assert_eq!(progress_between(4.0, 5.0, 5.0), 0.0);
}
