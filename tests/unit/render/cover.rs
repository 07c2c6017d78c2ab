use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn wide_image_on_tall_surface_scales_by_height() {
    let fit = CoverFit::compute(100, 200, 400, 100).unwrap();
    assert!(approx(fit.scale, 2.0));
    assert!(approx(fit.draw_width, 800.0));
    assert!(approx(fit.draw_height, 200.0));
    assert!(approx(fit.offset_x, 50.0 - 400.0));
    assert!(approx(fit.offset_y, 0.0));
    assert!(fit.covers(100, 200));
}

#[test]
fn scale_is_max_ratio_and_offsets_are_centred() {
    let sizes = [(1920, 1080), (1080, 1920), (800, 800), (1, 1), (3, 1000)];
    let images = [(1920, 1080), (640, 480), (100, 300), (7, 5), (1, 1)];
    for &(sw, sh) in &sizes {
        for &(iw, ih) in &images {
            let fit = CoverFit::compute(sw, sh, iw, ih).unwrap();
            let expected = (f64::from(sw) / f64::from(iw)).max(f64::from(sh) / f64::from(ih));
            assert!(approx(fit.scale, expected));
            assert!(approx(
                fit.offset_x,
                f64::from(sw) / 2.0 - f64::from(iw) * expected / 2.0
            ));
            assert!(approx(
                fit.offset_y,
                f64::from(sh) / 2.0 - f64::from(ih) * expected / 2.0
            ));
            assert!(fit.covers(sw, sh), "{sw}x{sh} <- {iw}x{ih}");
        }
    }
}

#[test]
fn zero_sized_image_has_no_fit() {
    assert!(CoverFit::compute(10, 10, 0, 5).is_none());
    assert!(CoverFit::compute(10, 10, 5, 0).is_none());
}

#[test]
fn source_pixel_maps_through_the_crop() {
    // 2x1 image on 4x4: scale 4, drawn 8x4 at x = -2.
    let fit = CoverFit::compute(4, 4, 2, 1).unwrap();
    assert_eq!(fit.source_pixel(0, 0, 2, 1), (0, 0));
    assert_eq!(fit.source_pixel(1, 3, 2, 1), (0, 0));
    assert_eq!(fit.source_pixel(2, 0, 2, 1), (1, 0));
    assert_eq!(fit.source_pixel(3, 3, 2, 1), (1, 0));
}
