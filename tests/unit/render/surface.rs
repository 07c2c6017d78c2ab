use super::*;

#[test]
fn new_surface_is_opaque_black() {
    let s = Surface::new(Viewport::new(3, 2).unwrap());
    assert_eq!(s.data().len(), 3 * 2 * 4);
    assert_eq!(s.pixel(2, 1), Some([0, 0, 0, 255]));
    assert_eq!(s.pixel(3, 0), None);
}

#[test]
fn resize_clears_and_changes_dimensions() {
    let mut s = Surface::new(Viewport::new(2, 2).unwrap());
    s.data_mut()[0] = 200;
    s.resize(Viewport::new(2, 2).unwrap());
    assert_eq!(s.pixel(0, 0), Some([0, 0, 0, 255]));

    s.resize(Viewport::new(5, 1).unwrap());
    assert_eq!((s.width(), s.height()), (5, 1));
    assert_eq!(s.data().len(), 20);
}

#[test]
fn write_png_roundtrips_pixels() {
    let dir = std::env::temp_dir().join(format!("scrollseq_surface_{}", std::process::id()));
    let path = dir.join("nested").join("out.png");
    let mut s = Surface::new(Viewport::new(2, 1).unwrap());
    s.data_mut()[0..4].copy_from_slice(&[10, 20, 30, 255]);
    s.write_png(&path).unwrap();

    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (2, 1));
    assert_eq!(back.get_pixel(0, 0).0, [10, 20, 30, 255]);
    assert_eq!(back.get_pixel(1, 0).0, [0, 0, 0, 255]);
    std::fs::remove_dir_all(&dir).ok();
}
