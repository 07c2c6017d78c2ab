use super::*;

#[test]
fn rel_path_is_zero_padded_to_five_digits() {
    assert_eq!(frame_rel_path("assets", 1, 5, "png"), "assets/00001.png");
    assert_eq!(frame_rel_path("assets", 300, 5, "png"), "assets/00300.png");
    assert_eq!(frame_rel_path("assets", 123456, 5, "png"), "assets/123456.png");
}

#[test]
fn naming_joins_root_and_file_name() {
    let naming = FrameNaming::new("frames", 4, "jpg");
    assert_eq!(naming.file_name(7), "0007.jpg");
    assert_eq!(naming.path_for(7), Path::new("frames").join("0007.jpg"));
    assert_eq!(naming.root(), Path::new("frames"));
}
