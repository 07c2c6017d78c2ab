use std::io::Cursor;

use super::*;

fn png_bytes(width: u32, height: u32, rgba: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(width, height, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_premul() {
    let buf = png_bytes(1, 1, vec![100u8, 50u8, 200u8, 128u8]);

    let prepared = decode_image(&buf).unwrap();
    assert_eq!(prepared.width, 1);
    assert_eq!(prepared.height, 1);
    assert_eq!(
        prepared.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_image_pixel_lookup_is_row_major() {
    let buf = png_bytes(
        2,
        2,
        vec![
            1, 0, 0, 255, 2, 0, 0, 255, //
            3, 0, 0, 255, 4, 0, 0, 255,
        ],
    );
    let prepared = decode_image(&buf).unwrap();
    assert_eq!(prepared.pixel(0, 0)[0], 1);
    assert_eq!(prepared.pixel(1, 0)[0], 2);
    assert_eq!(prepared.pixel(0, 1)[0], 3);
    assert_eq!(prepared.pixel(1, 1)[0], 4);
}

#[test]
fn decode_image_rejects_garbage() {
    assert!(decode_image(b"not a png").is_err());
}
