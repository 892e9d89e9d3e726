use ocr_fixtures::prelude::*;
use ocr_fixtures::Error;

use std::fs;

mod common;

#[test]
fn test_canvas_background() {
    let canvas = Canvas::new(16, 8, Rgb::new(1, 2, 3));

    assert_eq!(canvas.dimensions(), (16, 8));
    assert_eq!(canvas.len(), 128);
    assert_eq!(canvas.pixel(0, 0), &Rgb::new(1, 2, 3));
    assert_eq!(canvas.pixel(15, 7), &Rgb::new(1, 2, 3));
    assert!(canvas.get_pixel(16, 0).is_none());
    assert!(canvas.get_pixel(0, 8).is_none());
}

#[test]
fn test_rectangle_fill() {
    let canvas = Canvas::new(10, 10, Rgb::white()).with(
        &Rectangle::new()
            .with_position(2, 2)
            .with_size(3, 3)
            .with_fill(Rgb::black()),
    );

    assert_eq!(canvas.pixel(2, 2), &Rgb::black());
    assert_eq!(canvas.pixel(5, 5), &Rgb::black());
    assert_eq!(canvas.pixel(3, 4), &Rgb::black());
    assert_eq!(canvas.pixel(1, 1), &Rgb::white());
    assert_eq!(canvas.pixel(6, 6), &Rgb::white());
}

#[test]
fn test_rectangle_border_strokes_inside_bounding_box() {
    let canvas = Canvas::new(20, 20, Rgb::white())
        .with(&Rectangle::from_bounding_box(2, 2, 17, 17).with_border(Border::new(Rgb::black(), 2)));

    // Two rings of stroke starting at the bounding box edge.
    assert_eq!(canvas.pixel(2, 2), &Rgb::black());
    assert_eq!(canvas.pixel(3, 3), &Rgb::black());
    assert_eq!(canvas.pixel(17, 17), &Rgb::black());
    assert_eq!(canvas.pixel(16, 16), &Rgb::black());
    assert_eq!(canvas.pixel(2, 10), &Rgb::black());
    assert_eq!(canvas.pixel(10, 17), &Rgb::black());

    // The interior and the outside stay untouched.
    assert_eq!(canvas.pixel(4, 4), &Rgb::white());
    assert_eq!(canvas.pixel(15, 15), &Rgb::white());
    assert_eq!(canvas.pixel(10, 10), &Rgb::white());
    assert_eq!(canvas.pixel(1, 1), &Rgb::white());
    assert_eq!(canvas.pixel(18, 18), &Rgb::white());
}

#[test]
fn test_empty_canvas_does_not_encode() {
    let canvas = Canvas::new(0, 0, Rgb::white());
    let result = canvas.encode(Vec::new());

    assert!(matches!(result, Err(Error::EmptyCanvasError)));
}

#[test]
fn test_save_preserves_pixel_values() {
    let mut canvas = Canvas::new(3, 2, Rgb::white());
    canvas.set_pixel(0, 0, Rgb::new(255, 0, 0));
    canvas.set_pixel(1, 0, Rgb::new(0, 255, 0));
    canvas.set_pixel(2, 1, Rgb::new(0, 0, 255));

    let dir = common::scratch_dir("canvas_save");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("pixels.png");
    canvas.save(&path).unwrap();

    let (width, height, color_type, buf) = common::decode_png(&path);
    assert_eq!((width, height), (3, 2));
    assert_eq!(color_type, png::ColorType::Rgb);
    assert_eq!(buf, canvas.to_bytes());
    assert_eq!(common::px(&buf, width, 0, 0), (255, 0, 0));
    assert_eq!(common::px(&buf, width, 2, 1), (0, 0, 255));
}

#[test]
fn test_pixel_mut_writes_through() {
    let mut canvas = Canvas::new(4, 4, Rgb::white());
    *canvas.pixel_mut(1, 2) = Rgb::black();

    assert_eq!(canvas.pixel(1, 2), &Rgb::black());
    assert_eq!(canvas.pixel(2, 1), &Rgb::white());
}

#[test]
fn test_blend_coverage_extremes() {
    let below = Rgb::new(10, 20, 30);
    let above = Rgb::new(200, 100, 50);

    assert_eq!(below.blend(above, 0), below);
    assert_eq!(below.blend(above, 255), above);

    let mid = below.blend(above, 128);
    assert!(mid.r > below.r && mid.r < above.r);
}
