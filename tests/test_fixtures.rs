use ocr_fixtures::fixture::{self, Flavor, FontRole, OUTPUT_DIR};

use std::fs;
use std::path::Path;

mod common;

#[test]
fn test_english_fixture_dimensions() {
    let dir = common::scratch_dir("english");
    let path = Flavor::English.generate_in(&dir).unwrap();

    assert_eq!(path, dir.join("ocr_test_english.png"));
    let (width, height, color_type, _) = common::decode_png(&path);
    assert_eq!((width, height), (800, 600));
    assert_eq!(color_type, png::ColorType::Rgb);
}

#[test]
fn test_chinese_fixture_dimensions() {
    let dir = common::scratch_dir("chinese");
    let path = Flavor::Chinese.generate_in(&dir).unwrap();

    assert_eq!(path, dir.join("ocr_test_chinese.png"));
    let (width, height, color_type, _) = common::decode_png(&path);
    assert_eq!((width, height), (800, 600));
    assert_eq!(color_type, png::ColorType::Rgb);
}

#[test]
fn test_mixed_fixture_dimensions() {
    let dir = common::scratch_dir("mixed");
    let path = Flavor::Mixed.generate_in(&dir).unwrap();

    assert_eq!(path, dir.join("ocr_test_mixed.png"));
    let (width, height, color_type, _) = common::decode_png(&path);
    assert_eq!((width, height), (800, 700));
    assert_eq!(color_type, png::ColorType::Rgb);
}

#[test]
fn test_regeneration_is_byte_identical() {
    let dir = common::scratch_dir("idempotent");

    let first_path = Flavor::English.generate_in(&dir).unwrap();
    let first = fs::read(&first_path).unwrap();

    let second_path = Flavor::English.generate_in(&dir).unwrap();
    let second = fs::read(&second_path).unwrap();

    assert_eq!(first_path, second_path);
    assert_eq!(first, second);
}

#[test]
fn test_border_is_drawn_inset() {
    let dir = common::scratch_dir("border");
    let path = Flavor::English.generate_in(&dir).unwrap();
    let (width, _, _, buf) = common::decode_png(&path);

    // Stroke on the inset band, background on the canvas corners.
    assert_eq!(common::px(&buf, width, 10, 10), (0, 0, 0));
    assert_eq!(common::px(&buf, width, 790, 10), (0, 0, 0));
    assert_eq!(common::px(&buf, width, 10, 590), (0, 0, 0));
    assert_eq!(common::px(&buf, width, 790, 590), (0, 0, 0));
    assert_eq!(common::px(&buf, width, 789, 589), (0, 0, 0));
    assert_eq!(common::px(&buf, width, 5, 5), (255, 255, 255));
    assert_eq!(common::px(&buf, width, 795, 595), (255, 255, 255));
    assert_eq!(common::px(&buf, width, 788, 588), (255, 255, 255));
}

/// The one test that exercises the fixed output directory; every other test
/// writes into its own scratch directory.
#[test]
fn test_fixed_output_directory_recreated() {
    let _ = fs::remove_dir_all(OUTPUT_DIR);

    let paths = fixture::generate_all().unwrap();
    let expected: Vec<_> = Flavor::ALL
        .iter()
        .map(|flavor| Path::new(OUTPUT_DIR).join(flavor.file_name()))
        .collect();

    assert_eq!(paths, expected);
    for path in &paths {
        assert!(path.is_file(), "missing fixture {}", path.display());
    }

    // The directory is reused, not recreated, on the next run.
    let again = fixture::generate_all().unwrap();
    assert_eq!(again, expected);
}

#[test]
fn test_layout_line_counts() {
    // Title, five labeled fields, four body lines.
    assert_eq!(Flavor::English.lines().len(), 10);
    assert_eq!(Flavor::Chinese.lines().len(), 10);
    // Title, ten labeled fields, table heading, five table rows.
    assert_eq!(Flavor::Mixed.lines().len(), 17);
}

#[test]
fn test_layout_lines_strictly_descend_the_canvas() {
    for flavor in Flavor::ALL {
        let lines = flavor.lines();
        let (_, height) = flavor.dimensions();

        for pair in lines.windows(2) {
            assert!(
                pair[0].y < pair[1].y,
                "{flavor}: line at y={} does not precede y={}",
                pair[0].y,
                pair[1].y,
            );
        }

        assert!(lines.iter().all(|line| line.y < height));
    }
}

#[test]
fn test_mixed_layout_has_table_below_fields() {
    let lines = Flavor::Mixed.lines();

    let last_medium_y = lines
        .iter()
        .filter(|line| line.role == FontRole::Medium)
        .map(|line| line.y)
        .max()
        .unwrap();
    let table_rows: Vec<_> = lines
        .iter()
        .filter(|line| line.text.contains('|'))
        .collect();

    assert_eq!(table_rows.len(), 5);
    assert!(table_rows.iter().all(|row| row.y > last_medium_y));
    assert!(table_rows.iter().all(|row| row.role == FontRole::Small));
}
