//! OCR Test Fixture Generator
//!
//! Renders the three deterministic OCR test images (English, Chinese and
//! mixed-language) as 8-bit RGB PNGs under `test/test_images/`. Content and
//! layout are fixed, so output is identical across runs on the same host;
//! hosts without any of the candidate fonts render with the built-in bitmap
//! font instead of failing.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_fixtures
//! ```
//!
//! Set `RUST_LOG=debug` to see which font candidates were tried.

use ocr_fixtures::fixture::{Flavor, OUTPUT_DIR};

fn main() {
    env_logger::init();

    println!("Generating OCR test images...");

    let mut paths = Vec::new();
    for flavor in Flavor::ALL {
        match flavor.generate() {
            Ok(path) => {
                println!("Created {flavor} test image: {}", path.display());
                paths.push(path);
            }
            Err(err) => {
                eprintln!("Failed to generate the {flavor} test image: {err}");
                eprintln!("Hint: check that the output directory ({OUTPUT_DIR}) is writable.");
                return;
            }
        }
    }

    println!("\nAll test images created:");
    for (index, path) in paths.iter().enumerate() {
        println!("{}. {}", index + 1, path.display());
    }
}
