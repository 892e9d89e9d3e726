use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Returns a per-test scratch directory path under the system temp
/// directory, removing any leftovers from a prior run. The directory itself
/// is not created; generation is expected to create it.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ocr_fixtures_{name}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

/// Decodes a PNG file and returns its width, height, color type and raw
/// pixel bytes.
pub fn decode_png(path: &Path) -> (u32, u32, png::ColorType, Vec<u8>) {
    let decoder = png::Decoder::new(File::open(path).expect("missing output file"));
    let mut reader = decoder.read_info().expect("invalid png output");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("failed to decode png");
    buf.truncate(info.buffer_size());

    (info.width, info.height, info.color_type, buf)
}

/// Returns the RGB triple at the given coordinates of decoded pixel bytes.
pub fn px(buf: &[u8], width: u32, x: u32, y: u32) -> (u8, u8, u8) {
    let index = ((y * width + x) * 3) as usize;

    (buf[index], buf[index + 1], buf[index + 2])
}
