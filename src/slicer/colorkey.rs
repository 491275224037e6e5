//! Color-key transparency filter

use image::{Rgba, RgbaImage};

/// Replace every pixel matching the RGB key with full transparency
///
/// The match compares the red, green, and blue channels exactly; alpha is
/// ignored. Matching pixels become (0,0,0,0), all others are untouched.
pub fn apply_color_key(tile: &mut RgbaImage, key: [u8; 3]) {
    for pixel in tile.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        if [r, g, b] == key {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }
}
