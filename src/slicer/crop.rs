//! Rectangular crop with transparent padding beyond the source extent

use crate::slicer::grid::TileRegion;
use image::RgbaImage;

/// Materialize a tile region as an independent RGBA image
///
/// The tile is allocated at the region's full size and starts fully
/// transparent, so any part of the region lying outside the source image
/// stays (0,0,0,0). This matches crop-with-padding semantics for the
/// trailing regions the grid scan may emit.
pub fn crop_region(source: &RgbaImage, region: TileRegion) -> RgbaImage {
    let mut tile = RgbaImage::new(region.width, region.height);

    let copy_width = source
        .width()
        .saturating_sub(region.x)
        .min(region.width);
    let copy_height = source
        .height()
        .saturating_sub(region.y)
        .min(region.height);

    for dy in 0..copy_height {
        for dx in 0..copy_width {
            let pixel = *source.get_pixel(region.x + dx, region.y + dy);
            tile.put_pixel(dx, dy, pixel);
        }
    }

    tile
}
