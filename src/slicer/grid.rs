//! Tile grid scanning and region iteration
//!
//! Scans a tileset image in row-major order, yielding one region per tile.
//! The scan bounds replicate the classic sheet-cutting arithmetic: an axis is
//! walked from `margin` up to (but excluding) `extent - margin` in steps of
//! `tile + spacing`, so a trailing region may overhang the image edge. The
//! crop stage pads such regions with transparent pixels.

/// Axis-aligned tile region in source image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRegion {
    /// Left edge of the region
    pub x: u32,
    /// Top edge of the region
    pub y: u32,
    /// Region width (the configured tile width)
    pub width: u32,
    /// Region height (the configured tile height)
    pub height: u32,
}

/// Lazy row-major iterator over the tile regions of one tileset
///
/// Forward-only and finite; restart by constructing a new slicer. Reads
/// nothing from the image itself, only its dimensions.
#[derive(Debug, Clone)]
pub struct GridSlicer {
    tile_width: u32,
    tile_height: u32,
    margin: u32,
    spacing: u32,
    /// Exclusive scan bounds: image extent minus the trailing margin
    limit_x: u32,
    limit_y: u32,
    next_x: u32,
    next_y: u32,
}

impl GridSlicer {
    /// Create a slicer for an image of the given dimensions
    pub const fn new(
        image_width: u32,
        image_height: u32,
        tile_width: u32,
        tile_height: u32,
        margin: u32,
        spacing: u32,
    ) -> Self {
        Self {
            tile_width,
            tile_height,
            margin,
            spacing,
            limit_x: image_width.saturating_sub(margin),
            limit_y: image_height.saturating_sub(margin),
            next_x: margin,
            next_y: margin,
        }
    }

    const fn step_x(&self) -> u32 {
        self.tile_width.saturating_add(self.spacing)
    }

    const fn step_y(&self) -> u32 {
        self.tile_height.saturating_add(self.spacing)
    }

    /// Number of tile columns the scan will visit
    pub const fn columns(&self) -> u32 {
        axis_steps(self.margin, self.limit_x, self.step_x())
    }

    /// Number of tile rows the scan will visit
    pub const fn rows(&self) -> u32 {
        axis_steps(self.margin, self.limit_y, self.step_y())
    }

    /// Total number of regions the iterator will yield
    pub const fn tile_count(&self) -> usize {
        self.rows() as usize * self.columns() as usize
    }
}

// Length of the half-open stepped range [start, limit)
const fn axis_steps(start: u32, limit: u32, step: u32) -> u32 {
    if limit <= start {
        return 0;
    }
    (limit - start).div_ceil(step)
}

impl Iterator for GridSlicer {
    type Item = TileRegion;

    fn next(&mut self) -> Option<TileRegion> {
        if self.next_y >= self.limit_y || self.margin >= self.limit_x {
            return None;
        }

        let region = TileRegion {
            x: self.next_x,
            y: self.next_y,
            width: self.tile_width,
            height: self.tile_height,
        };

        self.next_x = self.next_x.saturating_add(self.step_x());
        if self.next_x >= self.limit_x {
            self.next_x = self.margin;
            self.next_y = self.next_y.saturating_add(self.step_y());
        }

        Some(region)
    }
}
