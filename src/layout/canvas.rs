use crate::{
    foundation::core::{GridPoint, PADDING, Point},
    layout::extent::GridSpec,
};

/// Pixel geometry of a render, derived from a [`GridSpec`].
///
/// `pixel_width`/`pixel_height` cover the lattice (one extra pixel for the closing line);
/// the image adds [`PADDING`] on every side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CanvasSpec {
    pub grid: GridSpec,
    pub cell_size: u32,
    pub padding: u32,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

/// Plan the canvas for a grid. `cell_size` is clamped to at least one pixel.
pub fn plan_canvas(grid: GridSpec, cell_size: u32) -> CanvasSpec {
    let cell_size = cell_size.max(1);
    CanvasSpec {
        grid,
        cell_size,
        padding: PADDING,
        pixel_width: grid.width.saturating_mul(cell_size).saturating_add(1),
        pixel_height: grid.height.saturating_mul(cell_size).saturating_add(1),
    }
}

impl CanvasSpec {
    pub fn image_width(&self) -> u32 {
        self.pixel_width.saturating_add(2 * self.padding)
    }

    pub fn image_height(&self) -> u32 {
        self.pixel_height.saturating_add(2 * self.padding)
    }

    /// Pixel offset of the boundary before cell `i`. Saturates for coordinates far
    /// outside any drawable canvas.
    pub fn cell_boundary(&self, i: i64) -> i64 {
        i.saturating_mul(i64::from(self.cell_size))
            .saturating_add(i64::from(self.padding))
    }

    /// Pixel position of the center of a cell. May be fractional for odd cell sizes.
    pub fn cell_center(&self, p: GridPoint) -> Point {
        let cell = f64::from(self.cell_size);
        let origin = f64::from(self.padding) + cell / 2.0;
        Point::new(origin + p.x as f64 * cell, origin + p.y as f64 * cell)
    }

    /// Last pixel (inclusive) covered by the lattice on each axis.
    pub fn lattice_end(&self) -> (u32, u32) {
        (
            self.padding + self.pixel_width - 1,
            self.padding + self.pixel_height - 1,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/canvas.rs"]
mod tests;
