use vello_cpu::kurbo::Cap;

use crate::{
    foundation::{
        core::{Point, Rgba8},
        error::MeshResult,
    },
    layout::canvas::CanvasSpec,
    render::raster::Raster,
};

/// Radius of the stitch anchor drawn at every lattice intersection.
pub const ANCHOR_RADIUS: f64 = 1.0;

/// Draw the cell lattice: `width + 1` vertical and `height + 1` horizontal lines on
/// cell boundaries, then an anchor dot on every intersection.
pub fn render_grid(raster: &mut Raster, canvas: &CanvasSpec, line_width: u32) -> MeshResult<()> {
    let grid = canvas.grid;
    let origin = f64::from(canvas.padding);
    let (end_x, end_y) = canvas.lattice_end();
    let (end_x, end_y) = (f64::from(end_x), f64::from(end_y));
    let width = f64::from(line_width.max(1));

    raster.paint_layer(|layer| {
        for i in 0..=i64::from(grid.width) {
            let x = canvas.cell_boundary(i) as f64;
            layer.line(
                Point::new(x, origin),
                Point::new(x, end_y),
                width,
                Cap::Square,
                Rgba8::BLACK,
            );
        }
        for j in 0..=i64::from(grid.height) {
            let y = canvas.cell_boundary(j) as f64;
            layer.line(
                Point::new(origin, y),
                Point::new(end_x, y),
                width,
                Cap::Square,
                Rgba8::BLACK,
            );
        }

        for i in 0..=i64::from(grid.width) {
            for j in 0..=i64::from(grid.height) {
                let p = Point::new(canvas.cell_boundary(i) as f64, canvas.cell_boundary(j) as f64);
                layer.dot(p, ANCHOR_RADIUS, Rgba8::BLACK);
            }
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/grid.rs"]
mod tests;
