use crate::{
    foundation::{
        core::{GridPoint, Rgba8},
        error::MeshResult,
    },
    layout::canvas::CanvasSpec,
    render::raster::Raster,
};

/// Cell indices along one axis that carry a knot, for a lattice spacing of `spacing`
/// cells. Spacing 1 (or less) puts a knot in every cell.
pub fn knot_indices(spacing: u32, cells: u32) -> impl Iterator<Item = u32> {
    let spacing = spacing.max(1);
    let step = spacing.saturating_mul(2).saturating_sub(2).max(1);
    let start = spacing - 1;
    (start..cells).step_by(step as usize)
}

/// Knot radius in pixels for a cell size.
pub fn knot_radius(cell_size: u32) -> f64 {
    (f64::from(cell_size) * 0.48).max(1.0)
}

/// Stamp a filled knot on the center of every lattice cell. Returns how many were drawn.
pub fn render_knots(
    raster: &mut Raster,
    canvas: &CanvasSpec,
    color: Rgba8,
    spacing: u32,
) -> MeshResult<usize> {
    let radius = knot_radius(canvas.cell_size);
    let mut count = 0usize;
    raster.paint_layer(|layer| {
        for i in knot_indices(spacing, canvas.grid.width) {
            for j in knot_indices(spacing, canvas.grid.height) {
                let center = canvas.cell_center(GridPoint::new(i64::from(i), i64::from(j)));
                layer.dot(center, radius, color);
                count += 1;
            }
        }
    })?;
    Ok(count)
}

#[cfg(test)]
#[path = "../../tests/unit/render/knots.rs"]
mod tests;
