use vello_cpu::kurbo::Cap;

use crate::{
    foundation::error::MeshResult,
    layout::canvas::CanvasSpec,
    render::{color::resolve_color, raster::Raster},
    threads::model::ThreadGroup,
};

/// Draw every drawable thread, in configuration order, as straight lines between cell
/// centers. Erase regions are never drawn. Returns the number of segments drawn.
pub fn render_threads(
    raster: &mut Raster,
    canvas: &CanvasSpec,
    groups: &[ThreadGroup],
    thread_width: u32,
) -> MeshResult<usize> {
    let width = f64::from(thread_width.max(1));
    let mut segments = 0usize;
    raster.paint_layer(|layer| {
        for group in groups {
            let ThreadGroup::Drawable { color, paths } = group else {
                continue;
            };
            let rgba = resolve_color(color);
            for path in paths {
                layer.line(
                    canvas.cell_center(path.start),
                    canvas.cell_center(path.end),
                    width,
                    Cap::Butt,
                    rgba,
                );
                segments += 1;
            }
        }
    })?;
    Ok(segments)
}

#[cfg(test)]
#[path = "../../tests/unit/render/threads.rs"]
mod tests;
