//! The ordered render pipeline.
//!
//! Stages run in a fixed order and each one relies on the previous:
//!
//! 1. **Plan**: grid extent and canvas geometry from the normalized threads.
//! 2. **Grid**: lattice lines and anchor dots on a white canvas.
//! 3. **Knots** (optional): decorative dots on cell centers. Must precede the erase so
//!    knots inside skip regions are removed.
//! 4. **Erase**: the merged skip region is filled with background. Must precede the
//!    threads so only real threads paint over the hole.
//! 5. **Threads**: every drawable segment, in configuration order.
//! 6. **Outline** (debug only): red border around the erased rectangle, on top of
//!    everything else.

use std::path::Path;

use serde_json::Value;

use crate::{
    config::{load::load_config, params::RenderParams},
    foundation::{
        core::{PixelRect, Rgba8},
        error::MeshResult,
    },
    layout::{
        canvas::{CanvasSpec, plan_canvas},
        extent::grid_extent,
    },
    render::{
        color::resolve_color,
        grid::render_grid,
        knots::render_knots,
        raster::Raster,
        skip::{erase_skip_region, outline_skip_region},
        threads::render_threads,
    },
    threads::{model::ThreadGroup, normalize::threads_from_document},
};

/// A finished render.
pub struct MeshImage {
    pub canvas: CanvasSpec,
    pub raster: Raster,
    /// Erased skip rectangle, if any skip region was present.
    pub skip_rect: Option<PixelRect>,
    pub stats: RenderStats,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub knots: usize,
    pub segments: usize,
}

/// Render normalized threads.
#[tracing::instrument(skip(groups), fields(groups = groups.len()))]
pub fn render_mesh(groups: &[ThreadGroup], params: &RenderParams) -> MeshResult<MeshImage> {
    let params = params.sanitized();

    let grid = grid_extent(groups, params.size);
    let canvas = plan_canvas(grid, params.cell_size);
    tracing::debug!(
        grid_w = grid.width,
        grid_h = grid.height,
        image_w = canvas.image_width(),
        image_h = canvas.image_height(),
        "planned canvas"
    );

    let mut raster = Raster::new(canvas.image_width(), canvas.image_height(), Rgba8::WHITE)?;
    let mut stats = RenderStats::default();

    render_grid(&mut raster, &canvas, params.line_width)?;

    if let Some(knot_color) = params.knot_color.as_deref() {
        stats.knots = render_knots(
            &mut raster,
            &canvas,
            resolve_color(knot_color),
            params.knot_spacing(),
        )?;
        tracing::debug!(knots = stats.knots, "stamped knots");
    }

    let skip_rect = erase_skip_region(&mut raster, &canvas, groups);

    stats.segments = render_threads(&mut raster, &canvas, groups, params.thread_width)?;

    if params.debug_skip
        && let Some(rect) = skip_rect
    {
        outline_skip_region(&mut raster, rect);
    }

    Ok(MeshImage {
        canvas,
        raster,
        skip_rect,
        stats,
    })
}

/// Normalize a loaded configuration document and render it.
pub fn render_document(doc: &Value, params: &RenderParams) -> MeshResult<MeshImage> {
    let groups = threads_from_document(doc);
    render_mesh(&groups, params)
}

/// Load a configuration file (if any) and render it. A missing file renders an empty
/// mesh.
pub fn render_config_file(config: Option<&Path>, params: &RenderParams) -> MeshResult<MeshImage> {
    let doc = match config {
        Some(path) => load_config(path)?,
        None => Value::Null,
    };
    render_document(&doc, params)
}
