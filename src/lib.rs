//! meshstitch renders embroidery stitch patterns.
//!
//! A pattern is a grid of square cells with straight threads stretched between cell
//! centers. Configuration files list threads by color; the renderer turns them into a
//! PNG of the mesh with the threads drawn on top.
//!
//! # Pipeline overview
//!
//! 1. **Load**: JSON/YAML file -> generic value tree ([`load_config`])
//! 2. **Normalize**: value tree -> [`ThreadGroup`]s, resolving both thread schemas and the
//!    reserved `skip` color ([`threads_from_document`])
//! 3. **Plan**: threads -> [`GridSpec`] -> [`CanvasSpec`]
//! 4. **Render**: grid, knots, skip erase, threads, debug outline ([`render_mesh`])
//! 5. **Encode**: [`Raster`] -> PNG ([`write_png`])
//!
//! Bad thread data is never an error: missing fields are defaulted and uncoercible
//! coordinates are dropped. Only I/O failures and impossible canvas sizes fail.
#![forbid(unsafe_code)]

mod config;
mod encode;
mod foundation;
mod layout;
mod pattern;
mod render;
mod threads;

pub use config::load::{load_config, parse_json, parse_yaml};
pub use config::params::RenderParams;
pub use encode::png::{encode_png, write_png};
pub use foundation::core::{EMPTY_GRID_CELLS, GridPoint, PADDING, PixelRect, Point, Rgba8};
pub use foundation::error::{MeshError, MeshResult};
pub use layout::canvas::{CanvasSpec, plan_canvas};
pub use layout::extent::{GridSpec, grid_extent};
pub use pattern::generate::{TileLayout, base_unit, generate_tiles, orient, to_yaml};
pub use render::color::resolve_color;
pub use render::knots::{knot_indices, knot_radius};
pub use render::pipeline::{
    MeshImage, RenderStats, render_config_file, render_document, render_mesh,
};
pub use render::raster::{Layer, Raster};
pub use render::skip::{SkipBBox, resolve_skip_bbox};
pub use threads::model::{PathSegment, ThreadGroup, is_skip_color};
pub use threads::normalize::{normalize_threads, threads_from_document};
