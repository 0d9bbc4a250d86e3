pub mod color;
pub mod grid;
pub mod knots;
pub mod pipeline;
pub mod raster;
pub mod skip;
pub mod threads;
