pub mod canvas;
pub mod extent;
