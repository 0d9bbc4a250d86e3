pub mod load;
pub mod params;
