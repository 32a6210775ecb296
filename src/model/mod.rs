pub mod params;
pub mod tables;
