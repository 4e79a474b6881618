pub mod constellation;
pub mod overlay;
pub mod rocks;
pub mod starfield;
pub mod surface;
