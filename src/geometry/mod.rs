pub mod nails;
pub mod raster;
pub mod spatial;

pub use nails::NailLayout;
pub use raster::chord_pixels;
pub use spatial::{DiskBounds, nearest_nail};
