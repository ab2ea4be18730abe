pub mod buffers;
pub mod format;

pub use buffers::{ChordBuffer, Exported};
pub use format::{CHORD_ELEMENTS, Chord, POINT_ELEMENTS};
