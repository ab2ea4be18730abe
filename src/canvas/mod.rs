pub mod mask;
pub mod residual;
pub mod sketch;

pub use mask::Canvas;
pub use residual::Residual;
pub use sketch::Sketch;
