use crate::canvas::{Canvas, Sketch};
use crate::error::{DiskError, Result};
use crate::export::Exported;

/// Darkness still owed to each grid cell.
///
/// `baseline` is fixed when the residual is built; `working` is what greedy
/// selection eats into and what `restore` rewinds. Cells outside the mask hold 0.
#[derive(Debug, Clone)]
pub struct Residual {
    baseline: Vec<i32>,
    working: Vec<i32>,
}

impl Residual {
    /// Builds the residual for a `side * side` grayscale buffer, resampled
    /// nearest-neighbour onto the canvas grid.
    pub fn from_pixels(canvas: &Canvas, pixels: &[u8]) -> Result<Self> {
        let source_side = square_side(pixels.len())
            .ok_or(DiskError::InvalidImageDimensions { len: pixels.len() })?;

        let side = canvas.side();
        let baseline: Vec<i32> = (0..canvas.area())
            .map(|index| {
                if !canvas.is_inside(index) {
                    return 0;
                }
                let (x, y) = (index % side, index / side);
                let sx = x * source_side / side;
                let sy = y * source_side / side;
                255 - pixels[sy * source_side + sx] as i32
            })
            .collect();

        Ok(Self {
            working: baseline.clone(),
            baseline,
        })
    }

    /// Full darkness on every painted cell, nothing elsewhere.
    pub fn from_sketch(canvas: &Canvas, sketch: &Sketch) -> Self {
        let baseline: Vec<i32> = (0..canvas.area())
            .map(|index| {
                if canvas.is_inside(index) && sketch.is_painted(index) {
                    255
                } else {
                    0
                }
            })
            .collect();

        Self {
            working: baseline.clone(),
            baseline,
        }
    }

    /// Rewinds to the state the residual was built with, in place.
    pub fn restore(&mut self) {
        self.working.copy_from_slice(&self.baseline);
    }

    pub fn get(&self, index: usize) -> i32 {
        self.working[index]
    }

    /// Removes up to `ink` from a cell. Never goes below zero.
    pub fn deposit(&mut self, index: usize, ink: i32) {
        let cell = &mut self.working[index];
        *cell = (*cell - ink).max(0);
    }

    pub fn values(&self) -> &[i32] {
        &self.working
    }

    pub fn baseline(&self) -> &[i32] {
        &self.baseline
    }

    pub fn total(&self) -> i64 {
        self.working.iter().map(|&v| v as i64).sum()
    }
}

impl Exported for Residual {
    type Element = i32;

    fn elements(&self) -> &[i32] {
        &self.working
    }
}

fn square_side(len: usize) -> Option<usize> {
    let side = len.isqrt();
    (side > 0 && side * side == len).then_some(side)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_square_buffers() {
        let canvas = Canvas::new(2);
        for len in [0, 2, 8, 24] {
            let err = Residual::from_pixels(&canvas, &vec![0; len]).unwrap_err();
            assert_eq!(err, DiskError::InvalidImageDimensions { len });
        }
    }

    #[test]
    fn inverts_inside_the_mask_only() {
        let canvas = Canvas::new(1);
        let pixels = [10u8; 9];
        let residual = Residual::from_pixels(&canvas, &pixels).unwrap();
        assert_eq!(residual.values(), &[0, 245, 0, 245, 245, 245, 0, 245, 0]);
    }

    #[test]
    fn resamples_smaller_sources() {
        let canvas = Canvas::new(1);
        // A single black pixel covers the whole grid.
        let residual = Residual::from_pixels(&canvas, &[0]).unwrap();
        assert_eq!(residual.values()[4], 255);
        assert_eq!(residual.values()[0], 0);
    }

    #[test]
    fn painted_cells_are_fully_dark() {
        let canvas = Canvas::new(1);
        let mut sketch = Sketch::new(canvas.area());
        sketch.paint(4);
        sketch.paint(5);
        let residual = Residual::from_sketch(&canvas, &sketch);
        assert_eq!(residual.values(), &[0, 0, 0, 0, 255, 255, 0, 0, 0]);
    }

    #[test]
    fn deposit_clamps_and_restore_rewinds() {
        let canvas = Canvas::new(1);
        let mut residual = Residual::from_pixels(&canvas, &[200u8; 9]).unwrap();
        residual.deposit(4, 40);
        assert_eq!(residual.get(4), 15);
        residual.deposit(4, 40);
        assert_eq!(residual.get(4), 0);

        residual.restore();
        assert_eq!(residual.values(), residual.baseline());
        assert_eq!(residual.get(4), 55);
    }
}
