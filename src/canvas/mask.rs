use glam::IVec2;

use crate::export::Exported;

/// The square working grid and the circular mask inscribed in it.
///
/// Cells with `(x - r)^2 + (y - r)^2 <= r^2` are inside. Only inside cells take
/// part in residual bookkeeping.
#[derive(Debug, Clone)]
pub struct Canvas {
    side: usize,
    inside: Vec<bool>,
    cells: Vec<IVec2>,
}

impl Canvas {
    /// Callers keep `radius` within [`MAX_RADIUS`](crate::config::MAX_RADIUS).
    pub fn new(radius: u32) -> Self {
        let r = radius as i64;
        let side = 2 * radius as usize + 1;
        let mut inside = Vec::with_capacity(side * side);
        let mut cells = Vec::new();

        for y in 0..side as i64 {
            for x in 0..side as i64 {
                let (dx, dy) = (x - r, y - r);
                let hit = dx * dx + dy * dy <= r * r;
                inside.push(hit);
                if hit {
                    cells.push(IVec2::new(x as i32, y as i32));
                }
            }
        }

        Self {
            side,
            inside,
            cells,
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Total cells on the square grid, masked or not.
    pub fn area(&self) -> usize {
        self.side * self.side
    }

    /// Row-major index of `point` when it lies inside the mask.
    pub fn index(&self, point: IVec2) -> Option<usize> {
        let side = self.side as i32;
        if point.x < 0 || point.y < 0 || point.x >= side || point.y >= side {
            return None;
        }
        let index = point.y as usize * self.side + point.x as usize;
        self.inside[index].then_some(index)
    }

    pub fn is_inside(&self, index: usize) -> bool {
        self.inside.get(index).copied().unwrap_or(false)
    }

    /// Inside cells in row-major order.
    pub fn cells(&self) -> &[IVec2] {
        &self.cells
    }
}

impl Exported for Canvas {
    type Element = i32;

    fn elements(&self) -> &[i32] {
        bytemuck::cast_slice(&self.cells)
    }
}
