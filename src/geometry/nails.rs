use std::f64::consts::TAU;

use glam::IVec2;

use crate::export::Exported;

/// Nails evenly spaced on a circle, starting at angle 0 and winding with increasing angle.
///
/// Coordinates are integer grid cells on a `(2 * radius + 1)` square grid whose
/// centre is `(radius, radius)`. The layout never changes once built.
#[derive(Debug, Clone)]
pub struct NailLayout {
    radius: u32,
    nails: Vec<IVec2>,
}

impl NailLayout {
    pub fn new(nail_count: usize, radius: u32) -> Self {
        let r = radius as f64;
        let nails = (0..nail_count)
            .map(|i| {
                let angle = TAU * i as f64 / nail_count as f64;
                IVec2::new(
                    (r + r * angle.cos()).round() as i32,
                    (r + r * angle.sin()).round() as i32,
                )
            })
            .collect();

        Self { radius, nails }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn center(&self) -> IVec2 {
        IVec2::splat(self.radius as i32)
    }

    /// Side length of the square grid the nails live on.
    pub fn side(&self) -> usize {
        2 * self.radius as usize + 1
    }

    pub fn len(&self) -> usize {
        self.nails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nails.is_empty()
    }

    pub fn nail(&self, index: usize) -> IVec2 {
        self.nails[index]
    }

    pub fn nails(&self) -> &[IVec2] {
        &self.nails
    }
}

impl Exported for NailLayout {
    type Element = i32;

    fn elements(&self) -> &[i32] {
        bytemuck::cast_slice(&self.nails)
    }
}
