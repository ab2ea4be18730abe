//! Tunables for nail layout and greedy chord selection.

use std::f32::consts::TAU;

use crate::error::{DiskError, Result};

/// Smallest nail count that still encloses an area.
pub const MIN_NAILS: usize = 3;

/// Chord endpoints are exported as `u16`, which caps the nail count.
pub const MAX_NAILS: usize = u16::MAX as usize;

/// Neighbouring nails closer than this could round onto the same grid cell.
pub const MIN_NAIL_SPACING: f32 = 2.0;

/// Largest layout radius. Keeps the `(2r + 1)^2` working grid at 16M cells,
/// which still fits in wasm32 linear memory alongside the residual copies.
pub const MAX_RADIUS: u32 = 2047;

#[derive(Debug, Clone, PartialEq)]
pub struct DiskConfig {
    /// Arc distance between neighbouring nails, in grid units.
    pub nail_spacing: f32,
    /// Lower bound on the layout radius, in grid units.
    pub min_radius: u32,
    /// Greedy iteration budget. `None` means `nail_count * 8`.
    pub iterations: Option<usize>,
    /// Residual removed from every pixel a greedy chord crosses.
    pub ink: i32,
    /// Greedy selection stops once the heaviest chord averages less residual per pixel than this.
    pub min_darkness: i32,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            nail_spacing: 4.0,
            min_radius: 16,
            iterations: None,
            ink: 64,
            min_darkness: 128,
        }
    }
}

impl DiskConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.nail_spacing.is_finite() || self.nail_spacing < MIN_NAIL_SPACING {
            return Err(DiskError::config(format!(
                "nail_spacing must be at least {MIN_NAIL_SPACING}, got {}",
                self.nail_spacing
            )));
        }
        if self.min_radius == 0 {
            return Err(DiskError::config("min_radius must be positive"));
        }
        validate_radius(self.min_radius)?;
        if self.ink <= 0 {
            return Err(DiskError::config(format!(
                "ink must be positive, got {}",
                self.ink
            )));
        }
        Ok(())
    }

    /// Layout radius for `nail_count` nails spaced `nail_spacing` apart.
    pub fn radius_for(&self, nail_count: usize) -> u32 {
        let circumference = nail_count as f32 * self.nail_spacing;
        let radius = (circumference / TAU).round() as u32;
        radius.max(self.min_radius)
    }

    pub fn iteration_budget(&self, nail_count: usize) -> usize {
        self.iterations.unwrap_or(nail_count * 8)
    }
}

pub fn validate_nail_count(nail_count: usize) -> Result<()> {
    if nail_count < MIN_NAILS {
        return Err(DiskError::config(format!(
            "nail_count must be at least {MIN_NAILS}, got {nail_count}"
        )));
    }
    if nail_count > MAX_NAILS {
        return Err(DiskError::config(format!(
            "nail_count must be at most {MAX_NAILS}, got {nail_count}"
        )));
    }
    Ok(())
}

pub fn validate_radius(radius: u32) -> Result<()> {
    if radius > MAX_RADIUS {
        return Err(DiskError::config(format!(
            "radius must be at most {MAX_RADIUS}, got {radius}; use fewer nails or a tighter nail_spacing"
        )));
    }
    Ok(())
}

pub fn validate_pixel_size(pixel_size: f32) -> Result<()> {
    if !pixel_size.is_finite() || pixel_size <= 0.0 {
        return Err(DiskError::config(format!(
            "pixel_size must be positive, got {pixel_size}"
        )));
    }
    Ok(())
}
