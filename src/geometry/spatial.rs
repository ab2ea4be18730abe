use glam::{IVec2, Vec2};

/// Open disk in grid units. Points on the rim are outside.
#[derive(Debug, Clone, Copy)]
pub struct DiskBounds {
    pub center: Vec2,
    pub radius: f32,
}

impl DiskBounds {
    pub fn new(center: IVec2, radius: u32) -> Self {
        Self {
            center: center.as_vec2(),
            radius: radius as f32,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance_squared(point) < self.radius * self.radius
    }
}

/// Index of the nail closest to `point`. Ties go to the lowest index.
pub fn nearest_nail(nails: &[IVec2], point: Vec2) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, nail) in nails.iter().enumerate() {
        let d2 = nail.as_vec2().distance_squared(point);
        match best {
            Some((_, best_d2)) if d2 >= best_d2 => {}
            _ => best = Some((i, d2)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rim_is_outside() {
        let bounds = DiskBounds::new(IVec2::new(10, 10), 10);
        assert!(bounds.contains(Vec2::new(10.0, 10.0)));
        assert!(bounds.contains(Vec2::new(19.9, 10.0)));
        assert!(!bounds.contains(Vec2::new(20.0, 10.0)));
        assert!(!bounds.contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn nearest_prefers_lowest_index_on_ties() {
        let nails = [IVec2::new(0, 0), IVec2::new(2, 0), IVec2::new(4, 0)];
        assert_eq!(nearest_nail(&nails, Vec2::new(1.0, 0.0)), Some(0));
        assert_eq!(nearest_nail(&nails, Vec2::new(3.0, 5.0)), Some(1));
        assert_eq!(nearest_nail(&nails, Vec2::new(3.9, 0.0)), Some(2));
        assert_eq!(nearest_nail(&[], Vec2::ZERO), None);
    }
}
