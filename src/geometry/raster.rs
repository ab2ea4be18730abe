use glam::IVec2;
use line_drawing::Bresenham;

/// Grid cells a chord from `start` to `end` crosses, both endpoints included.
///
/// The traversal direction matters: `a -> b` and `b -> a` can differ by a pixel on
/// ambiguous steps, so callers rasterize a chord from its start nail.
pub fn chord_pixels(start: IVec2, end: IVec2) -> impl Iterator<Item = IVec2> {
    Bresenham::new((start.x, start.y), (end.x, end.y)).map(|(x, y)| IVec2::new(x, y))
}
