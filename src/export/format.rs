use bytemuck::{Pod, Zeroable};

/// Exported numbers per chord: `[start, end]`.
pub const CHORD_ELEMENTS: usize = 2;

/// Exported numbers per nail or canvas cell: `[x, y]`.
pub const POINT_ELEMENTS: usize = 2;

/// A string stretched from nail `start` to nail `end`.
///
/// `repr(C)` so a slice of chords reads as `[start0, end0, start1, end1, ...]`
/// in linear memory.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Chord {
    pub start: u16,
    pub end: u16,
}

impl Chord {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start != end, "chord endpoints must differ: {start}");
        debug_assert!(end <= u16::MAX as usize && start <= u16::MAX as usize);
        Self {
            start: start as u16,
            end: end as u16,
        }
    }
}
