use std::collections::TryReserveError;

use bytemuck::Pod;

use super::format::Chord;

/// A buffer the host reads straight out of linear memory.
///
/// `size` counts elements, not bytes. Hosts should read `ptr` and `size`
/// together; both stay valid until the owner is next mutated.
pub trait Exported {
    type Element: Pod;

    fn elements(&self) -> &[Self::Element];

    fn ptr(&self) -> *const Self::Element {
        self.elements().as_ptr()
    }

    fn size(&self) -> usize {
        self.elements().len()
    }
}

/// Ordered chord path. Append-only until cleared.
#[derive(Debug, Default, Clone)]
pub struct ChordBuffer {
    chords: Vec<Chord>,
}

impl ChordBuffer {
    /// Makes room for `total` chords so appends up to that count never move the buffer.
    pub fn reserve_total(&mut self, total: usize) -> Result<(), TryReserveError> {
        if total > self.chords.capacity() {
            self.chords.try_reserve_exact(total - self.chords.len())?;
        }
        Ok(())
    }

    pub fn push(&mut self, chord: Chord) {
        self.chords.push(chord);
    }

    /// Empties the path. Keeps the allocation, so the exported pointer stays put.
    pub fn clear(&mut self) {
        self.chords.clear();
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn as_slice(&self) -> &[Chord] {
        &self.chords
    }

    pub fn capacity(&self) -> usize {
        self.chords.capacity()
    }
}

impl Exported for ChordBuffer {
    type Element = u16;

    fn elements(&self) -> &[u16] {
        bytemuck::cast_slice(&self.chords)
    }
}
