use crate::export::Exported;

/// Cells painted by hand, row-major over the whole grid. `1` means painted.
///
/// Only cells inside the mask are ever painted.
#[derive(Debug, Clone)]
pub struct Sketch {
    filled: Vec<u8>,
    painted: usize,
}

impl Sketch {
    pub fn new(area: usize) -> Self {
        Self {
            filled: vec![0; area],
            painted: 0,
        }
    }

    /// Marks a cell. Returns false when it was already painted.
    pub fn paint(&mut self, index: usize) -> bool {
        let cell = &mut self.filled[index];
        if *cell != 0 {
            return false;
        }
        *cell = 1;
        self.painted += 1;
        true
    }

    pub fn is_painted(&self, index: usize) -> bool {
        self.filled[index] != 0
    }

    pub fn painted(&self) -> usize {
        self.painted
    }

    pub fn is_blank(&self) -> bool {
        self.painted == 0
    }

    /// Wipes every cell in place.
    pub fn clear(&mut self) {
        self.filled.fill(0);
        self.painted = 0;
    }
}

impl Exported for Sketch {
    type Element = u8;

    fn elements(&self) -> &[u8] {
        &self.filled
    }
}
