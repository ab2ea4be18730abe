use crate::export::Chord;

/// Turns a stream of nearest-nail hits into a chord path.
#[derive(Debug, Default, Clone)]
pub struct Freehand {
    current: Option<usize>,
}

impl Freehand {
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Forget the anchor; the next hit starts a new path.
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Moves the pen to `nail`, returning the chord it traced, if any.
    pub fn connect(&mut self, nail: usize) -> Option<Chord> {
        let previous = self.current.replace(nail)?;
        (previous != nail).then(|| Chord::new(previous, nail))
    }
}
