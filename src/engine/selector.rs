//! Greedy chord selection.
//!
//! Starting at nail 0, each step rasterizes every chord leaving the current nail,
//! scores it by the residual it crosses and draws the heaviest one, depositing
//! ink along it. A run ends after the iteration budget or once the heaviest
//! chord averages less darkness per pixel than the configured bar.

use crate::canvas::{Canvas, Residual};
use crate::export::{Chord, ChordBuffer};
use crate::geometry::{NailLayout, chord_pixels};

/// Nail every greedy path starts from.
pub const SEED_NAIL: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    Idle,
    Selecting,
    Done,
}

/// Score of one candidate chord from the current nail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub end: usize,
    /// Residual summed over the in-mask pixels the chord crosses.
    pub weight: u64,
    /// Number of in-mask pixels crossed.
    pub pixels: u64,
}

impl Candidate {
    /// Mean residual per crossed pixel, rounded down.
    pub fn darkness(&self) -> u64 {
        if self.pixels == 0 {
            0
        } else {
            self.weight / self.pixels
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub chords: usize,
    /// True when the darkness threshold ended the run before the budget ran out.
    pub stopped_early: bool,
}

#[derive(Debug, Clone)]
pub struct Selector {
    state: SelectorState,
    budget: usize,
    ink: i32,
    min_darkness: i32,
}

impl Selector {
    pub fn new(budget: usize, ink: i32, min_darkness: i32) -> Self {
        Self {
            state: SelectorState::Idle,
            budget,
            ink,
            min_darkness,
        }
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    pub fn set_budget(&mut self, budget: usize) {
        self.budget = budget;
    }

    pub fn set_ink(&mut self, ink: i32) {
        self.ink = ink;
    }

    pub fn set_min_darkness(&mut self, min_darkness: i32) {
        self.min_darkness = min_darkness;
    }

    pub fn reset(&mut self) {
        self.state = SelectorState::Idle;
    }

    /// Appends up to `budget` chords to `chords`, eating into `residual`.
    pub fn run(
        &mut self,
        layout: &NailLayout,
        canvas: &Canvas,
        residual: &mut Residual,
        chords: &mut ChordBuffer,
    ) -> RunSummary {
        self.state = SelectorState::Selecting;

        let mut current = SEED_NAIL;
        let mut previous: Option<usize> = None;
        let mut drawn = 0;
        let mut stopped_early = false;

        while drawn < self.budget {
            let Some(best) = self.pick(layout, canvas, residual, current, previous) else {
                stopped_early = true;
                break;
            };

            for point in chord_pixels(layout.nail(current), layout.nail(best.end)) {
                if let Some(index) = canvas.index(point) {
                    residual.deposit(index, self.ink);
                }
            }

            chords.push(Chord::new(current, best.end));
            previous = Some(current);
            current = best.end;
            drawn += 1;
        }

        self.state = SelectorState::Done;
        log::debug!(
            "greedy run drew {drawn} of {} chords, residual left {}",
            self.budget,
            residual.total()
        );

        RunSummary {
            chords: drawn,
            stopped_early,
        }
    }

    /// Heaviest chord out of `current`, or `None` when that chord is not dark
    /// enough on average to be worth drawing.
    fn pick(
        &self,
        layout: &NailLayout,
        canvas: &Canvas,
        residual: &Residual,
        current: usize,
        previous: Option<usize>,
    ) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;

        for end in 0..layout.len() {
            if end == current || Some(end) == previous {
                continue;
            }
            let candidate = score(layout, canvas, residual, current, end);

            // Strictly greater keeps the lowest index on ties.
            if best.is_none_or(|b| candidate.weight > b.weight) {
                best = Some(candidate);
            }
        }

        let best = best?;
        if best.weight == 0 || best.darkness() < self.min_darkness.max(0) as u64 {
            return None;
        }
        Some(best)
    }
}

/// Rasterizes `start -> end` and sums the residual it crosses.
pub fn score(
    layout: &NailLayout,
    canvas: &Canvas,
    residual: &Residual,
    start: usize,
    end: usize,
) -> Candidate {
    let mut weight = 0u64;
    let mut pixels = 0u64;
    for point in chord_pixels(layout.nail(start), layout.nail(end)) {
        if let Some(index) = canvas.index(point) {
            weight += residual.get(index).max(0) as u64;
            pixels += 1;
        }
    }
    Candidate {
        end,
        weight,
        pixels,
    }
}
