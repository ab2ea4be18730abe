use glam::{IVec2, Vec2};

use crate::canvas::{Canvas, Residual, Sketch};
use crate::config::{self, DiskConfig};
use crate::engine::freehand::Freehand;
use crate::engine::selector::{RunSummary, Selector, SelectorState};
use crate::error::{DiskError, Result};
use crate::export::{Chord, ChordBuffer, Exported};
use crate::geometry::{DiskBounds, NailLayout, nearest_nail};

/// Which kind of chord path is currently recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Idle,
    Freehand,
    Greedy,
}

/// Nails on a circle plus the chord path strung between them.
///
/// The nail layout is fixed at construction. Chords come either from greedy
/// approximation of a processed image or from freehand pointer input, never both
/// at once. Without an image, greedy selection works from cells painted by hand.
#[derive(Debug, Clone)]
pub struct Disk {
    config: DiskConfig,
    pixel_size: f32,
    layout: NailLayout,
    canvas: Canvas,
    residual: Option<Residual>,
    image_loaded: bool,
    sketch: Sketch,
    chords: ChordBuffer,
    selector: Selector,
    freehand: Freehand,
    session: Session,
}

impl Disk {
    pub fn new(nail_count: usize, pixel_size: f32) -> Result<Self> {
        Self::with_config(nail_count, pixel_size, DiskConfig::default())
    }

    pub fn with_config(nail_count: usize, pixel_size: f32, config: DiskConfig) -> Result<Self> {
        config::validate_nail_count(nail_count)?;
        config::validate_pixel_size(pixel_size)?;
        config.validate()?;

        let radius = config.radius_for(nail_count);
        config::validate_radius(radius)?;
        let layout = NailLayout::new(nail_count, radius);
        let canvas = Canvas::new(radius);
        let budget = config.iteration_budget(nail_count);
        let mut chords = ChordBuffer::default();
        reserve_chords(&mut chords, budget)?;

        log::info!(
            "disk ready: {nail_count} nails, radius {radius}, {} grid cells in mask",
            canvas.cells().len()
        );

        Ok(Self {
            selector: Selector::new(budget, config.ink, config.min_darkness),
            chords,
            freehand: Freehand::default(),
            residual: None,
            image_loaded: false,
            sketch: Sketch::new(canvas.area()),
            session: Session::Idle,
            config,
            pixel_size,
            layout,
            canvas,
        })
    }

    // Geometry

    pub fn radius(&self) -> u32 {
        self.layout.radius()
    }

    pub fn nail_count(&self) -> usize {
        self.layout.len()
    }

    pub fn side(&self) -> usize {
        self.layout.side()
    }

    pub fn center(&self) -> IVec2 {
        self.layout.center()
    }

    pub fn nails(&self) -> &[IVec2] {
        self.layout.nails()
    }

    pub fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    /// Rescales rendering and pointer mapping. Nails stay where they are.
    pub fn set_pixel_size(&mut self, pixel_size: f32) -> Result<()> {
        config::validate_pixel_size(pixel_size)?;
        self.pixel_size = pixel_size;
        Ok(())
    }

    /// Settings in effect, including any changed through the setters.
    pub fn config(&self) -> &DiskConfig {
        &self.config
    }

    // Greedy tuning

    /// Sets the greedy budget. Fails, changing nothing, when the chord buffer
    /// cannot be sized for it.
    pub fn set_iterations(&mut self, iterations: usize) -> Result<()> {
        reserve_chords(&mut self.chords, iterations)?;
        self.config.iterations = Some(iterations);
        self.selector.set_budget(iterations);
        Ok(())
    }

    pub fn set_ink(&mut self, ink: i32) -> Result<()> {
        if ink <= 0 {
            return Err(DiskError::config(format!("ink must be positive, got {ink}")));
        }
        self.config.ink = ink;
        self.selector.set_ink(ink);
        Ok(())
    }

    pub fn set_min_darkness(&mut self, min_darkness: i32) {
        self.config.min_darkness = min_darkness;
        self.selector.set_min_darkness(min_darkness);
    }

    // Image path

    /// Loads a square grayscale image as the target. On error nothing changes.
    pub fn process_pixels(&mut self, pixels: &[u8]) -> Result<()> {
        let residual = Residual::from_pixels(&self.canvas, pixels)?;
        log::info!(
            "processed {} byte image onto {side}x{side} grid",
            pixels.len(),
            side = self.canvas.side()
        );
        self.residual = Some(residual);
        self.image_loaded = true;
        self.selector.reset();
        Ok(())
    }

    pub fn has_image(&self) -> bool {
        self.image_loaded
    }

    // Painted path

    /// Marks the grid cell under a pointer position, in canvas pixels, as fully
    /// dark. Cells outside the mask are ignored. Returns true when a new cell
    /// was painted.
    pub fn paint(&mut self, x: f32, y: f32) -> bool {
        let cell = (Vec2::new(x, y) / self.pixel_size).floor().as_ivec2();
        match self.canvas.index(cell) {
            Some(index) => self.sketch.paint(index),
            None => false,
        }
    }

    pub fn painted_count(&self) -> usize {
        self.sketch.painted()
    }

    /// Recomputes the chord path greedily from the processed image, or from the
    /// painted cells when no image has been processed.
    ///
    /// Always starts from an empty path and a fresh residual, so the same
    /// target and budget give the same chords.
    pub fn calculate_strings(&mut self) -> Result<RunSummary> {
        if !self.image_loaded {
            if self.sketch.is_blank() {
                log::warn!("calculate_strings called with no image processed and nothing painted");
                return Err(DiskError::NoImageLoaded);
            }
            log::info!("building residual from {} painted cells", self.sketch.painted());
            self.residual = Some(Residual::from_sketch(&self.canvas, &self.sketch));
        }
        reserve_chords(&mut self.chords, self.selector.budget())?;

        let Some(residual) = self.residual.as_mut() else {
            return Err(DiskError::NoImageLoaded);
        };
        residual.restore();
        self.chords.clear();
        self.freehand.reset();
        self.session = Session::Greedy;

        let summary = self
            .selector
            .run(&self.layout, &self.canvas, residual, &mut self.chords);
        log::info!(
            "greedy selection finished with {} chords{}",
            summary.chords,
            if summary.stopped_early { " (stopped early)" } else { "" }
        );
        Ok(summary)
    }

    pub fn selector_state(&self) -> SelectorState {
        self.selector.state()
    }

    pub fn is_done(&self) -> bool {
        self.selector.state() == SelectorState::Done
    }

    // Interactive path

    /// Starts an empty freehand session. Painted cells are kept.
    pub fn initialize_drawing_strings(&mut self) {
        self.clear_path();
        self.session = Session::Freehand;
    }

    /// Feeds a pointer position, in canvas pixels, to the freehand path.
    ///
    /// Points on or outside the rim are ignored. The first point inside only
    /// picks the anchor nail; later points add a chord whenever the nearest
    /// nail changes. Returns the chord added, if any.
    pub fn draw(&mut self, x: f32, y: f32) -> Option<Chord> {
        let point = Vec2::new(x, y) / self.pixel_size;
        if !DiskBounds::new(self.center(), self.radius()).contains(point) {
            return None;
        }

        if self.session != Session::Freehand {
            log::debug!("pointer input starts a freehand session");
            self.initialize_drawing_strings();
        }

        let nail = nearest_nail(self.layout.nails(), point)?;
        let chord = self.freehand.connect(nail)?;
        self.chords.push(chord);
        Some(chord)
    }

    // Session control

    /// Empties the chord path, wipes painted cells and rewinds the residual to
    /// the processed image.
    pub fn reset(&mut self) {
        self.clear_path();
        self.sketch.clear();
        if !self.image_loaded {
            self.residual = None;
        }
        self.session = Session::Idle;
    }

    fn clear_path(&mut self) {
        self.chords.clear();
        self.freehand.reset();
        self.selector.reset();
        if let Some(residual) = self.residual.as_mut() {
            residual.restore();
        }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    // Exported state

    pub fn chords(&self) -> &[Chord] {
        self.chords.as_slice()
    }

    pub fn chord_count(&self) -> usize {
        self.chords.len()
    }

    pub fn chord_buffer(&self) -> &[u16] {
        self.chords.elements()
    }

    pub fn chord_buffer_ptr(&self) -> *const u16 {
        self.chords.ptr()
    }

    pub fn chord_buffer_len(&self) -> usize {
        self.chords.size()
    }

    pub fn nail_buffer(&self) -> &[i32] {
        self.layout.elements()
    }

    pub fn nail_buffer_ptr(&self) -> *const i32 {
        self.layout.ptr()
    }

    pub fn nail_buffer_len(&self) -> usize {
        self.layout.size()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_ptr(&self) -> *const i32 {
        self.canvas.ptr()
    }

    pub fn canvas_len(&self) -> usize {
        self.canvas.size()
    }

    /// Live residual grid, row-major, when an image has been processed.
    pub fn residual(&self) -> Option<&[i32]> {
        self.residual.as_ref().map(|r| r.values())
    }

    pub fn residual_ptr(&self) -> *const i32 {
        self.residual
            .as_ref()
            .map_or(std::ptr::null(), |r| r.ptr())
    }

    pub fn residual_len(&self) -> usize {
        self.residual.as_ref().map_or(0, |r| r.size())
    }

    /// Painted cells, row-major over the whole grid; `1` marks a painted cell.
    pub fn filled_in(&self) -> &[u8] {
        self.sketch.elements()
    }

    pub fn filled_in_ptr(&self) -> *const u8 {
        self.sketch.ptr()
    }

    pub fn filled_in_len(&self) -> usize {
        self.sketch.size()
    }
}

fn reserve_chords(chords: &mut ChordBuffer, budget: usize) -> Result<()> {
    chords.reserve_total(budget).map_err(|err| {
        DiskError::config(format!("cannot hold {budget} chords: {err}"))
    })
}
