use std::sync::Once;

use wasm_bindgen::prelude::*;

pub mod canvas;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod geometry;
pub mod render;

pub use config::DiskConfig;
pub use engine::Disk;
pub use error::DiskError;
pub use export::Chord;

use render::Renderer;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        #[cfg(target_arch = "wasm32")]
        {
            console_error_panic_hook::set_once();
            wasm_logger::init(wasm_logger::Config::default());
        }
    });
}

fn to_js(err: DiskError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// JavaScript handle around a [`Disk`].
///
/// Hosts poll the `*_ptr` / `*_size` pairs every frame and view them through
/// `wasm.memory.buffer`. Any mutating call may invalidate previously read pointers.
#[wasm_bindgen(js_name = Disk)]
pub struct DiskHandle {
    disk: Disk,
    renderer: Option<Renderer>,
}

#[wasm_bindgen(js_class = Disk)]
impl DiskHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(nail_count: usize, pixel_size: f32) -> Result<DiskHandle, JsValue> {
        init_logging();
        let disk = Disk::new(nail_count, pixel_size).map_err(to_js)?;
        Ok(DiskHandle {
            disk,
            renderer: None,
        })
    }

    // geometry

    pub fn radius(&self) -> u32 {
        self.disk.radius()
    }

    pub fn get_radius(&self) -> u32 {
        self.disk.radius()
    }

    pub fn nail_count(&self) -> usize {
        self.disk.nail_count()
    }

    pub fn side(&self) -> usize {
        self.disk.side()
    }

    pub fn pixel_size(&self) -> f32 {
        self.disk.pixel_size()
    }

    pub fn get_pixel_size(&self) -> f32 {
        self.disk.pixel_size()
    }

    pub fn set_pixel_size(&mut self, pixel_size: f32) -> Result<(), JsValue> {
        self.disk.set_pixel_size(pixel_size).map_err(to_js)
    }

    // tuning

    pub fn set_iterations(&mut self, iterations: usize) -> Result<(), JsValue> {
        self.disk.set_iterations(iterations).map_err(to_js)
    }

    pub fn set_ink(&mut self, ink: i32) -> Result<(), JsValue> {
        self.disk.set_ink(ink).map_err(to_js)
    }

    pub fn set_min_darkness(&mut self, min_darkness: i32) {
        self.disk.set_min_darkness(min_darkness);
    }

    // image path

    pub fn process_pixels(&mut self, pixels: &[u8]) -> Result<(), JsValue> {
        self.disk.process_pixels(pixels).map_err(to_js)
    }

    /// Returns the number of chords drawn. Without a processed image the
    /// painted cells are the target.
    pub fn calculate_strings(&mut self) -> Result<usize, JsValue> {
        self.disk
            .calculate_strings()
            .map(|summary| summary.chords)
            .map_err(to_js)
    }

    pub fn is_done(&self) -> bool {
        self.disk.is_done()
    }

    // painted path

    /// Returns true when a new cell was painted.
    pub fn paint(&mut self, x: f32, y: f32) -> bool {
        self.disk.paint(x, y)
    }

    // interactive path

    pub fn initialize_drawing_strings(&mut self) {
        self.disk.initialize_drawing_strings();
    }

    pub fn draw(&mut self, x: f32, y: f32) {
        self.disk.draw(x, y);
    }

    pub fn reset(&mut self) {
        self.disk.reset();
    }

    // exported buffers

    pub fn nail_buffer_ptr(&self) -> *const i32 {
        self.disk.nail_buffer_ptr()
    }

    pub fn nail_buffer_len(&self) -> usize {
        self.disk.nail_buffer_len()
    }

    pub fn nails(&self) -> *const i32 {
        self.disk.nail_buffer_ptr()
    }

    pub fn nails_size(&self) -> usize {
        self.disk.nail_buffer_len()
    }

    pub fn chord_buffer_ptr(&self) -> *const u16 {
        self.disk.chord_buffer_ptr()
    }

    pub fn chord_buffer_len(&self) -> usize {
        self.disk.chord_buffer_len()
    }

    pub fn strings(&self) -> *const u16 {
        self.disk.chord_buffer_ptr()
    }

    pub fn strings_size(&self) -> usize {
        self.disk.chord_buffer_len()
    }

    pub fn chord_count(&self) -> usize {
        self.disk.chord_count()
    }

    pub fn canvas(&self) -> *const i32 {
        self.disk.canvas_ptr()
    }

    pub fn canvas_size(&self) -> usize {
        self.disk.canvas_len()
    }

    pub fn residual(&self) -> *const i32 {
        self.disk.residual_ptr()
    }

    pub fn residual_size(&self) -> usize {
        self.disk.residual_len()
    }

    pub fn filled_in(&self) -> *const u8 {
        self.disk.filled_in_ptr()
    }

    pub fn filled_in_size(&self) -> usize {
        self.disk.filled_in_len()
    }

    // rendering

    pub fn attach_canvas(&mut self, canvas: web_sys::HtmlCanvasElement) -> Result<(), JsValue> {
        self.renderer = Some(Renderer::new(canvas)?);
        log::info!("canvas attached");
        Ok(())
    }

    /// Wipes the attached canvas. Chords are left alone.
    pub fn clear(&self) {
        if let Some(renderer) = &self.renderer {
            renderer.clear();
        }
    }

    pub fn draw_nails(&self) {
        if let Some(renderer) = &self.renderer {
            renderer.draw_nails(&self.disk);
        }
    }

    pub fn draw_canvas(&self) -> Result<(), JsValue> {
        match &self.renderer {
            Some(renderer) => renderer.draw_canvas(&self.disk),
            None => Ok(()),
        }
    }

    pub fn draw_strings(&self) {
        if let Some(renderer) = &self.renderer {
            renderer.draw_strings(&self.disk);
        }
    }
}
