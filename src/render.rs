//! 2D canvas renderer that replays a disk's exported state.
//!
//! Grid cell `(x, y)` is drawn at `(x, y) * pixel_size` canvas pixels, the same
//! mapping `Disk::draw` inverts for pointer input.

use std::f64::consts::TAU;

use glam::DVec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::engine::Disk;

const NAIL_COLOR: &str = "#c0392b";
const STRING_COLOR: &str = "#111111";
const INK_COLOR: &str = "#000000";
const RIM_COLOR: &str = "#bbbbbb";
const STRING_ALPHA: f64 = 0.5;
const STRING_WIDTH: f64 = 0.5;

pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    pub fn clear(&self) {
        self.ctx.set_global_alpha(1.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    pub fn draw_nails(&self, disk: &Disk) {
        let scale = disk.pixel_size() as f64;
        let size = scale.max(2.0);
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style_str(NAIL_COLOR);
        for nail in disk.nails() {
            self.ctx.fill_rect(
                nail.x as f64 * scale - size / 2.0,
                nail.y as f64 * scale - size / 2.0,
                size,
                size,
            );
        }
    }

    /// Residual heat-map when a residual exists, otherwise the rim and any
    /// painted cells.
    pub fn draw_canvas(&self, disk: &Disk) -> Result<(), JsValue> {
        let scale = disk.pixel_size() as f64;
        let side = disk.side();
        self.ctx.set_fill_style_str(INK_COLOR);

        let Some(residual) = disk.residual() else {
            let center = disk.center().as_dvec2() * scale;
            self.ctx.set_global_alpha(1.0);
            self.ctx.set_stroke_style_str(RIM_COLOR);
            self.ctx.begin_path();
            self.ctx
                .arc(center.x, center.y, disk.radius() as f64 * scale, 0.0, TAU)?;
            self.ctx.stroke();

            let filled = disk.filled_in();
            for cell in disk.canvas().cells() {
                if filled[cell.y as usize * side + cell.x as usize] != 0 {
                    self.fill_cell(cell.as_dvec2() * scale, scale);
                }
            }
            return Ok(());
        };

        for cell in disk.canvas().cells() {
            let value = residual[cell.y as usize * side + cell.x as usize];
            if value <= 0 {
                continue;
            }
            self.ctx.set_global_alpha(value as f64 / 255.0);
            self.fill_cell(cell.as_dvec2() * scale, scale);
        }
        self.ctx.set_global_alpha(1.0);
        Ok(())
    }

    fn fill_cell(&self, origin: DVec2, scale: f64) {
        self.ctx.fill_rect(origin.x, origin.y, scale, scale);
    }

    pub fn draw_strings(&self, disk: &Disk) {
        let scale = disk.pixel_size() as f64;
        let nails = disk.nails();

        self.ctx.set_global_alpha(STRING_ALPHA);
        self.ctx.set_line_width(STRING_WIDTH);
        self.ctx.set_stroke_style_str(STRING_COLOR);
        for chord in disk.chords() {
            let start = nails[chord.start as usize].as_dvec2() * scale;
            let end = nails[chord.end as usize].as_dvec2() * scale;
            self.ctx.begin_path();
            self.ctx.move_to(start.x, start.y);
            self.ctx.line_to(end.x, end.y);
            self.ctx.stroke();
        }
        self.ctx.set_global_alpha(1.0);
    }
}
