//! CanvasSurface - `Surface` over a 2D canvas context

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::Surface;
use crate::error::{LifeError, LifeResult};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Fails when the browser refuses a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> LifeResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| LifeError::dom("2d context"))?
            .ok_or_else(|| LifeError::dom("2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| LifeError::dom("2d context"))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, color: &str) {
        let (w, h) = self.size();
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn fill_square(&mut self, x: f64, y: f64, side: f64, color: &str, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, side, side);
        self.ctx.set_global_alpha(1.0);
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
    }
}
