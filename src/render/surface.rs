//! Drawing surface abstraction
//!
//! The painter only ever needs four primitives, so the browser canvas and the
//! headless recorder used by tests implement the same small trait.

/// Something cells can be painted on. Coordinates are canvas pixels.
pub trait Surface {
    /// Current pixel size `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Change the backing pixel size. Clears the content.
    fn resize(&mut self, width: u32, height: u32);

    /// Fill the whole surface with one color.
    fn clear(&mut self, color: &str);

    /// Fill a `side x side` square at `(x, y)` with `color` at `alpha`.
    fn fill_square(&mut self, x: f64, y: f64, side: f64, color: &str, alpha: f64);

    /// Stroke a straight line.
    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
}

/// One recorded call on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear {
        color: String,
    },
    Square {
        x: f64,
        y: f64,
        side: f64,
        color: String,
        alpha: f64,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: String,
        width: f64,
    },
}

/// Headless surface that keeps a log of every draw call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Forget everything drawn so far.
    pub fn take(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn squares(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Square { .. }))
    }

    pub fn square_count(&self) -> usize {
        self.squares().count()
    }

    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }

    pub fn clear_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Clear { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self, color: &str) {
        self.ops.push(DrawOp::Clear {
            color: color.to_string(),
        });
    }

    fn fill_square(&mut self, x: f64, y: f64, side: f64, color: &str, alpha: f64) {
        self.ops.push(DrawOp::Square {
            x,
            y,
            side,
            color: color.to_string(),
            alpha,
        });
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color: color.to_string(),
            width,
        });
    }
}
