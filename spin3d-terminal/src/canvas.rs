/// Character-cell line rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use spin3d_core::{LineSink, Viewport};
use std::io::Write;

/// Typical terminal cell height divided by cell width
pub const DEFAULT_CELL_ASPECT: f32 = 2.0;

/// Terminal canvas that receives pixel-space segments and draws them as
/// slope-shaped characters on a cell grid.
///
/// The viewport is letterboxed into the largest centered region that keeps
/// its aspect ratio once cell shape is taken into account.
pub struct Canvas {
    width: usize,
    height: usize,
    viewport: Viewport,
    cell_aspect: f32,
    region: Region,
    cells: Vec<char>,
}

/// Where the viewport lands on the cell grid
#[derive(Debug, Clone, Copy, PartialEq)]
struct Region {
    left: f32,
    top: f32,
    /// Columns per viewport pixel
    scale_x: f32,
    /// Rows per viewport pixel
    scale_y: f32,
}

impl Canvas {
    /// A `width` x `height` cell grid showing `viewport`
    pub fn new(width: usize, height: usize, viewport: Viewport) -> Self {
        let mut canvas = Self {
            width,
            height,
            viewport,
            cell_aspect: DEFAULT_CELL_ASPECT,
            region: Region {
                left: 0.0,
                top: 0.0,
                scale_x: 0.0,
                scale_y: 0.0,
            },
            cells: vec![' '; width * height],
        };
        canvas.fit_region();
        canvas
    }

    /// Use a different cell height / width ratio. Non-positive or non-finite
    /// values fall back to [`DEFAULT_CELL_ASPECT`].
    pub fn with_cell_aspect(mut self, cell_aspect: f32) -> Self {
        self.cell_aspect = if cell_aspect.is_finite() && cell_aspect > 0.0 {
            cell_aspect
        } else {
            log::warn!("Ignoring cell aspect {}, using {}", cell_aspect, DEFAULT_CELL_ASPECT);
            DEFAULT_CELL_ASPECT
        };
        self.fit_region();
        self
    }

    fn fit_region(&mut self) {
        let vw = self.viewport.width() as f32;
        let vh = self.viewport.height() as f32;
        // Measured in cell widths, the grid is width x (height * cell_aspect)
        let scale = (self.width as f32 / vw).min(self.height as f32 * self.cell_aspect / vh);
        let scale_x = scale;
        let scale_y = scale / self.cell_aspect;

        self.region = Region {
            left: (self.width as f32 - vw * scale_x) / 2.0,
            top: (self.height as f32 - vh * scale_y) / 2.0,
            scale_x,
            scale_y,
        };
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![' '; width * height];
        self.fit_region();
    }

    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    pub fn cell(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x]
    }

    /// Rows of the canvas as strings
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().collect())
    }

    /// Map a pixel coordinate to a cell coordinate. Points inside the
    /// viewport, edges included, always land inside the letterboxed region;
    /// points outside may fall off the grid and get clipped.
    fn to_cell(&self, x: f32, y: f32) -> (i32, i32) {
        let region = self.region;
        let vw = self.viewport.width() as f32;
        let vh = self.viewport.height() as f32;
        (
            axis_cell(x, vw, region.left, region.scale_x),
            axis_cell(y, vh, region.top, region.scale_y),
        )
    }

    fn plot(&mut self, x: i32, y: i32, glyph: char) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = glyph;
    }

    /// Bresenham line between two cells
    fn line(&mut self, (mut x0, mut y0): (i32, i32), (x1, y1): (i32, i32), glyph: char) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, glyph);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    pub fn draw<W: Write>(
        &self,
        writer: &mut W,
        foreground: Color,
        background: Color,
    ) -> std::io::Result<()> {
        writer.queue(SetBackgroundColor(background))?;
        writer.queue(SetForegroundColor(foreground))?;
        for (y, row) in self.rows().enumerate() {
            writer.queue(Print(row))?;
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl LineSink for Canvas {
    fn draw_segment(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let start = self.to_cell(x1, y1);
        let end = self.to_cell(x2, y2);
        let glyph = slope_glyph(end.0 - start.0, end.1 - start.1);
        self.line(start, end, glyph);
    }
}

/// Cell index along one axis. A coordinate in `[0, extent]` is clamped to
/// the last cell its region covers, so the far edge is not clipped.
fn axis_cell(v: f32, extent: f32, offset: f32, scale: f32) -> i32 {
    let cell = (offset + v * scale).floor() as i32;
    if (0.0..=extent).contains(&v) {
        let first = offset.floor() as i32;
        let last = ((offset + extent * scale).ceil() as i32 - 1).max(first);
        cell.clamp(first, last)
    } else {
        cell
    }
}

/// Pick a character that follows the direction of a line in cell space
/// (y grows downward)
fn slope_glyph(dx: i32, dy: i32) -> char {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax == 0 && ay == 0 {
        '.'
    } else if ay * 2 <= ax {
        '-'
    } else if ax * 2 <= ay {
        '|'
    } else if (dx > 0) == (dy > 0) {
        '\\'
    } else {
        '/'
    }
}
