//! Character canvas the rasterizer draws onto.
//!
//! The grid is stored row-major with row 0 at the bottom; rendering walks the
//! rows from the top so that y grows upwards on screen.

mod operations;
mod types;

pub use operations::{circle_points, line_points, CIRCLE_SAMPLES};
pub use types::{Cell, Glyphs, GridPoint, Pen};

use gridsketch_core::CanvasError;
use std::fmt;

/// Fixed-size grid of set/clear cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Creates a canvas with every cell clear.
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
                reason: "width and height must be greater than zero".to_string(),
            });
        }

        let too_large = |reason: &str| CanvasError::InvalidDimensions {
            width: i64::try_from(width).unwrap_or(i64::MAX),
            height: i64::try_from(height).unwrap_or(i64::MAX),
            reason: reason.to_string(),
        };
        let len = width
            .checked_mul(height)
            .ok_or_else(|| too_large("width times height overflows the cell count"))?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| too_large("not enough memory for the requested grid"))?;
        cells.resize(len, Cell::Clear);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true when the point lies on the grid.
    pub fn contains(&self, point: GridPoint) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u64) < self.width as u64
            && (point.y as u64) < self.height as u64
    }

    /// Gets the cell at (x, y), or `None` off the grid.
    pub fn get(&self, x: i64, y: i64) -> Option<Cell> {
        self.index_of(GridPoint::new(x, y)).map(|i| self.cells[i])
    }

    /// Returns true when (x, y) is on the grid and set.
    pub fn is_set(&self, x: i64, y: i64) -> bool {
        self.get(x, y).is_some_and(Cell::is_set)
    }

    /// Number of set cells.
    pub fn set_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_set()).count()
    }

    /// Returns true when no cell is set.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| !c.is_set())
    }

    /// Flips every cell.
    pub fn invert(&mut self) {
        for cell in &mut self.cells {
            *cell = cell.inverted();
        }
    }

    /// Clears every cell. The command history is not touched.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Clear);
    }

    /// Renders with the default `*` / `.` glyphs.
    pub fn render(&self) -> String {
        self.render_with(&Glyphs::default())
    }

    /// Renders the grid top row first, each cell followed by a space and
    /// every row terminated by a newline.
    pub fn render_with(&self, glyphs: &Glyphs) -> String {
        let mut out = String::with_capacity((self.width * 2 + 1) * self.height);
        for row in self.cells.chunks(self.width).rev() {
            for cell in row {
                out.push(glyphs.glyph(*cell));
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    fn index_of(&self, point: GridPoint) -> Option<usize> {
        if self.contains(point) {
            Some(point.y as usize * self.width + point.x as usize)
        } else {
            None
        }
    }

    /// Writes a cell, ignoring points off the grid.
    pub(crate) fn plot(&mut self, point: GridPoint, cell: Cell) {
        if let Some(i) = self.index_of(point) {
            self.cells[i] = cell;
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
