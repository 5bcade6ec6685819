//! Canvas type definitions: Cell, Pen, GridPoint, Glyphs.

/// State of a single canvas cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Clear,
    Set,
}

impl Cell {
    /// Returns the opposite state.
    pub fn inverted(self) -> Self {
        match self {
            Cell::Clear => Cell::Set,
            Cell::Set => Cell::Clear,
        }
    }

    pub fn is_set(self) -> bool {
        self == Cell::Set
    }
}

/// Whether a rasterizer call plots or erases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pen {
    #[default]
    Draw,
    Erase,
}

impl Pen {
    /// The cell state this pen leaves behind.
    pub fn cell(self) -> Cell {
        match self {
            Pen::Draw => Cell::Set,
            Pen::Erase => Cell::Clear,
        }
    }
}

/// Integer grid coordinates.
///
/// Coordinates are signed so that user input can be checked against the
/// lower bounds before it ever indexes the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

impl GridPoint {
    /// Creates a new grid point.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for GridPoint {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// Characters used when rendering the canvas as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub set: char,
    pub clear: char,
}

impl Glyphs {
    pub fn new(set: char, clear: char) -> Self {
        Self { set, clear }
    }

    pub fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Set => self.set,
            Cell::Clear => self.clear,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self { set: '*', clear: '.' }
    }
}
