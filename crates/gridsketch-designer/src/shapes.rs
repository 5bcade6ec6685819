//! Shapes that can be drawn onto the canvas and recorded in the history.

use crate::canvas::{Canvas, Pen};
use gridsketch_core::{BoundsError, DrawError};
use std::fmt;

/// Kind of a recorded shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Rect,
    Circle,
}

impl ShapeKind {
    /// The command name that draws this kind.
    pub fn command(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rect => "rect",
            ShapeKind::Circle => "circle",
        }
    }

    /// The name used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rect => "rectangle",
            ShapeKind::Circle => "circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// A drawable shape with its integer parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Line { x1: i64, y1: i64, x2: i64, y2: i64 },
    Rect { x1: i64, y1: i64, x2: i64, y2: i64 },
    Circle { x: i64, y: i64, r: i64 },
}

impl Shape {
    pub fn line(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Shape::Line { x1, y1, x2, y2 }
    }

    pub fn rect(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Shape::Rect { x1, y1, x2, y2 }
    }

    pub fn circle(x: i64, y: i64, r: i64) -> Self {
        Shape::Circle { x, y, r }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Rect { .. } => ShapeKind::Rect,
            Shape::Circle { .. } => ShapeKind::Circle,
        }
    }

    /// The four stored parameters. Circles leave the fourth at zero.
    pub fn params(&self) -> [i64; 4] {
        match *self {
            Shape::Line { x1, y1, x2, y2 } | Shape::Rect { x1, y1, x2, y2 } => [x1, y1, x2, y2],
            Shape::Circle { x, y, r } => [x, y, r, 0],
        }
    }

    /// Rebuilds a shape from its kind and stored parameters.
    pub fn from_params(kind: ShapeKind, params: [i64; 4]) -> Self {
        let [p1, p2, p3, p4] = params;
        match kind {
            ShapeKind::Line => Shape::line(p1, p2, p3, p4),
            ShapeKind::Rect => Shape::rect(p1, p2, p3, p4),
            ShapeKind::Circle => Shape::circle(p1, p2, p3),
        }
    }

    /// Rasterizes the shape with the given pen.
    pub fn render(&self, canvas: &mut Canvas, pen: Pen) -> Result<(), BoundsError> {
        match *self {
            Shape::Line { x1, y1, x2, y2 } => canvas.draw_line(x1, y1, x2, y2, pen),
            Shape::Rect { x1, y1, x2, y2 } => canvas.draw_rect(x1, y1, x2, y2, pen),
            Shape::Circle { x, y, r } => canvas.draw_circle(x, y, r, pen),
        }
    }

    /// Draws the shape, naming it in the error if it does not fit.
    pub fn draw(&self, canvas: &mut Canvas) -> Result<(), DrawError> {
        self.render(canvas, Pen::Draw)
            .map_err(|bound| DrawError::OutOfBounds {
                shape: self.kind().label(),
                bound,
            })
    }

    /// Erases the shape by re-plotting its cells as clear.
    pub fn undraw(&self, canvas: &mut Canvas) -> Result<(), DrawError> {
        self.render(canvas, Pen::Erase)
            .map_err(|bound| DrawError::OutOfBounds {
                shape: self.kind().label(),
                bound,
            })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Shape::Line { x1, y1, x2, y2 } => {
                write!(f, "Line from ({}, {}) to ({}, {})", x1, y1, x2, y2)
            }
            Shape::Rect { x1, y1, x2, y2 } => {
                write!(f, "Rectangle from ({}, {}) to ({}, {})", x1, y1, x2, y2)
            }
            Shape::Circle { x, y, r } => {
                write!(f, "Circle, centre ({}, {}) and radius {}", x, y, r)
            }
        }
    }
}
