//! Rasterization operations for Canvas.
//!
//! Every drawing call validates its coordinates before the first cell is
//! written, so a rejected request leaves the canvas untouched.

use gridsketch_core::BoundsError;
use std::f64::consts::PI;

use super::types::{Cell, GridPoint, Pen};
use super::Canvas;

/// Number of perimeter samples taken for a circle (0..=360 degrees).
pub const CIRCLE_SAMPLES: usize = 361;

impl Canvas {
    /// Checks a single point: max width, max height, min width, min height.
    pub fn check_point(&self, point: GridPoint) -> Result<(), BoundsError> {
        self.check_span(&[point.x], &[point.y])
    }

    /// Checks all x coordinates against the width and all y coordinates
    /// against the height, one criterion at a time across the whole set.
    fn check_span(&self, xs: &[i64], ys: &[i64]) -> Result<(), BoundsError> {
        let width = self.width() as i64;
        let height = self.height() as i64;

        if xs.iter().any(|&x| x >= width) {
            return Err(BoundsError::MaxWidth);
        }
        if ys.iter().any(|&y| y >= height) {
            return Err(BoundsError::MaxHeight);
        }
        if xs.iter().any(|&x| x < 0) {
            return Err(BoundsError::MinWidth);
        }
        if ys.iter().any(|&y| y < 0) {
            return Err(BoundsError::MinHeight);
        }
        Ok(())
    }

    /// Plots (or erases) the segment between two points.
    pub fn draw_line(
        &mut self,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        pen: Pen,
    ) -> Result<(), BoundsError> {
        self.check_span(&[x1, x2], &[y1, y2])?;
        self.plot_all(line_points(x1, y1, x2, y2), pen.cell());
        Ok(())
    }

    /// Plots the outline of the rectangle spanned by two corners.
    ///
    /// Edges are checked bottom, left, top, right with the line check, and
    /// the first failing edge decides the error. Nothing is drawn until every
    /// edge is known to fit.
    pub fn draw_rect(
        &mut self,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        pen: Pen,
    ) -> Result<(), BoundsError> {
        let edges = rect_edges(x1, y1, x2, y2);
        for (a, b) in &edges {
            self.check_span(&[a.x, b.x], &[a.y, b.y])?;
        }

        let cell = pen.cell();
        for (a, b) in edges {
            self.plot_all(line_points(a.x, a.y, b.x, b.y), cell);
        }
        Ok(())
    }

    /// Plots a circle outline sampled at one-degree steps.
    ///
    /// Every sample is checked before any is drawn. Samples are checked in
    /// angle order and the first failing sample decides the error.
    pub fn draw_circle(&mut self, x: i64, y: i64, r: i64, pen: Pen) -> Result<(), BoundsError> {
        let points = circle_points(x, y, r);
        for point in &points {
            self.check_point(*point)?;
        }

        self.plot_all(points, pen.cell());
        Ok(())
    }

    /// 4-connected flood fill from a seed, bounded by set cells and the grid
    /// edge. Returns the number of cells that were set.
    ///
    /// Starting on a set cell is a no-op.
    pub fn fill(&mut self, x: i64, y: i64) -> Result<usize, BoundsError> {
        let seed = GridPoint::new(x, y);
        self.check_point(seed)?;

        if self.is_set(x, y) {
            return Ok(0);
        }

        let mut filled = 0;
        let mut pending = vec![seed];
        self.plot(seed, Cell::Set);

        while let Some(point) = pending.pop() {
            filled += 1;
            let neighbours = [
                GridPoint::new(point.x - 1, point.y),
                GridPoint::new(point.x + 1, point.y),
                GridPoint::new(point.x, point.y - 1),
                GridPoint::new(point.x, point.y + 1),
            ];
            for next in neighbours {
                if self.get(next.x, next.y) == Some(Cell::Clear) {
                    self.plot(next, Cell::Set);
                    pending.push(next);
                }
            }
        }

        Ok(filled)
    }

    fn plot_all(&mut self, points: impl IntoIterator<Item = GridPoint>, cell: Cell) {
        for point in points {
            self.plot(point, cell);
        }
    }
}

/// Cells visited by a line from (x1, y1) to (x2, y2).
///
/// Steps one cell at a time along the axis with the larger delta. The minor
/// coordinate is `start + step * minor / major + 0.5`, floored.
pub fn line_points(x1: i64, y1: i64, x2: i64, y2: i64) -> Vec<GridPoint> {
    let dx = x2 - x1;
    let dy = y2 - y1;

    if dx == 0 && dy == 0 {
        return vec![GridPoint::new(x1, y1)];
    }

    let x_major = dx.abs() > dy.abs();
    let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };
    let step = major.signum();

    (0..=major.abs())
        .map(|n| {
            let along = n * step;
            let across = (along * minor) as f64 / major as f64 + 0.5;
            if x_major {
                GridPoint::new(x1 + along, (y1 as f64 + across).floor() as i64)
            } else {
                GridPoint::new((x1 as f64 + across).floor() as i64, y1 + along)
            }
        })
        .collect()
}

/// Edge endpoints of a rectangle in drawing order: bottom, left, top, right.
fn rect_edges(x1: i64, y1: i64, x2: i64, y2: i64) -> [(GridPoint, GridPoint); 4] {
    [
        (GridPoint::new(x1, y1), GridPoint::new(x2, y1)),
        (GridPoint::new(x1, y1), GridPoint::new(x1, y2)),
        (GridPoint::new(x1, y2), GridPoint::new(x2, y2)),
        (GridPoint::new(x2, y1), GridPoint::new(x2, y2)),
    ]
}

/// The 361 perimeter samples of a circle, one per degree from 0 to 360.
///
/// Each sample is `centre + r * (cos, sin) + 0.5` truncated toward zero.
pub fn circle_points(x: i64, y: i64, r: i64) -> Vec<GridPoint> {
    (0..CIRCLE_SAMPLES)
        .map(|deg| {
            let theta = deg as f64 * PI / 180.0;
            let px = x as f64 + r as f64 * theta.cos() + 0.5;
            let py = y as f64 + r as f64 * theta.sin() + 0.5;
            GridPoint::new(px as i64, py as i64)
        })
        .collect()
}
