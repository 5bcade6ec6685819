//! # GridSketch Designer
//!
//! The drawing engine behind the GridSketch prompt: a character canvas, the
//! rasterizer that plots onto it, and a deletable command history that makes
//! undo possible by redrawing a shape with the clear pen.
//!
//! ## Architecture
//!
//! ```text
//! Session (one per program run)
//!   ├── Canvas (fixed W x H grid of set/clear cells)
//!   │     └── operations (line, rect, circle, fill)
//!   └── CommandHistory (linked list of drawn shapes, ids 1..=N)
//!
//! DesignerCommand (parsed prompt line) ──> Session::execute
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use gridsketch_designer::{Session, SessionOptions, Shape};
//!
//! let mut session = Session::new(SessionOptions::default());
//! session.create_canvas(10, 10)?;
//! let id = session.draw(Shape::line(0, 0, 9, 9))?;
//! session.delete(id as i64)?;
//! assert!(session.canvas().unwrap().is_blank());
//! # Ok::<(), gridsketch_core::Error>(())
//! ```

pub mod canvas;
pub mod commands;
pub mod history;
pub mod session;
pub mod shapes;

pub use canvas::{Canvas, Cell, Glyphs, GridPoint, Pen};
pub use commands::{DesignerCommand, COMMANDS};
pub use history::{CommandHistory, CommandRecord, EMPTY_HISTORY_MESSAGE, ROOT_ID};
pub use session::{Outcome, Session, SessionOptions};
pub use shapes::{Shape, ShapeKind};
