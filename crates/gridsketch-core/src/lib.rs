//! # GridSketch Core
//!
//! Error taxonomy shared by the GridSketch crates.
//! The rasterizer reports [`BoundsError`]; the session turns those into
//! user-facing [`DrawError`]s and everything funnels into [`Error`].

pub mod error;

pub use error::{BoundsError, CanvasError, CommandError, DrawError, Error, HistoryError, Result};
