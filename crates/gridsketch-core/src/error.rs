//! Error handling for GridSketch
//!
//! Provides error types for every layer of the drawing program:
//! - Bounds errors (rasterizer coordinate checks)
//! - Canvas errors (session lifecycle)
//! - Draw errors (user-facing rejected shapes)
//! - History errors (record lookup)
//! - Command errors (text parsing)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Boundary violation reported by the rasterizer.
///
/// Checks run in a fixed order: maximum width, maximum height, minimum
/// width, minimum height. The first failing check wins.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundsError {
    /// A y coordinate is at or beyond the canvas height
    #[error("maximum height")]
    MaxHeight,

    /// An x coordinate is at or beyond the canvas width
    #[error("maximum width")]
    MaxWidth,

    /// A y coordinate is negative
    #[error("minimum height")]
    MinHeight,

    /// An x coordinate is negative
    #[error("minimum width")]
    MinWidth,
}

/// Canvas lifecycle error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// A drawing command arrived before `new`
    #[error("No canvas exists yet, create one with 'new <width> <height>'")]
    NotCreated,

    /// `new` was issued a second time
    #[error("'New' cannot be executed more than once, please enter another command")]
    AlreadyCreated,

    /// Requested canvas size is unusable
    #[error("Cannot create a {width}x{height} canvas: {reason}")]
    InvalidDimensions {
        /// The requested width.
        width: i64,
        /// The requested height.
        height: i64,
        /// Why the size was refused.
        reason: String,
    },
}

/// A shape or fill request that was refused before touching the canvas.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// A line, rectangle or circle leaves the canvas
    #[error("Error: {shape} could not be drawn, it exceeds the {bound} of screen.")]
    OutOfBounds {
        /// Human readable shape label (`line`, `rectangle`, `circle`).
        shape: &'static str,
        /// The first bound that was violated.
        bound: BoundsError,
    },

    /// The fill seed lies outside the canvas
    #[error("Error: fill could not be applied, the seed point exceeds the {bound} of screen.")]
    SeedOutOfBounds {
        /// The first bound that was violated.
        bound: BoundsError,
    },
}

impl DrawError {
    /// The boundary violation behind this error.
    pub fn bound(&self) -> BoundsError {
        match self {
            DrawError::OutOfBounds { bound, .. } | DrawError::SeedOutOfBounds { bound } => *bound,
        }
    }
}

/// History lookup error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// No live record carries the requested identifier
    #[error("Chosen command doesn't exist, please enter the number of a listed command")]
    NotFound {
        /// The identifier the user asked for.
        id: i64,
    },
}

/// Command line parsing error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The line held no command at all
    #[error("No command entered. Please enter one of the eleven legal commands")]
    Empty,

    /// The first token is not one of the known commands
    #[error("{name} is an illegal command. Please ensure one of the eleven legal commands has been entered")]
    UnknownCommand {
        /// The token that was entered.
        name: String,
    },

    /// Fewer parameters than the command takes
    #[error("'{command}' expects {expected} parameter(s) but {found} were given")]
    MissingArgument {
        /// The command name.
        command: String,
        /// How many parameters the command takes.
        expected: usize,
        /// How many were supplied.
        found: usize,
    },

    /// More parameters than the command takes
    #[error("'{command}' expects only {expected} parameter(s)")]
    TooManyArguments {
        /// The command name.
        command: String,
        /// How many parameters the command takes.
        expected: usize,
    },

    /// A parameter is not an integer
    #[error("'{command}' parameter '{value}' is not a whole number")]
    InvalidArgument {
        /// The command name.
        command: String,
        /// The offending token.
        value: String,
    },
}

/// Main error type for GridSketch
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Raw rasterizer bounds error
    #[error(transparent)]
    Bounds(#[from] BoundsError),

    /// Canvas lifecycle error
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// Rejected shape or fill
    #[error(transparent)]
    Draw(#[from] DrawError),

    /// History lookup error
    #[error(transparent)]
    History(#[from] HistoryError),

    /// Command parsing error
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error comes from a coordinate bounds check
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Error::Bounds(_) | Error::Draw(_))
    }

    /// Check if this is a history lookup error
    pub fn is_history_error(&self) -> bool {
        matches!(self, Error::History(_))
    }

    /// Check if the user can simply retry after this error.
    ///
    /// Everything except I/O failure leaves the session untouched.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
