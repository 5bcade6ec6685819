//! Drawing session state.
//!
//! Owns the single canvas and the command history and routes every prompt
//! command to them. A shape is recorded only after it has been drawn, and a
//! rejected shape leaves both the canvas and the history untouched.

use crate::canvas::{Canvas, Glyphs};
use crate::commands::DesignerCommand;
use crate::history::{CommandHistory, CommandRecord};
use crate::shapes::Shape;
use gridsketch_core::{CanvasError, DrawError, Result};
use tracing::{debug, info, warn};

/// Limits and presentation options for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub max_width: usize,
    pub max_height: usize,
    pub glyphs: Glyphs,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_width: 200,
            max_height: 200,
            glyphs: Glyphs::default(),
        }
    }
}

/// What a successfully executed command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { width: usize, height: usize },
    Rendered(String),
    Cleared { records: usize },
    Inverted,
    Drawn { id: usize, shape: Shape },
    Filled { cells: usize },
    Listing(Vec<String>),
    Deleted(CommandRecord),
    Exit,
}

/// One drawing session: at most one canvas plus its history.
#[derive(Debug, Default)]
pub struct Session {
    canvas: Option<Canvas>,
    history: CommandHistory,
    options: SessionOptions,
}

impl Session {
    /// Creates a session with no canvas yet.
    pub fn new(options: SessionOptions) -> Self {
        Self {
            canvas: None,
            history: CommandHistory::new(),
            options,
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    fn canvas_mut(&mut self) -> std::result::Result<&mut Canvas, CanvasError> {
        self.canvas.as_mut().ok_or(CanvasError::NotCreated)
    }

    /// Creates the canvas. Only one canvas may ever exist per session.
    pub fn create_canvas(&mut self, width: i64, height: i64) -> Result<()> {
        if self.canvas.is_some() {
            return Err(CanvasError::AlreadyCreated.into());
        }

        let invalid = |reason: String| CanvasError::InvalidDimensions {
            width,
            height,
            reason,
        };
        if width <= 0 || height <= 0 {
            return Err(invalid("width and height must be greater than zero".to_string()).into());
        }
        let (w, h) = (width as usize, height as usize);
        if w > self.options.max_width || h > self.options.max_height {
            return Err(invalid(format!(
                "the largest canvas allowed is {}x{}",
                self.options.max_width, self.options.max_height
            ))
            .into());
        }

        self.canvas = Some(Canvas::new(w, h)?);
        info!("Created {}x{} canvas", w, h);
        Ok(())
    }

    /// Draws a shape and records it, returning the new record's identifier.
    pub fn draw(&mut self, shape: Shape) -> Result<usize> {
        let canvas = self.canvas_mut()?;
        if let Err(err) = shape.draw(canvas) {
            warn!("Rejected {}: {}", shape, err.bound());
            return Err(err.into());
        }
        Ok(self.history.append(shape))
    }

    /// Flood fills from a seed. Fills are not recorded.
    pub fn fill(&mut self, x: i64, y: i64) -> Result<usize> {
        let canvas = self.canvas_mut()?;
        let cells = canvas
            .fill(x, y)
            .map_err(|bound| DrawError::SeedOutOfBounds { bound })?;
        debug!("Filled {} cells from ({}, {})", cells, x, y);
        Ok(cells)
    }

    pub fn invert(&mut self) -> Result<()> {
        self.canvas_mut()?.invert();
        Ok(())
    }

    /// Blanks the canvas, then empties the history. Returns the number of
    /// records removed.
    pub fn clear(&mut self) -> Result<usize> {
        let canvas = self.canvas.as_mut().ok_or(CanvasError::NotCreated)?;
        canvas.clear();
        let records = self.history.clear(canvas);
        info!("Cleared canvas and {} history records", records);
        Ok(records)
    }

    /// Deletes a history record and erases its shape.
    pub fn delete(&mut self, id: i64) -> Result<CommandRecord> {
        let canvas = self.canvas.as_mut().ok_or(CanvasError::NotCreated)?;
        Ok(self.history.delete_by_id(id, canvas)?)
    }

    pub fn render(&self) -> Result<String> {
        let canvas = self.canvas.as_ref().ok_or(CanvasError::NotCreated)?;
        Ok(canvas.render_with(&self.options.glyphs))
    }

    pub fn list(&self) -> Vec<String> {
        self.history.lines().collect()
    }

    /// Runs one parsed command against the session.
    pub fn execute(&mut self, command: DesignerCommand) -> Result<Outcome> {
        debug!("Executing {:?}", command);
        let outcome = match command {
            DesignerCommand::New { width, height } => {
                self.create_canvas(width, height)?;
                Outcome::Created {
                    width: width as usize,
                    height: height as usize,
                }
            }
            DesignerCommand::Render => Outcome::Rendered(self.render()?),
            DesignerCommand::Clear => Outcome::Cleared {
                records: self.clear()?,
            },
            DesignerCommand::Invert => {
                self.invert()?;
                Outcome::Inverted
            }
            DesignerCommand::Draw(shape) => Outcome::Drawn {
                id: self.draw(shape)?,
                shape,
            },
            DesignerCommand::Fill { x, y } => Outcome::Filled {
                cells: self.fill(x, y)?,
            },
            DesignerCommand::List => Outcome::Listing(self.list()),
            DesignerCommand::Delete { id } => Outcome::Deleted(self.delete(id)?),
            DesignerCommand::Exit => Outcome::Exit,
        };
        Ok(outcome)
    }

    /// Releases every history record. Returns how many were released.
    pub fn shutdown(&mut self) -> usize {
        let released = self.history.release_all();
        debug!("Released {} history records", released);
        released
    }
}
