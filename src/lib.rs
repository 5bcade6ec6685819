//! # GridSketch
//!
//! An interactive console drawing program. Shapes are rasterized onto a
//! character canvas and every successful draw is recorded in a history from
//! which it can later be deleted, erasing it from the canvas.
//!
//! ## Architecture
//!
//! GridSketch is organized as a workspace with multiple crates:
//!
//! 1. **gridsketch-core** - Error taxonomy
//! 2. **gridsketch-designer** - Canvas, rasterizer, history, session, commands
//! 3. **gridsketch-settings** - Configuration files
//! 4. **gridsketch** - Prompt loop, logging and the binary
//!
//! ## Commands
//!
//! | Command | Parameters |
//! |---------|------------|
//! | `new` | width height |
//! | `r` | |
//! | `clear` | |
//! | `invert` | |
//! | `line` / `rect` | x1 y1 x2 y2 |
//! | `circle` | x y radius |
//! | `fill` | x y |
//! | `list` | |
//! | `delete` | id |
//! | `exit` | |

pub mod cli;
pub mod repl;

pub use gridsketch_core::{Error, Result};
pub use gridsketch_designer::{
    Canvas, CommandHistory, CommandRecord, DesignerCommand, Glyphs, Outcome, Session,
    SessionOptions, Shape, ShapeKind,
};
pub use gridsketch_settings::{Config, DisplaySettings, LoggingSettings};
pub use repl::Repl;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("GRIDSKETCH_BUILD_DATE");

/// Session limits and glyphs taken from the configuration.
pub fn session_options(config: &Config) -> SessionOptions {
    SessionOptions {
        max_width: config.canvas.max_width,
        max_height: config.canvas.max_height,
        glyphs: Glyphs::new(config.display.set_glyph, config.display.clear_glyph),
    }
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout to the canvas
/// - RUST_LOG environment variable support, falling back to the configured level
/// - Optional JSON lines
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.to_ascii_lowercase()));

    if settings.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
