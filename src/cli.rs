//! Command line options.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gridsketch_designer::Session;
use gridsketch_settings::Config;

use crate::repl::Repl;
use crate::{init_logging, session_options};

#[derive(Debug, Parser)]
#[command(
    name = "gridsketch",
    about = "Draw lines, rectangles and circles on a character canvas",
    version,
    long_version = concat!(
        env!("CARGO_PKG_VERSION"),
        " (built ",
        env!("GRIDSKETCH_BUILD_DATE"),
        ")"
    )
)]
pub struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Create a canvas of this width at startup
    #[arg(long, requires = "height")]
    pub width: Option<usize>,

    /// Create a canvas of this height at startup
    #[arg(long, requires = "width")]
    pub height: Option<usize>,

    /// Log filter level (trace, debug, info, warn, error, off)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Applies command line overrides on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let (Some(width), Some(height)) = (self.width, self.height) {
            config.canvas.initial_width = Some(width);
            config.canvas.initial_height = Some(height);
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.log_json {
            config.logging.json = true;
        }
    }
}

/// Loads the configuration, sets up logging and runs the prompt on the
/// terminal.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    cli.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    init_logging(&config.logging)?;

    let mut session = Session::new(session_options(&config));
    if let Some((width, height)) = config.canvas.initial_size() {
        session.create_canvas(width as i64, height as i64)?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(session, config.display, stdin.lock(), stdout.lock());
    repl.run()
}
