//! Line oriented prompt driving a drawing session.

use std::io::{BufRead, Write};

use gridsketch_designer::{DesignerCommand, Outcome, Session};
use gridsketch_settings::DisplaySettings;
use tracing::{debug, info};

pub const WELCOME_MESSAGE: &str = "Welcome to the drawing software";
pub const QUIT_MESSAGE: &str = "Quitting Program";

/// Reads commands from `input` and writes results to `output` until `exit`
/// or end of input.
pub struct Repl<R, W> {
    session: Session,
    display: DisplaySettings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(session: Session, display: DisplaySettings, input: R, output: W) -> Self {
        Self {
            session,
            display,
            input,
            output,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the prompt loop. Only I/O failures end it with an error; every
    /// user mistake is reported and the prompt repeats.
    pub fn run(&mut self) -> anyhow::Result<()> {
        if self.display.show_banner {
            writeln!(self.output, "{}", WELCOME_MESSAGE)?;
        }

        let mut line = String::new();
        loop {
            write!(self.output, "{}", self.display.prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                writeln!(self.output)?;
                break;
            }

            let command = match DesignerCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
            };

            match self.session.execute(command) {
                Ok(Outcome::Exit) => break,
                Ok(outcome) => self.report(outcome)?,
                Err(err) if err.is_user_error() => writeln!(self.output, "{}", err)?,
                Err(err) => return Err(err.into()),
            }
        }

        writeln!(self.output, "{}", QUIT_MESSAGE)?;
        self.output.flush()?;

        let released = self.session.shutdown();
        info!("Session ended, released {} history records", released);
        Ok(())
    }

    fn report(&mut self, outcome: Outcome) -> std::io::Result<()> {
        match outcome {
            Outcome::Rendered(text) => write!(self.output, "{}", text),
            Outcome::Listing(lines) => {
                for line in lines {
                    writeln!(self.output, "{}", line)?;
                }
                Ok(())
            }
            other => {
                debug!("{:?}", other);
                Ok(())
            }
        }
    }
}
