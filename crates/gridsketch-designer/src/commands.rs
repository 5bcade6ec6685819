//! Text commands accepted at the prompt.
//!
//! A command is a name followed by a fixed number of whitespace separated
//! integer parameters, all on one line.

use crate::shapes::Shape;
use gridsketch_core::CommandError;
use std::str::FromStr;

/// Every legal command with the number of parameters it takes.
pub const COMMANDS: [(&str, usize); 11] = [
    ("new", 2),
    ("r", 0),
    ("clear", 0),
    ("invert", 0),
    ("line", 4),
    ("rect", 4),
    ("circle", 3),
    ("fill", 2),
    ("list", 0),
    ("delete", 1),
    ("exit", 0),
];

/// A parsed prompt command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignerCommand {
    /// Create the canvas
    New { width: i64, height: i64 },
    /// Print the canvas
    Render,
    /// Blank the canvas and empty the history
    Clear,
    /// Flip every cell
    Invert,
    /// Draw and record a line, rectangle or circle
    Draw(Shape),
    /// Flood fill from a seed
    Fill { x: i64, y: i64 },
    /// Print the history
    List,
    /// Delete a history record and erase its shape
    Delete { id: i64 },
    /// Leave the program
    Exit,
}

impl DesignerCommand {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };

        let arity = arity(name).ok_or_else(|| CommandError::UnknownCommand {
            name: name.to_string(),
        })?;

        let args: Vec<&str> = tokens.collect();
        if args.len() < arity {
            return Err(CommandError::MissingArgument {
                command: name.to_string(),
                expected: arity,
                found: args.len(),
            });
        }
        if args.len() > arity {
            return Err(CommandError::TooManyArguments {
                command: name.to_string(),
                expected: arity,
            });
        }

        let p = args
            .iter()
            .map(|arg| {
                arg.parse::<i64>().map_err(|_| CommandError::InvalidArgument {
                    command: name.to_string(),
                    value: arg.to_string(),
                })
            })
            .collect::<Result<Vec<i64>, _>>()?;

        let command = match name {
            "new" => DesignerCommand::New {
                width: p[0],
                height: p[1],
            },
            "r" => DesignerCommand::Render,
            "clear" => DesignerCommand::Clear,
            "invert" => DesignerCommand::Invert,
            "line" => DesignerCommand::Draw(Shape::line(p[0], p[1], p[2], p[3])),
            "rect" => DesignerCommand::Draw(Shape::rect(p[0], p[1], p[2], p[3])),
            "circle" => DesignerCommand::Draw(Shape::circle(p[0], p[1], p[2])),
            "fill" => DesignerCommand::Fill { x: p[0], y: p[1] },
            "list" => DesignerCommand::List,
            "delete" => DesignerCommand::Delete { id: p[0] },
            _ => DesignerCommand::Exit,
        };
        Ok(Some(command))
    }

    /// The command name as typed at the prompt.
    pub fn name(&self) -> &'static str {
        match self {
            DesignerCommand::New { .. } => "new",
            DesignerCommand::Render => "r",
            DesignerCommand::Clear => "clear",
            DesignerCommand::Invert => "invert",
            DesignerCommand::Draw(shape) => shape.kind().command(),
            DesignerCommand::Fill { .. } => "fill",
            DesignerCommand::List => "list",
            DesignerCommand::Delete { .. } => "delete",
            DesignerCommand::Exit => "exit",
        }
    }
}

impl FromStr for DesignerCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DesignerCommand::parse(s)?.ok_or(CommandError::Empty)
    }
}

/// Number of parameters taken by a command name.
pub fn arity(name: &str) -> Option<usize> {
    COMMANDS
        .iter()
        .find(|(command, _)| *command == name)
        .map(|(_, arity)| *arity)
}
