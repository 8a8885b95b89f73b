use crate::modules::render::{render_list, RenderOptions};
use anyhow::Result;
use leetvault_libs::catalog::{FilterField, FilterState, ProblemStore};
use std::{
    borrow::Cow,
    io::{BufRead, Write},
};
use thiserror::Error;

const HELP: &str = "\
commands:
  difficulty <All|Easy|Medium|Hard>
  status <All|Solved|In Progress|Not Started>
  category <All|category name>
  reset    clear every filter
  show     render the current list again
  help     print this message
  quit     leave the browser";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`, type `help` for the list of commands")]
    Unknown(String),
    #[error("`{0}` needs a value")]
    MissingValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Set(FilterField, String),
    Reset,
    Show,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "reset" => SessionCommand::Reset,
            "show" => SessionCommand::Show,
            "help" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            _ => {
                let field: FilterField = word
                    .parse()
                    .map_err(|_| CommandError::Unknown(word.to_string()))?;
                if rest.is_empty() {
                    return Err(CommandError::MissingValue(word.to_string()));
                }
                SessionCommand::Set(field, rest.to_string())
            }
        };

        Ok(Some(command))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// An interactive view over a store. The filter state lives exactly as long
/// as the session.
pub struct BrowseSession<'a> {
    store: &'a ProblemStore,
    filter: FilterState,
    options: RenderOptions,
}

impl<'a> BrowseSession<'a> {
    pub fn new(store: &'a ProblemStore, options: RenderOptions) -> Self {
        Self {
            store,
            filter: FilterState::new(),
            options,
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<usize> {
        render_list(out, self.store, &self.filter, &self.options)
    }

    pub fn handle<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> Result<Flow> {
        match command {
            SessionCommand::Set(field, value) => match self.filter.set(field, &value) {
                Ok(()) => {
                    self.render(out)?;
                }
                Err(e) => {
                    tracing::warn!("rejected filter value: {}", e);
                    writeln!(out, "error: {}", e)?;
                }
            },
            SessionCommand::Reset => {
                self.filter.reset();
                self.render(out)?;
            }
            SessionCommand::Show => {
                self.render(out)?;
            }
            SessionCommand::Help => {
                writeln!(out, "{}", HELP)?;
            }
            SessionCommand::Quit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    /// Renders once, then handles one command per input line until `quit` or
    /// end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.render(out)?;

        for line in input.split(b'\n') {
            let line = line?;
            let line = String::from_utf8_lossy(&line);
            if let Cow::Owned(_) = line {
                tracing::warn!("input line is not valid UTF-8");
            }
            let flow = match SessionCommand::parse(&line) {
                Ok(Some(command)) => self.handle(command, out)?,
                Ok(None) => Flow::Continue,
                Err(e) => {
                    writeln!(out, "error: {}", e)?;
                    Flow::Continue
                }
            };
            out.flush()?;

            if flow == Flow::Exit {
                break;
            }
        }

        tracing::debug!("browse session closed with filters {:?}", self.filter());
        Ok(())
    }
}
