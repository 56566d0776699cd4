//! Line commands understood by the interactive todo session.

use crate::types::{TodoAction, TodoId};
use thiserror::Error;

/// Usage text printed by `help`
pub const HELP: &str = "\
Commands:
  add <title>          add a todo
  edit <id> <title>    change a todo's title (alias: modify)
  rm <id>              remove a todo (aliases: remove, delete)
  list                 show all todos (alias: ls)
  json                 print the current snapshot as JSON
  help                 show this help
  quit                 leave (alias: exit)";

/// A parsed input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Change the list
    Action(TodoAction),
    /// Print the list
    List,
    /// Print the current snapshot as JSON
    Json,
    /// Print usage
    Help,
    /// End the session
    Quit,
}

/// Why an input line could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command
    #[error("Unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    /// A required argument is absent
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        /// Command as typed
        command: String,
        /// Description of the missing argument
        argument: &'static str,
    },

    /// The todo id is not a non-negative integer
    #[error("Invalid todo id `{0}`")]
    InvalidId(String),
}

impl Command {
    /// Parses one input line
    ///
    /// Returns `Ok(None)` for a blank line. A missing title is passed through
    /// as an empty one, so the store reports it like any blank title.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] for unknown commands, missing ids and
    /// ids that are not numbers.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = split_word(line);

        let command = match verb.to_lowercase().as_str() {
            "add" => Self::Action(TodoAction::add(rest)),
            "edit" | "modify" => {
                let (id, title) = split_word(rest);
                Self::Action(TodoAction::modify(parse_id(verb, id)?, title))
            }
            "rm" | "remove" | "delete" => {
                let (id, _) = split_word(rest);
                Self::Action(TodoAction::remove(parse_id(verb, id)?))
            }
            "list" | "ls" => Self::List,
            "json" => Self::Json,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::UnknownCommand(verb.to_string())),
        };

        Ok(Some(command))
    }
}

/// Splits off the first whitespace-delimited word
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn parse_id(command: &str, raw: &str) -> Result<TodoId, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingArgument {
            command: command.to_string(),
            argument: "a todo id",
        });
    }

    raw.parse()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}
