//! Script commands, one per line.
//!
//! ```text
//! # comments and blank lines are skipped
//! click counter-btn
//! type fullname Jane Doe
//! key text-input Enter
//! move hover-box 120 80
//! wait 150
//! show counter-btn
//! ```

use std::time::Duration;

use pagedom::{Key, KeyParseError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Click(String),
    Enter(String),
    Leave(String),
    Move { target: String, x: f64, y: f64 },
    /// Replace the field value and raise `input`.
    Type { target: String, text: String },
    Key { target: String, key: Key },
    Blur(String),
    /// Set a checkbox and raise `input`.
    Check { target: String, checked: bool },
    Submit(String),
    Flash { target: String, message: String },
    Animate { target: String, name: Option<String> },
    Wait(Duration),
    /// Print one element, or the whole page.
    Show(Option<String>),
    /// Print the signup form's validation report.
    Validate,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command}: unexpected argument '{extra}'")]
    UnexpectedArgument { command: &'static str, extra: String },

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error(transparent)]
    InvalidKey(#[from] KeyParseError),
}

/// Split off the first whitespace-separated word.
fn next_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    let end = input.find(char::is_whitespace).unwrap_or(input.len());
    Some((&input[..end], &input[end..]))
}

struct Args<'a> {
    command: &'static str,
    rest: &'a str,
}

impl<'a> Args<'a> {
    fn word(&mut self, argument: &'static str) -> Result<&'a str, CommandError> {
        let (word, rest) = next_word(self.rest).ok_or(CommandError::MissingArgument {
            command: self.command,
            argument,
        })?;
        self.rest = rest;
        Ok(word)
    }

    fn optional_word(&mut self) -> Option<&'a str> {
        let (word, rest) = next_word(self.rest)?;
        self.rest = rest;
        Some(word)
    }

    fn number<T: std::str::FromStr>(&mut self, argument: &'static str) -> Result<T, CommandError> {
        let word = self.word(argument)?;
        word.parse()
            .map_err(|_| CommandError::InvalidNumber(word.to_string()))
    }

    /// Everything left on the line, with the separating space removed.
    fn remainder(&mut self) -> String {
        let text = self.rest.strip_prefix(char::is_whitespace).unwrap_or(self.rest);
        self.rest = "";
        text.to_string()
    }

    fn finish(self) -> Result<(), CommandError> {
        match next_word(self.rest) {
            Some((extra, _)) => Err(CommandError::UnexpectedArgument {
                command: self.command,
                extra: extra.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Parse one script line. Blank lines and `#` comments give `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some((name, rest)) = next_word(line) else {
        return Ok(None);
    };
    if name.starts_with('#') {
        return Ok(None);
    }

    let command: &'static str = match name {
        "click" => "click",
        "enter" => "enter",
        "leave" => "leave",
        "move" => "move",
        "type" => "type",
        "key" => "key",
        "blur" => "blur",
        "check" => "check",
        "uncheck" => "uncheck",
        "submit" => "submit",
        "flash" => "flash",
        "animate" => "animate",
        "wait" => "wait",
        "show" => "show",
        "validate" => "validate",
        "quit" | "exit" => "quit",
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    let mut args = Args { command, rest };

    let parsed = match command {
        "click" => Command::Click(args.word("element")?.to_string()),
        "enter" => Command::Enter(args.word("element")?.to_string()),
        "leave" => Command::Leave(args.word("element")?.to_string()),
        "move" => Command::Move {
            target: args.word("element")?.to_string(),
            x: args.number("x")?,
            y: args.number("y")?,
        },
        "type" => Command::Type {
            target: args.word("element")?.to_string(),
            text: args.remainder(),
        },
        "key" => Command::Key {
            target: args.word("element")?.to_string(),
            key: args.word("key")?.parse()?,
        },
        "blur" => Command::Blur(args.word("element")?.to_string()),
        "check" | "uncheck" => Command::Check {
            target: args.word("element")?.to_string(),
            checked: command == "check",
        },
        "submit" => Command::Submit(args.word("form")?.to_string()),
        "flash" => {
            let target = args.word("element")?.to_string();
            let message = args.remainder();
            if message.is_empty() {
                return Err(CommandError::MissingArgument {
                    command,
                    argument: "message",
                });
            }
            Command::Flash { target, message }
        }
        "animate" => Command::Animate {
            target: args.word("element")?.to_string(),
            name: args.optional_word().map(str::to_string),
        },
        "wait" => Command::Wait(Duration::from_millis(args.number("milliseconds")?)),
        "show" => Command::Show(args.optional_word().map(str::to_string)),
        "validate" => Command::Validate,
        _ => Command::Quit,
    };

    args.finish()?;
    Ok(Some(parsed))
}
