//! Terminal commands

use std::str::FromStr;

/// One line of terminal input. Numbers are 1-based as printed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick the n-th keyword on the main menu
    Pick(usize),
    /// Toggle the n-th sentence while playing
    Toggle(usize),
    ScrollUp,
    ScrollDown,
    Submit,
    Retry,
    Home,
    Reload,
    Rank,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("expected a number from 1, got '{0}'")]
    BadNumber(String),
}

fn parse_number(text: &str) -> Result<usize, ParseCommandError> {
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ParseCommandError::BadNumber(text.to_string())),
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split_whitespace();
        let Some(head) = parts.next() else {
            return Err(ParseCommandError::Empty);
        };
        let arg = parts.next();

        if head.chars().all(|c| c.is_ascii_digit()) {
            return parse_number(head).map(Command::Pick);
        }

        match (head.to_lowercase().as_str(), arg) {
            ("s" | "select", Some(n)) => parse_number(n).map(Command::Toggle),
            ("s" | "select", None) => Err(ParseCommandError::BadNumber(String::new())),
            ("up" | "u", _) => Ok(Command::ScrollUp),
            ("down" | "d", _) => Ok(Command::ScrollDown),
            ("submit", _) => Ok(Command::Submit),
            ("retry", _) => Ok(Command::Retry),
            ("home" | "back", _) => Ok(Command::Home),
            ("reload", _) => Ok(Command::Reload),
            ("rank" | "rankings", _) => Ok(Command::Rank),
            ("help" | "?", _) => Ok(Command::Help),
            ("quit" | "q" | "exit", _) => Ok(Command::Quit),
            (other, _) => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

pub const HELP: &str = "\
commands:
  <n>        pick the n-th keyword
  s <n>      select or deselect sentence n
  up / down  scroll the paragraph
  submit     grade the selection
  retry      keep looking after a partial result
  home       back to the keyword menu
  reload     fetch new keywords
  rank       show the ranking board
  quit       leave the game";
