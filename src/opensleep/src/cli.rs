use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{self:?}")]
pub enum CommandError {
    EmptyLine,
    UnknownCommand(String),
    MissingArgument(&'static str),
    TrailingInput(String),
    InvalidDate(String),
    InvalidTime(String),
}

/// One line of user input at the prompt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Add {
        date: NaiveDate,
        bedtime: NaiveTime,
        wake_time: NaiveTime,
    },
    List,
    Report,
    Clear,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(keyword) = words.next() else {
            return Err(CommandError::EmptyLine);
        };

        let command = match keyword {
            "add" => {
                let date = parse_date(next_arg(&mut words, "date")?)?;
                let bedtime = parse_time(next_arg(&mut words, "bedtime")?)?;
                let wake_time = parse_time(next_arg(&mut words, "wake time")?)?;
                Command::Add {
                    date,
                    bedtime,
                    wake_time,
                }
            }
            "list" | "ls" => Command::List,
            "report" | "analysis" => Command::Report,
            "clear" => Command::Clear,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_owned())),
        };

        if let Some(extra) = words.next() {
            return Err(CommandError::TrailingInput(extra.to_owned()));
        }

        Ok(command)
    }
}

fn next_arg<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<&'a str, CommandError> {
    words.next().ok_or(CommandError::MissingArgument(name))
}

fn parse_date(word: &str) -> Result<NaiveDate, CommandError> {
    word.parse()
        .map_err(|_| CommandError::InvalidDate(word.to_owned()))
}

fn parse_time(word: &str) -> Result<NaiveTime, CommandError> {
    NaiveTime::parse_from_str(word, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(word, "%H:%M:%S"))
        .map_err(|_| CommandError::InvalidTime(word.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_date_and_times() {
        let command: Command = "add 2026-08-27 23:00 07:30".parse().unwrap();
        assert_eq!(
            command,
            Command::Add {
                date: NaiveDate::from_ymd_opt(2026, 8, 27).unwrap(),
                bedtime: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
                wake_time: NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
            }
        );
    }

    #[test]
    fn parses_bare_commands_and_aliases() {
        assert_eq!("list".parse::<Command>().unwrap(), Command::List);
        assert_eq!("ls".parse::<Command>().unwrap(), Command::List);
        assert_eq!("analysis".parse::<Command>().unwrap(), Command::Report);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("?".parse::<Command>().unwrap(), Command::Help);
    }

    #[test]
    fn rejects_unknown_keyword() {
        assert!(matches!(
            "export".parse::<Command>(),
            Err(CommandError::UnknownCommand(word)) if word == "export"
        ));
    }

    #[test]
    fn rejects_blank_line() {
        assert!(matches!(
            "   ".parse::<Command>(),
            Err(CommandError::EmptyLine)
        ));
    }

    #[test]
    fn rejects_missing_argument() {
        assert!(matches!(
            "add 2026-08-27 23:00".parse::<Command>(),
            Err(CommandError::MissingArgument("wake time"))
        ));
    }

    #[test]
    fn rejects_bad_date_and_time() {
        assert!(matches!(
            "add yesterday 23:00 07:00".parse::<Command>(),
            Err(CommandError::InvalidDate(_))
        ));
        assert!(matches!(
            "add 2026-08-27 25:00 07:00".parse::<Command>(),
            Err(CommandError::InvalidTime(_))
        ));
    }

    #[test]
    fn rejects_trailing_input() {
        assert!(matches!(
            "clear now".parse::<Command>(),
            Err(CommandError::TrailingInput(word)) if word == "now"
        ));
    }
}
