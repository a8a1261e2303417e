use crate::domain::model::{Command, CourseLine, Direction};
use crate::utils::error::{CourseError, ParseError, Result};
use std::str::FromStr;

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(label: &str) -> std::result::Result<Self, Self::Err> {
        match label {
            "forward" => Ok(Direction::Forward),
            "down" => Ok(Direction::Down),
            "up" => Ok(Direction::Up),
            other => Err(ParseError::UnknownDirection {
                direction: other.to_string(),
            }),
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let (Some(label), Some(amount), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(ParseError::MalformedLine {
                content: line.to_string(),
            });
        };

        let direction = label.parse::<Direction>()?;
        Ok(Command::new(direction, parse_magnitude(amount)?))
    }
}

// `u32::from_str` accepts a leading `+`; only bare digits are valid here.
fn parse_magnitude(token: &str) -> std::result::Result<u32, ParseError> {
    let invalid = || ParseError::InvalidMagnitude {
        amount: token.to_string(),
    };

    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    token.parse::<u32>().map_err(|_| invalid())
}

/// Parses every line, aborting on the first one that fails.
pub fn parse_course(lines: &[CourseLine]) -> Result<Vec<Command>> {
    lines
        .iter()
        .map(|line| {
            line.text
                .parse::<Command>()
                .map_err(|source| CourseError::Parse {
                    line: line.number,
                    source,
                })
        })
        .collect()
}
