use crate::utils::error::{CourseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SIMPLE_PART: &str = "simple";
pub const AIMED_PART: &str = "aimed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Down,
    Up,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Down => "down",
            Direction::Up => "up",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One parsed `<direction> <amount>` instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub direction: Direction,
    pub amount: u32,
}

impl Command {
    pub fn new(direction: Direction, amount: u32) -> Self {
        Self { direction, amount }
    }

    pub fn magnitude(&self) -> i64 {
        i64::from(self.amount)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.amount)
    }
}

/// A raw input line together with its 1-based position in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseLine {
    pub number: usize,
    pub text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub horizontal: i64,
    pub depth: i64,
}

impl Position {
    /// `None` when the product does not fit in an `i64`.
    pub fn product(&self) -> Option<i64> {
        self.horizontal.checked_mul(self.depth)
    }
}

/// Final positions of one course; the products are computed once, on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseReport {
    pub commands: usize,
    pub simple: Position,
    pub aimed: Position,
    simple_product: i64,
    aimed_product: i64,
}

impl CourseReport {
    pub fn new(commands: usize, simple: Position, aimed: Position) -> Result<Self> {
        let simple_product = simple
            .product()
            .ok_or(CourseError::ArithmeticOverflow { part: SIMPLE_PART })?;
        let aimed_product = aimed
            .product()
            .ok_or(CourseError::ArithmeticOverflow { part: AIMED_PART })?;

        Ok(Self {
            commands,
            simple,
            aimed,
            simple_product,
            aimed_product,
        })
    }

    pub fn simple_product(&self) -> i64 {
        self.simple_product
    }

    pub fn aimed_product(&self) -> i64 {
        self.aimed_product
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Plain,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Plain => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_products() {
        let report = CourseReport::new(
            6,
            Position {
                horizontal: 15,
                depth: 10,
            },
            Position {
                horizontal: 15,
                depth: 60,
            },
        )
        .unwrap();

        assert_eq!(report.simple_product(), 150);
        assert_eq!(report.aimed_product(), 900);
    }

    #[test]
    fn test_report_rejects_overflowing_product() {
        let huge = Position {
            horizontal: 2,
            depth: i64::MAX,
        };
        assert_eq!(huge.product(), None);

        let result = CourseReport::new(3, Position::default(), huge);
        assert!(matches!(
            result,
            Err(CourseError::ArithmeticOverflow { part: AIMED_PART })
        ));
    }
}
