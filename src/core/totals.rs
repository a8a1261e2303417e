use crate::domain::model::{Command, Direction, Position, SIMPLE_PART};
use crate::utils::error::{CourseError, Result};

/// Sum of magnitudes per direction across a whole course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionTotals {
    pub forward: i64,
    pub down: i64,
    pub up: i64,
}

impl DirectionTotals {
    pub fn from_commands(commands: &[Command]) -> Result<Self> {
        commands.iter().try_fold(Self::default(), |mut totals, command| {
            let total = match command.direction {
                Direction::Forward => &mut totals.forward,
                Direction::Down => &mut totals.down,
                Direction::Up => &mut totals.up,
            };
            *total = total
                .checked_add(command.magnitude())
                .ok_or(CourseError::ArithmeticOverflow { part: SIMPLE_PART })?;
            Ok(totals)
        })
    }

    pub fn position(&self) -> Position {
        // Both totals are non-negative, so the difference always fits.
        Position {
            horizontal: self.forward,
            depth: self.down - self.up,
        }
    }
}

/// Position when `down`/`up` move depth directly.
pub fn simple_course(commands: &[Command]) -> Result<Position> {
    Ok(DirectionTotals::from_commands(commands)?.position())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(direction: Direction, amount: u32) -> Command {
        Command::new(direction, amount)
    }

    fn sample_course() -> Vec<Command> {
        vec![
            cmd(Direction::Forward, 5),
            cmd(Direction::Down, 5),
            cmd(Direction::Forward, 8),
            cmd(Direction::Up, 3),
            cmd(Direction::Down, 8),
            cmd(Direction::Forward, 2),
        ]
    }

    #[test]
    fn test_sample_course() {
        let totals = DirectionTotals::from_commands(&sample_course()).unwrap();
        assert_eq!(
            totals,
            DirectionTotals {
                forward: 15,
                down: 13,
                up: 3
            }
        );

        let position = simple_course(&sample_course()).unwrap();
        assert_eq!(position.horizontal, 15);
        assert_eq!(position.depth, 10);
        assert_eq!(position.product(), Some(150));
    }

    #[test]
    fn test_order_does_not_matter() {
        let course = sample_course();
        let expected = simple_course(&course).unwrap();

        let mut reversed = course.clone();
        reversed.reverse();
        assert_eq!(simple_course(&reversed).unwrap(), expected);

        for shift in 1..course.len() {
            let mut rotated = course.clone();
            rotated.rotate_left(shift);
            assert_eq!(simple_course(&rotated).unwrap(), expected);
        }
    }

    #[test]
    fn test_empty_course() {
        let position = simple_course(&[]).unwrap();
        assert_eq!(position, Position::default());
        assert_eq!(position.product(), Some(0));
    }

    #[test]
    fn test_forward_only() {
        let position =
            simple_course(&[cmd(Direction::Forward, 4), cmd(Direction::Forward, 9)]).unwrap();
        assert_eq!(position.horizontal, 13);
        assert_eq!(position.product(), Some(0));
    }

    #[test]
    fn test_up_and_down_only() {
        let position = simple_course(&[cmd(Direction::Down, 3), cmd(Direction::Down, 4)]).unwrap();
        assert_eq!(position, Position { horizontal: 0, depth: 7 });

        let position = simple_course(&[
            cmd(Direction::Down, 10),
            cmd(Direction::Up, 4),
            cmd(Direction::Forward, 6),
        ])
        .unwrap();
        assert_eq!(position, Position { horizontal: 6, depth: 6 });
        assert_eq!(position.product(), Some(36));
    }

    #[test]
    fn test_depth_can_go_negative() {
        let position = simple_course(&[cmd(Direction::Forward, 2), cmd(Direction::Up, 5)]).unwrap();
        assert_eq!(position.depth, -5);
        assert_eq!(position.product(), Some(-10));
    }

    #[test]
    fn test_max_amounts() {
        let course = [
            cmd(Direction::Forward, u32::MAX),
            cmd(Direction::Forward, u32::MAX),
            cmd(Direction::Down, u32::MAX),
            cmd(Direction::Up, u32::MAX),
        ];

        let position = simple_course(&course).unwrap();
        assert_eq!(position.horizontal, 2 * i64::from(u32::MAX));
        assert_eq!(position.depth, 0);
        assert_eq!(position.product(), Some(0));
    }
}
