use crate::domain::model::{Command, Direction, Position, AIMED_PART};
use crate::utils::error::{CourseError, Result};

/// Running state for the aim-based interpretation, where `down`/`up` steer
/// and `forward` dives along the current aim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub horizontal: i64,
    pub aim: i64,
    pub depth: i64,
}

impl NavigationState {
    /// Applies one command; on overflow the state is left untouched.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        let overflow = || CourseError::ArithmeticOverflow { part: AIMED_PART };
        let amount = command.magnitude();

        match command.direction {
            Direction::Forward => {
                let horizontal = self.horizontal.checked_add(amount).ok_or_else(overflow)?;
                let depth = self
                    .aim
                    .checked_mul(amount)
                    .and_then(|dive| self.depth.checked_add(dive))
                    .ok_or_else(overflow)?;
                self.horizontal = horizontal;
                self.depth = depth;
            }
            Direction::Down => self.aim = self.aim.checked_add(amount).ok_or_else(overflow)?,
            Direction::Up => self.aim = self.aim.checked_sub(amount).ok_or_else(overflow)?,
        }
        Ok(())
    }

    pub fn position(&self) -> Position {
        Position {
            horizontal: self.horizontal,
            depth: self.depth,
        }
    }
}

pub fn aimed_course(commands: &[Command]) -> Result<Position> {
    let mut state = NavigationState::default();
    for command in commands {
        state.apply(*command)?;
    }
    Ok(state.position())
}
