use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// What a single fighter's controls are doing this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FighterInput {
    pub left: bool,
    pub right: bool,
    /// The movement key pressed most recently.
    pub last_direction: Option<Direction>,
    /// Jump was pressed since the previous tick.
    pub jump: bool,
    /// Attack was pressed since the previous tick.
    pub attack: Option<VariantName>,
}

impl FighterInput {
    /// The direction to run in: the last pressed movement key, if it is still held.
    pub fn movement(&self) -> Option<Direction> {
        match self.last_direction? {
            Direction::Left if self.left => Some(Direction::Left),
            Direction::Right if self.right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Immutable view of both fighters' controls for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub fighters: [FighterInput; 2],
}

impl InputSnapshot {
    pub fn get(&self, fighter: FighterId) -> &FighterInput {
        &self.fighters[fighter.index()]
    }
}
