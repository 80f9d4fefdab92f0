use crate::config::{
    PLAYER_MOVE_DOWN_VELOCITY, PLAYER_MOVE_LEFT_VELOCITY, PLAYER_MOVE_RIGHT_VELOCITY,
    PLAYER_MOVE_UP_VELOCITY,
};
use bevy::math::IVec2;

/// Compass direction an entity faces or moves in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// One step in this direction on screen (y grows downward)
    pub fn offset(&self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    /// Configured player velocity when walking this way
    pub fn velocity(&self) -> IVec2 {
        match self {
            Direction::Up => PLAYER_MOVE_UP_VELOCITY,
            Direction::Down => PLAYER_MOVE_DOWN_VELOCITY,
            Direction::Left => PLAYER_MOVE_LEFT_VELOCITY,
            Direction::Right => PLAYER_MOVE_RIGHT_VELOCITY,
        }
    }

    /// Index into per-direction frame tables
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Which of the two walking frames is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    First,
    Second,
}

impl Step {
    pub fn toggled(self) -> Self {
        match self {
            Step::First => Step::Second,
            Step::Second => Step::First,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}
