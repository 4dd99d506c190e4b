//! The six axis-aligned directions of a y-up grid.

use crate::vector::Int3;
use std::fmt;

/// One of the six axis-aligned unit directions. `Up` is positive y, `South`
/// is positive z and `East` is positive x.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::Down,
        Self::North,
        Self::South,
        Self::East,
        Self::West,
    ];

    /// The unit offset one step in this direction.
    pub const fn offset(self) -> Int3 {
        match self {
            Self::Up => Int3::new(0, 1, 0),
            Self::Down => Int3::new(0, -1, 0),
            Self::North => Int3::new(0, 0, -1),
            Self::South => Int3::new(0, 0, 1),
            Self::East => Int3::new(1, 0, 0),
            Self::West => Int3::new(-1, 0, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

impl From<Direction> for Int3 {
    fn from(direction: Direction) -> Self {
        direction.offset()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let offset = self.offset();
        write!(
            f,
            "Direction{{offsetX={}, offsetY={}, offsetZ={}}}",
            offset.x(),
            offset.y(),
            offset.z()
        )
    }
}
