use crate::entities::Direction;
use bevy::math::{IVec2, UVec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which region of the overworld is on screen, as (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionIndex {
    pub column: i32,
    pub row: i32,
}

impl RegionIndex {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// The neighbouring region in `direction`
    pub fn neighbour(&self, direction: Direction) -> Self {
        Self::from(IVec2::from(*self) + direction.offset())
    }

    /// True if the index falls inside a world `bounds` regions across
    pub fn is_within(&self, bounds: UVec2) -> bool {
        self.column >= 0
            && self.row >= 0
            && (self.column as u32) < bounds.x
            && (self.row as u32) < bounds.y
    }
}

impl fmt::Display for RegionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

impl From<(i32, i32)> for RegionIndex {
    fn from((column, row): (i32, i32)) -> Self {
        Self::new(column, row)
    }
}

impl From<IVec2> for RegionIndex {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<RegionIndex> for IVec2 {
    fn from(index: RegionIndex) -> Self {
        IVec2::new(index.column, index.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours() {
        let start = RegionIndex::new(7, 7);
        assert_eq!(start.neighbour(Direction::Right), RegionIndex::new(8, 7));
        assert_eq!(start.neighbour(Direction::Left), RegionIndex::new(6, 7));
        assert_eq!(start.neighbour(Direction::Down), RegionIndex::new(7, 8));
        assert_eq!(start.neighbour(Direction::Up), RegionIndex::new(7, 6));
    }

    #[test]
    fn test_is_within() {
        let bounds = UVec2::new(16, 8);
        assert!(RegionIndex::new(0, 0).is_within(bounds));
        assert!(RegionIndex::new(15, 7).is_within(bounds));
        assert!(!RegionIndex::new(16, 7).is_within(bounds));
        assert!(!RegionIndex::new(3, -1).is_within(bounds));
    }
}
