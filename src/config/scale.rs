//! Scaling between original NES coordinates and game screen coordinates.
//!
//! Game code talks in NES values where tiles are 16x16 and the screen is
//! 256x240. Everything on screen is `TILE_SCALING` times that size.
//!
//! ```text
//!        x
//!    +------->
//!    |
//!  y |
//!    |
//!    v
//! ```

use super::constants::TILE_SCALING;
use bevy::math::{IVec2, Vec2};

/// Convert an NES coordinate to a game screen coordinate
pub fn coordinates(nes: IVec2) -> IVec2 {
    scale_by(nes, TILE_SCALING)
}

/// Multiply each axis by `scaling`, truncating toward zero
pub fn scale_by(value: IVec2, scaling: Vec2) -> IVec2 {
    IVec2::new(
        (value.x as f32 * scaling.x) as i32,
        (value.y as f32 * scaling.y) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        assert_eq!(coordinates(IVec2::ZERO), IVec2::ZERO);
    }

    #[test]
    fn test_far_corner() {
        assert_eq!(coordinates(IVec2::new(256, 240)), IVec2::new(256 * 3, 240 * 3));
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(
            coordinates(IVec2::new(-100, -200)),
            IVec2::new(-100 * 3, -200 * 3)
        );
    }

    #[test]
    fn test_off_screen() {
        assert_eq!(
            coordinates(IVec2::new(1234, 5678)),
            IVec2::new(1234 * 3, 5678 * 3)
        );
    }

    #[test]
    fn test_fractional_scaling_truncates() {
        assert_eq!(scale_by(IVec2::new(5, -5), Vec2::splat(1.5)), IVec2::new(7, -7));
    }
}
