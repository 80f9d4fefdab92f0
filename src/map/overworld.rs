use super::constants::MAP_WINDOW;
use super::types::RegionIndex;
use crate::entities::Direction;
use crate::screen::ScreenRect;
use crate::tiles::{extract_tile, load_sheet, TileError, TileGridSpec, OVERWORLD_REGIONS};
use bevy::log::info;
use bevy::math::{IVec2, UVec2};
use bevy::prelude::Resource;
use image::{Rgba, RgbaImage};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("region {index} is outside the {columns}x{rows} overworld")]
    OutOfBounds {
        index: RegionIndex,
        columns: u32,
        rows: u32,
    },
    #[error("regions scale to {region}, but the map window is {window}")]
    WindowMismatch { region: UVec2, window: UVec2 },
    #[error(transparent)]
    Tile(#[from] TileError),
}

/// Whatever is drawn behind the player, sampled in screen coordinates
pub trait Background {
    /// Color of the pixel at `point`, or `None` if nothing is drawn there
    fn color_at(&self, point: IVec2) -> Option<Rgba<u8>>;
}

/// The overworld map.
///
/// The whole world image is decoded once; only the region on screen is
/// cropped and scaled, and it is kept until the player walks off an edge.
#[derive(Resource)]
pub struct Overworld {
    world: RgbaImage,
    spec: TileGridSpec,
    bounds: UVec2,
    window: ScreenRect,
    index: RegionIndex,
    region: RgbaImage,
}

impl Overworld {
    pub fn new(
        world: RgbaImage,
        spec: TileGridSpec,
        window: ScreenRect,
        start: RegionIndex,
    ) -> Result<Self, MapError> {
        let region_size = spec.target_size()?;
        if region_size != window.size() {
            return Err(MapError::WindowMismatch {
                region: region_size,
                window: window.size(),
            });
        }
        let bounds = spec.grid_size(UVec2::new(world.width(), world.height()));
        check_bounds(start, bounds)?;
        let region = extract_tile(&world, &spec, start.column as u32, start.row as u32)?;
        info!(
            "Overworld has {}x{} regions, starting at {}",
            bounds.x, bounds.y, start
        );
        Ok(Self {
            world,
            spec,
            bounds,
            window,
            index: start,
            region,
        })
    }

    /// Load the overworld sheet with the standard region layout
    pub fn load<P: AsRef<Path>>(path: P, start: RegionIndex) -> Result<Self, MapError> {
        let world = load_sheet(path)?;
        Self::new(world, OVERWORLD_REGIONS, MAP_WINDOW, start)
    }

    pub fn index(&self) -> RegionIndex {
        self.index
    }

    /// Number of (columns, rows) of regions in the world
    pub fn bounds(&self) -> UVec2 {
        self.bounds
    }

    /// Where the region is drawn on screen
    pub fn window(&self) -> ScreenRect {
        self.window
    }

    /// The scaled region currently on screen
    pub fn current_region(&self) -> &RgbaImage {
        &self.region
    }

    /// Change to the neighbouring region in `direction`.
    ///
    /// Walking off the authored world is rejected and leaves the current
    /// region in place.
    pub fn switch(&mut self, direction: Direction) -> Result<RegionIndex, MapError> {
        let next = self.index.neighbour(direction);
        self.set_index(next)?;
        info!("Switched {:?} to region {}", direction, next);
        Ok(next)
    }

    /// Jump straight to `index`
    pub fn set_index(&mut self, index: RegionIndex) -> Result<(), MapError> {
        check_bounds(index, self.bounds)?;
        self.region = extract_tile(&self.world, &self.spec, index.column as u32, index.row as u32)?;
        self.index = index;
        Ok(())
    }
}

impl Background for Overworld {
    fn color_at(&self, point: IVec2) -> Option<Rgba<u8>> {
        if !self.window.contains_point(point) {
            return None;
        }
        let local = point - self.window.top_left();
        self.region
            .get_pixel_checked(local.x as u32, local.y as u32)
            .copied()
    }
}

fn check_bounds(index: RegionIndex, bounds: UVec2) -> Result<(), MapError> {
    if index.is_within(bounds) {
        Ok(())
    } else {
        Err(MapError::OutOfBounds {
            index,
            columns: bounds.x,
            rows: bounds.y,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use bevy::math::Vec2;

    const REGION: UVec2 = UVec2::new(4, 3);

    pub(crate) fn region_color(column: u32, row: u32) -> Rgba<u8> {
        Rgba([(column * 40) as u8, (row * 40) as u8, 200, 255])
    }

    /// A 3x2 world of 4x3 regions with 1px frames, each region one color
    pub(crate) fn small_world() -> RgbaImage {
        let mut world = RgbaImage::from_pixel(16, 9, Rgba([0, 0, 0, 255]));
        for row in 0..2 {
            for column in 0..3 {
                let x0 = 1 + column * 5;
                let y0 = 1 + row * 4;
                for y in y0..y0 + REGION.y {
                    for x in x0..x0 + REGION.x {
                        world.put_pixel(x, y, region_color(column, row));
                    }
                }
            }
        }
        world
    }

    fn spec(scale: f32) -> TileGridSpec {
        TileGridSpec::new(REGION)
            .with_border(IVec2::ONE)
            .with_scaling(Vec2::splat(scale))
    }

    /// Small overworld drawn in an 8x6 window at (10, 20)
    pub(crate) fn small_overworld(start: RegionIndex) -> Overworld {
        let window = ScreenRect::new(10, 20, 8, 6);
        Overworld::new(small_world(), spec(2.0), window, start).unwrap()
    }

    #[test]
    fn test_bounds_come_from_world_size() {
        let overworld = small_overworld(RegionIndex::new(0, 0));
        assert_eq!(overworld.bounds(), UVec2::new(3, 2));
    }

    #[test]
    fn test_current_region_is_scaled_crop() {
        let overworld = small_overworld(RegionIndex::new(2, 1));
        let region = overworld.current_region();
        assert_eq!(region.dimensions(), (8, 6));
        assert!(region.pixels().all(|p| *p == region_color(2, 1)));
    }

    #[test]
    fn test_switch_moves_one_region() {
        let mut overworld = small_overworld(RegionIndex::new(1, 0));
        assert_eq!(
            overworld.switch(Direction::Right).unwrap(),
            RegionIndex::new(2, 0)
        );
        assert_eq!(
            overworld.switch(Direction::Down).unwrap(),
            RegionIndex::new(2, 1)
        );
        assert_eq!(
            overworld.switch(Direction::Left).unwrap(),
            RegionIndex::new(1, 1)
        );
        assert_eq!(
            overworld.switch(Direction::Up).unwrap(),
            RegionIndex::new(1, 0)
        );
        assert_eq!(*overworld.current_region().get_pixel(0, 0), region_color(1, 0));
    }

    #[test]
    fn test_switch_off_world_edge_is_rejected() {
        let mut overworld = small_overworld(RegionIndex::new(0, 0));
        let result = overworld.switch(Direction::Left);
        assert!(matches!(result, Err(MapError::OutOfBounds { .. })));
        assert_eq!(overworld.index(), RegionIndex::new(0, 0));
        assert_eq!(*overworld.current_region().get_pixel(0, 0), region_color(0, 0));
    }

    #[test]
    fn test_start_outside_world() {
        let window = ScreenRect::new(0, 0, 8, 6);
        let result = Overworld::new(small_world(), spec(2.0), window, RegionIndex::new(3, 0));
        assert!(matches!(result, Err(MapError::OutOfBounds { .. })));
    }

    #[test]
    fn test_window_must_match_region_size() {
        let window = ScreenRect::new(0, 0, 4, 3);
        let result = Overworld::new(small_world(), spec(2.0), window, RegionIndex::new(0, 0));
        assert!(matches!(result, Err(MapError::WindowMismatch { .. })));
    }

    #[test]
    fn test_background_samples_in_screen_space() {
        let overworld = small_overworld(RegionIndex::new(1, 1));
        assert_eq!(overworld.color_at(IVec2::new(10, 20)), Some(region_color(1, 1)));
        assert_eq!(overworld.color_at(IVec2::new(17, 25)), Some(region_color(1, 1)));
        assert_eq!(overworld.color_at(IVec2::new(18, 25)), None);
        assert_eq!(overworld.color_at(IVec2::new(9, 20)), None);
    }

    #[test]
    fn test_standard_layout_matches_map_window() {
        assert_eq!(
            OVERWORLD_REGIONS.target_size().unwrap(),
            MAP_WINDOW.size()
        );
    }
}
