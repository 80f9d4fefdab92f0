use super::loader::TileError;
use bevy::math::{IVec2, UVec2, Vec2};
use image::RgbaImage;

/// Layout of a grid of tiles inside a sprite sheet.
///
/// Each row is laid out as `offset + border + tile + border + ... + tile +
/// border`, and each column the same way vertically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGridSpec {
    /// Size of each tile in the sheet
    pub tile_size: UVec2,
    /// Border around *each* tile in the sheet
    pub border: IVec2,
    /// Initial offset used to find the first tile
    pub offset: IVec2,
    /// Size each tile is scaled to
    pub final_size: Option<UVec2>,
    /// Factor each tile is scaled by
    pub scaling: Option<Vec2>,
    /// Point of the scaled tile whose color becomes transparent
    pub colorkey_location: Option<UVec2>,
}

impl TileGridSpec {
    pub const fn new(tile_size: UVec2) -> Self {
        Self {
            tile_size,
            border: IVec2::ZERO,
            offset: IVec2::ZERO,
            final_size: None,
            scaling: None,
            colorkey_location: None,
        }
    }

    pub const fn with_border(mut self, border: IVec2) -> Self {
        self.border = border;
        self
    }

    pub const fn with_offset(mut self, offset: IVec2) -> Self {
        self.offset = offset;
        self
    }

    pub const fn with_final_size(mut self, final_size: UVec2) -> Self {
        self.final_size = Some(final_size);
        self
    }

    pub const fn with_scaling(mut self, scaling: Vec2) -> Self {
        self.scaling = Some(scaling);
        self
    }

    pub const fn with_colorkey(mut self, location: UVec2) -> Self {
        self.colorkey_location = Some(location);
        self
    }

    /// Size every tile ends up after scaling.
    ///
    /// The final size and the scaling are two ways of saying the same thing,
    /// so giving both is a configuration error.
    pub fn target_size(&self) -> Result<UVec2, TileError> {
        match (self.final_size, self.scaling) {
            (Some(_), Some(_)) => Err(TileError::ConflictingTarget),
            (Some(size), None) => Ok(size),
            (None, Some(scaling)) => Ok(UVec2::new(
                (self.tile_size.x as f32 * scaling.x) as u32,
                (self.tile_size.y as f32 * scaling.y) as u32,
            )),
            (None, None) => Ok(self.tile_size),
        }
    }

    /// Number of whole tiles (columns, rows) in a sheet of `image_size`.
    /// Partial tiles at the right and bottom edges are dropped.
    pub fn grid_size(&self, image_size: UVec2) -> UVec2 {
        UVec2::new(
            count_axis(image_size.x, self.tile_size.x, self.border.x, self.offset.x),
            count_axis(image_size.y, self.tile_size.y, self.border.y, self.offset.y),
        )
    }

    /// Upper left corner of the tile at (col, row) in the sheet
    pub fn tile_upper_left(&self, col: u32, row: u32) -> IVec2 {
        let stride = self.tile_size.as_ivec2() + self.border;
        self.offset + self.border + IVec2::new(col as i32, row as i32) * stride
    }
}

fn count_axis(image: u32, tile: u32, border: i32, offset: i32) -> u32 {
    let available = image as i64 - offset as i64 - border as i64;
    let stride = tile as i64 + border as i64;
    if available <= 0 || stride <= 0 {
        return 0;
    }
    (available / stride) as u32
}

/// An arbitrary rectangle of a sprite sheet, in sheet pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteRegion {
    pub origin: IVec2,
    pub size: UVec2,
}

impl SpriteRegion {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            origin: IVec2::new(x, y),
            size: UVec2::new(width, height),
        }
    }
}

/// Row-major grid of scaled tiles, indexed `[row][col]`
#[derive(Debug, Clone, Default)]
pub struct TileTable {
    rows: Vec<Vec<RgbaImage>>,
}

impl TileTable {
    pub fn new(rows: Vec<Vec<RgbaImage>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&RgbaImage> {
        self.rows.get(row).and_then(|line| line.get(col))
    }

    /// Like `get`, but a missing tile is an error
    pub fn tile(&self, row: usize, col: usize) -> Result<&RgbaImage, TileError> {
        self.get(row, col).ok_or(TileError::MissingTile { row, col })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[RgbaImage]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overworld_tiles() -> TileGridSpec {
        TileGridSpec::new(UVec2::new(16, 16)).with_border(IVec2::ONE)
    }

    fn title_frames() -> TileGridSpec {
        TileGridSpec::new(UVec2::new(256, 240)).with_border(IVec2::splat(3))
    }

    #[test]
    fn test_count_tiles() {
        // Overworld tile sheet: 18 columns and 9 rows of bordered 16x16 tiles
        let grid = overworld_tiles().grid_size(UVec2::new(307, 154));
        assert_eq!(grid, UVec2::new(18, 9));
    }

    #[test]
    fn test_count_tiles_drops_partial_tiles() {
        let grid = overworld_tiles().grid_size(UVec2::new(262, 222));
        assert_eq!(grid, UVec2::new(15, 13));
    }

    #[test]
    fn test_uneven_borders() {
        let grid = title_frames().grid_size(UVec2::new(776, 1000));
        assert_eq!(grid, UVec2::new(2, 4));
    }

    #[test]
    fn test_negative_offset() {
        let grid = title_frames()
            .with_offset(IVec2::splat(-1))
            .grid_size(UVec2::new(776, 1000));
        assert_eq!(grid, UVec2::new(2, 4));
    }

    #[test]
    fn test_sheet_smaller_than_offset() {
        let grid = overworld_tiles()
            .with_offset(IVec2::new(400, 0))
            .grid_size(UVec2::new(307, 154));
        assert_eq!(grid, UVec2::new(0, 9));
    }

    #[test]
    fn test_tile_upper_left() {
        let spec = overworld_tiles();
        assert_eq!(spec.tile_upper_left(0, 0), IVec2::new(1, 1));
        assert_eq!(spec.tile_upper_left(0, 1), IVec2::new(1, 18));
        assert_eq!(spec.tile_upper_left(1, 0), IVec2::new(18, 1));
    }

    #[test]
    fn test_tile_upper_left_non_square() {
        let spec = TileGridSpec::new(UVec2::new(10, 32)).with_border(IVec2::ONE);
        assert_eq!(spec.tile_upper_left(1, 1), IVec2::new(12, 34));
    }

    #[test]
    fn test_tile_upper_left_with_offset() {
        let spec = TileGridSpec::new(UVec2::new(16, 16))
            .with_border(IVec2::splat(3))
            .with_offset(IVec2::new(-1, -2));
        assert_eq!(spec.tile_upper_left(0, 0), IVec2::new(2, 1));

        let waterfall = TileGridSpec::new(UVec2::new(32, 59))
            .with_border(IVec2::new(6, 0))
            .with_offset(IVec2::new(340, 514));
        assert_eq!(waterfall.tile_upper_left(0, 0), IVec2::new(346, 514));
    }

    #[test]
    fn test_target_size() {
        let spec = TileGridSpec::new(UVec2::new(16, 16));
        assert_eq!(spec.target_size().unwrap(), UVec2::new(16, 16));
        assert_eq!(
            spec.with_scaling(Vec2::splat(3.0)).target_size().unwrap(),
            UVec2::new(48, 48)
        );
        assert_eq!(
            spec.with_final_size(UVec2::new(20, 10)).target_size().unwrap(),
            UVec2::new(20, 10)
        );
    }

    #[test]
    fn test_both_final_size_and_scaling_together() {
        let spec = TileGridSpec::new(UVec2::new(16, 16))
            .with_final_size(UVec2::new(48, 48))
            .with_scaling(Vec2::splat(3.0));
        assert!(matches!(spec.target_size(), Err(TileError::ConflictingTarget)));
    }

    #[test]
    fn test_tile_table_lookup() {
        let table = TileTable::new(vec![
            vec![RgbaImage::new(1, 1), RgbaImage::new(2, 2)],
            vec![RgbaImage::new(3, 3), RgbaImage::new(4, 4)],
        ]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.col_count(), 2);
        assert_eq!(table.tile(1, 0).unwrap().width(), 3);
        assert!(matches!(
            table.tile(2, 0),
            Err(TileError::MissingTile { row: 2, col: 0 })
        ));
    }
}
