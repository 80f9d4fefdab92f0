//! Loads and scales tiles from a sprite sheet.

use super::types::{SpriteRegion, TileGridSpec, TileTable};
use bevy::log::debug;
use bevy::math::{IVec2, UVec2, Vec2};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::path::Path;
use thiserror::Error;

/// Error type for tile loading operations
#[derive(Debug, Error)]
pub enum TileError {
    #[error("final tile size and tile scaling cannot both be specified in the same call")]
    ConflictingTarget,
    #[error("failed to decode sprite sheet: {0}")]
    Image(#[from] image::ImageError),
    #[error("region at {origin} sized {size} lies outside the {sheet_size} sheet")]
    TileOutOfBounds {
        origin: IVec2,
        size: UVec2,
        sheet_size: UVec2,
    },
    #[error("colorkey location {location} lies outside the {size} tile")]
    ColorkeyOutOfBounds { location: UVec2, size: UVec2 },
    #[error("no tile at row {row}, column {col}")]
    MissingTile { row: usize, col: usize },
}

/// Decode a sprite sheet from disk
pub fn load_sheet<P: AsRef<Path>>(path: P) -> Result<RgbaImage, TileError> {
    let sheet = image::open(path.as_ref())?.to_rgba8();
    debug!(
        "Decoded sheet {} ({}x{})",
        path.as_ref().display(),
        sheet.width(),
        sheet.height()
    );
    Ok(sheet)
}

/// Slice a decoded sheet into a table of scaled tiles
pub fn load_tile_table(sheet: &RgbaImage, spec: &TileGridSpec) -> Result<TileTable, TileError> {
    let target = spec.target_size()?;
    let grid = spec.grid_size(UVec2::new(sheet.width(), sheet.height()));

    let mut rows = Vec::with_capacity(grid.y as usize);
    for row in 0..grid.y {
        let mut line = Vec::with_capacity(grid.x as usize);
        for col in 0..grid.x {
            line.push(slice_tile(sheet, spec, target, col, row)?);
        }
        rows.push(line);
    }
    Ok(TileTable::new(rows))
}

/// Decode a sheet and slice it. The spec is validated before touching the
/// file.
pub fn load_tile_table_from_path<P: AsRef<Path>>(
    path: P,
    spec: &TileGridSpec,
) -> Result<TileTable, TileError> {
    spec.target_size()?;
    let sheet = load_sheet(path)?;
    load_tile_table(&sheet, spec)
}

/// Extract a single tile of the grid without slicing the rest of the sheet
pub fn extract_tile(
    sheet: &RgbaImage,
    spec: &TileGridSpec,
    col: u32,
    row: u32,
) -> Result<RgbaImage, TileError> {
    let target = spec.target_size()?;
    slice_tile(sheet, spec, target, col, row)
}

/// Extract a free-standing sprite that doesn't sit on a regular grid.
///
/// The colorkey is sampled before flipping, so the location refers to the
/// sprite as it appears in the sheet.
pub fn extract_sprite(
    sheet: &RgbaImage,
    region: SpriteRegion,
    scaling: Vec2,
    colorkey_location: Option<UVec2>,
    flip_horizontal: bool,
) -> Result<RgbaImage, TileError> {
    let spec = TileGridSpec::new(region.size).with_scaling(scaling);
    let target = spec.target_size()?;
    let mut sprite = scale(crop(sheet, region.origin, region.size)?, target);
    if let Some(location) = colorkey_location {
        apply_colorkey(&mut sprite, location)?;
    }
    if flip_horizontal {
        sprite = imageops::flip_horizontal(&sprite);
    }
    Ok(sprite)
}

/// Copy a rectangle out of the sheet, failing if any of it lies outside
pub fn crop(sheet: &RgbaImage, origin: IVec2, size: UVec2) -> Result<RgbaImage, TileError> {
    let sheet_size = UVec2::new(sheet.width(), sheet.height());
    let end = origin.as_i64vec2() + size.as_i64vec2();
    if origin.x < 0
        || origin.y < 0
        || end.x > sheet_size.x as i64
        || end.y > sheet_size.y as i64
    {
        return Err(TileError::TileOutOfBounds {
            origin,
            size,
            sheet_size,
        });
    }
    Ok(imageops::crop_imm(sheet, origin.x as u32, origin.y as u32, size.x, size.y).to_image())
}

/// Make every pixel with the same color as the one at `location` transparent
pub fn apply_colorkey(tile: &mut RgbaImage, location: UVec2) -> Result<(), TileError> {
    let Some(key) = tile.get_pixel_checked(location.x, location.y).copied() else {
        return Err(TileError::ColorkeyOutOfBounds {
            location,
            size: UVec2::new(tile.width(), tile.height()),
        });
    };
    for pixel in tile.pixels_mut() {
        if pixel.0[..3] == key.0[..3] {
            pixel.0[3] = 0;
        }
    }
    Ok(())
}

fn slice_tile(
    sheet: &RgbaImage,
    spec: &TileGridSpec,
    target: UVec2,
    col: u32,
    row: u32,
) -> Result<RgbaImage, TileError> {
    let origin = spec.tile_upper_left(col, row);
    let mut tile = scale(crop(sheet, origin, spec.tile_size)?, target);
    if let Some(location) = spec.colorkey_location {
        apply_colorkey(&mut tile, location)?;
    }
    Ok(tile)
}

fn scale(tile: RgbaImage, target: UVec2) -> RgbaImage {
    if tile.width() == target.x && tile.height() == target.y {
        return tile;
    }
    imageops::resize(&tile, target.x, target.y, FilterType::Nearest)
}
