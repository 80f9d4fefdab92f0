pub mod constants;
pub mod loader;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use loader::{
    apply_colorkey, crop, extract_sprite, extract_tile, load_sheet, load_tile_table,
    load_tile_table_from_path, TileError,
};
pub use types::{SpriteRegion, TileGridSpec, TileTable};
