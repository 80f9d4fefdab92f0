use super::SaveGame;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;
use thiserror::Error;

/// Magic number for save files ("LINK" in ASCII)
const MAGIC_NUMBER: [u8; 4] = [b'L', b'I', b'N', b'K'];

/// Current save file format version
const VERSION: u16 = 1;

/// Error type for save file operations
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid magic number")]
    InvalidMagicNumber,
    #[error("Invalid version: {0}")]
    InvalidVersion(u16),
    #[error("Payload of {0} bytes is too large")]
    PayloadTooLarge(usize),
    #[error("Checksum mismatch")]
    InvalidChecksum,
    #[error("Encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Save a game to disk.
///
/// Layout: magic, version (u16), payload length (u32), bincode payload,
/// CRC32 of the payload. All integers little-endian.
pub fn save_game<P: AsRef<Path>>(save: &SaveGame, path: P) -> Result<(), SaveError> {
    // Ensure directory exists
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = bincode::serialize(save)?;
    let length = u32::try_from(payload.len()).map_err(|_| SaveError::PayloadTooLarge(payload.len()))?;

    let mut file = File::create(path)?;

    // Write header
    file.write_all(&MAGIC_NUMBER)?;
    file.write_all(&VERSION.to_le_bytes())?;
    file.write_all(&length.to_le_bytes())?;

    file.write_all(&payload)?;

    let checksum = crc32fast::hash(&payload);
    file.write_all(&checksum.to_le_bytes())?;

    file.sync_all()?;
    Ok(())
}

/// Load a game from disk
pub fn load_save_game<P: AsRef<Path>>(path: P) -> Result<SaveGame, SaveError> {
    let mut file = File::open(path)?;

    // Read and verify magic number
    let mut magic = [0u8; 4];
    file.read_exact(&mut magic)?;
    if magic != MAGIC_NUMBER {
        return Err(SaveError::InvalidMagicNumber);
    }

    // Read and verify version
    let mut version_bytes = [0u8; 2];
    file.read_exact(&mut version_bytes)?;
    let version = u16::from_le_bytes(version_bytes);
    if version != VERSION {
        return Err(SaveError::InvalidVersion(version));
    }

    let mut length_bytes = [0u8; 4];
    file.read_exact(&mut length_bytes)?;
    let length = u32::from_le_bytes(length_bytes) as usize;

    let mut payload = Vec::new();
    std::io::Read::by_ref(&mut file).take(length as u64).read_to_end(&mut payload)?;
    if payload.len() != length {
        return Err(SaveError::Io(io::ErrorKind::UnexpectedEof.into()));
    }

    // Read and verify checksum
    let mut checksum_bytes = [0u8; 4];
    file.read_exact(&mut checksum_bytes)?;
    let expected_checksum = u32::from_le_bytes(checksum_bytes);
    if crc32fast::hash(&payload) != expected_checksum {
        return Err(SaveError::InvalidChecksum);
    }

    Ok(bincode::deserialize(&payload)?)
}

/// Check if a save file exists
pub fn save_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// Delete a save file
pub fn delete_save_game<P: AsRef<Path>>(path: P) -> Result<(), io::Error> {
    fs::remove_file(path)
}
