//! PNG export with integer upscaling and random filenames

use image::RgbaImage;
use image::imageops::{self, FilterType};
use rand::Rng;
use std::path::Path;

use crate::io::configuration::{FILENAME_LENGTH, SPRITE_EXTENSION};
use crate::io::error::{Result, SpriteError};

/// Generate a random sprite filename of ASCII letters with the PNG extension
pub fn random_sprite_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let stem: String = (0..FILENAME_LENGTH)
        .map(|_| random_ascii_letter(rng))
        .collect();
    format!("{stem}.{SPRITE_EXTENSION}")
}

// Uniform over A-Z then a-z
fn random_ascii_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    let index = rng.random_range(0..52u8);
    let byte = if index < 26 {
        b'A' + index
    } else {
        b'a' + (index - 26)
    };
    char::from(byte)
}

/// Save a sprite to disk as PNG, upscaling with nearest-neighbor filtering.
///
/// A scale of 1 writes the native buffer untouched; larger scales multiply
/// both dimensions so cells stay crisp squares. Missing parent directories
/// are created.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be written.
pub fn export_sprite_png(sprite: &RgbaImage, scale: u32, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| SpriteError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    let save_result = if scale > 1 {
        let scaled = imageops::resize(
            sprite,
            sprite.width() * scale,
            sprite.height() * scale,
            FilterType::Nearest,
        );
        scaled.save(path)
    } else {
        sprite.save(path)
    };

    save_result.map_err(|e| SpriteError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
