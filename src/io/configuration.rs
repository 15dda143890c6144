//! Runtime configuration defaults for the command-line tool

/// Default number of sprites generated per run
pub const DEFAULT_SPRITE_COUNT: usize = 1;

/// Default integer upscale factor applied at export time
pub const DEFAULT_SCALE: u32 = 1;

// Safety limit to prevent excessive memory allocation
/// Maximum accepted upscale factor
pub const MAX_SCALE: u32 = 256;

/// Number of random ASCII letters in generated sprite filenames
pub const FILENAME_LENGTH: usize = 16;

/// File extension for exported sprites
pub const SPRITE_EXTENSION: &str = "png";
