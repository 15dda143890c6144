//! Color configuration and cell-code color resolution

use image::Rgba;

use crate::spatial::cell::CellCode;

/// Amount subtracted from each main-color channel when deriving a missing
/// outline color, saturating at zero
pub const OUTLINE_CHANNEL_DROP: u8 = 90;

/// Default main sprite color
pub const DEFAULT_MAIN_COLOR: [u8; 3] = [0, 255, 0];

/// Default background color
pub const DEFAULT_BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];

const TRANSPARENT_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Color options for one sprite generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorConfig {
    /// Main sprite color
    pub main: [u8; 3],
    /// Outline color; derived from the main color when absent
    pub outline: Option<[u8; 3]>,
    /// Background color
    pub background: [u8; 3],
    /// Render the background fully transparent, overriding `background`
    pub transparency: bool,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            main: DEFAULT_MAIN_COLOR,
            outline: None,
            background: DEFAULT_BACKGROUND_COLOR,
            transparency: false,
        }
    }
}

/// Total mapping from cell code to concrete pixel color.
///
/// Used only at rasterization time and resolved once per sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorMap {
    background: Rgba<u8>,
    main: Rgba<u8>,
    outline: Rgba<u8>,
}

impl ColorMap {
    /// Resolve a color configuration into concrete per-code colors.
    ///
    /// A missing outline color is derived from the main color here; the
    /// transparency flag replaces the background color with fully transparent
    /// white regardless of the configured background.
    pub fn resolve(config: &ColorConfig) -> Self {
        let outline = config
            .outline
            .unwrap_or_else(|| derived_outline(config.main));
        let background = if config.transparency {
            TRANSPARENT_BACKGROUND
        } else {
            opaque(config.background)
        };

        Self {
            background,
            main: opaque(config.main),
            outline: opaque(outline),
        }
    }

    /// Pixel color for a cell code
    pub const fn color(&self, code: CellCode) -> Rgba<u8> {
        match code {
            CellCode::Background => self.background,
            CellCode::Alive => self.main,
            CellCode::Outline => self.outline,
        }
    }
}

/// Outline color derived by darkening the main color channel-wise
pub fn derived_outline(main: [u8; 3]) -> [u8; 3] {
    main.map(|channel| channel.saturating_sub(OUTLINE_CHANNEL_DROP))
}

const fn opaque(rgb: [u8; 3]) -> Rgba<u8> {
    Rgba([rgb[0], rgb[1], rgb[2], u8::MAX])
}
