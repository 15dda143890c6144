//! Validates color resolution and grid rasterization

use cellsprite::raster::palette::{
    ColorConfig, ColorMap, DEFAULT_BACKGROUND_COLOR, DEFAULT_MAIN_COLOR, derived_outline,
};
use cellsprite::raster::rasterize::rasterize;
use cellsprite::spatial::{CellCode, SpriteGrid};
use image::Rgba;

#[test]
fn test_default_color_config() {
    let config = ColorConfig::default();

    assert_eq!(config.main, DEFAULT_MAIN_COLOR);
    assert_eq!(config.background, DEFAULT_BACKGROUND_COLOR);
    assert_eq!(config.outline, None);
    assert!(!config.transparency);
}

#[test]
fn test_outline_derivation_saturates_at_zero() {
    assert_eq!(derived_outline([10, 20, 30]), [0, 0, 0]);
    assert_eq!(derived_outline([100, 200, 50]), [10, 110, 0]);
    assert_eq!(derived_outline([255, 255, 255]), [165, 165, 165]);
}

#[test]
fn test_resolve_derives_missing_outline_from_main() {
    let config = ColorConfig::default();
    let colors = ColorMap::resolve(&config);

    assert_eq!(colors.color(CellCode::Outline), Rgba([0, 165, 0, 255]));
}

#[test]
fn test_resolve_uses_explicit_outline_color() {
    let config = ColorConfig {
        outline: Some([7, 8, 9]),
        ..ColorConfig::default()
    };
    let colors = ColorMap::resolve(&config);

    assert_eq!(colors.color(CellCode::Outline), Rgba([7, 8, 9, 255]));
}

#[test]
fn test_transparency_overrides_background_color() {
    let config = ColorConfig {
        background: [12, 34, 56],
        transparency: true,
        ..ColorConfig::default()
    };
    let colors = ColorMap::resolve(&config);

    assert_eq!(colors.color(CellCode::Background), Rgba([255, 255, 255, 0]));
}

#[test]
fn test_rasterize_maps_each_cell_to_its_color() {
    let grid = SpriteGrid::from_rows(&[
        &[CellCode::Background, CellCode::Alive],
        &[CellCode::Outline, CellCode::Alive],
    ]);
    let config = ColorConfig {
        main: [1, 2, 3],
        outline: Some([4, 5, 6]),
        background: [7, 8, 9],
        transparency: false,
    };
    let sprite = rasterize(&grid, &ColorMap::resolve(&config));

    assert_eq!(sprite.dimensions(), (2, 2));
    assert_eq!(sprite.get_pixel(0, 0), &Rgba([7, 8, 9, 255]));
    assert_eq!(sprite.get_pixel(1, 0), &Rgba([1, 2, 3, 255]));
    assert_eq!(sprite.get_pixel(0, 1), &Rgba([4, 5, 6, 255]));
    assert_eq!(sprite.get_pixel(1, 1), &Rgba([1, 2, 3, 255]));
}

#[test]
fn test_transparent_background_rasterizes_to_zero_alpha() {
    let grid = SpriteGrid::filled(3, 4, CellCode::Background);
    let config = ColorConfig {
        background: [200, 100, 50],
        transparency: true,
        ..ColorConfig::default()
    };
    let sprite = rasterize(&grid, &ColorMap::resolve(&config));

    for pixel in sprite.pixels() {
        assert_eq!(pixel.0[3], 0);
    }
}
