//! Command-line interface for generating sprite batches

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;

use crate::generator::pipeline::generate_sprite;
use crate::io::configuration::{DEFAULT_SCALE, DEFAULT_SPRITE_COUNT, MAX_SCALE};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::{export_sprite_png, random_sprite_name};
use crate::io::progress::ProgressManager;
use crate::raster::palette::{ColorConfig, DEFAULT_BACKGROUND_COLOR, DEFAULT_MAIN_COLOR};

#[derive(Parser)]
#[command(name = "cellsprite")]
#[command(
    author,
    version,
    about = "Generate symmetric pixel-art sprites from cellular automaton noise"
)]
/// Command-line arguments for the sprite generation tool
pub struct Cli {
    /// Main color of the sprite as R G B channel values
    #[arg(short, long, num_args = 3, value_names = ["R", "G", "B"], default_values_t = DEFAULT_MAIN_COLOR)]
    pub color: Vec<u8>,

    /// Color of the sprite's outline; darkened main color when omitted
    #[arg(short, long, num_args = 3, value_names = ["R", "G", "B"])]
    pub outline: Option<Vec<u8>>,

    /// Color of the background
    #[arg(short, long, num_args = 3, value_names = ["R", "G", "B"], default_values_t = DEFAULT_BACKGROUND_COLOR)]
    pub background: Vec<u8>,

    /// Use a transparent background
    #[arg(short, long)]
    pub transparency: bool,

    /// Number of sprites to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_SPRITE_COUNT)]
    pub count: usize,

    /// Integer upscale factor applied when saving
    #[arg(short = 'x', long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Directory where sprites are written
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Resolve the parsed color arguments into a color configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a color argument does not hold exactly three
    /// channel values.
    pub fn color_config(&self) -> Result<ColorConfig> {
        let outline = self
            .outline
            .as_deref()
            .map(|values| rgb_channels("outline", values))
            .transpose()?;

        Ok(ColorConfig {
            main: rgb_channels("color", &self.color)?,
            outline,
            background: rgb_channels("background", &self.background)?,
            transparency: self.transparency,
        })
    }
}

fn rgb_channels(parameter: &'static str, values: &[u8]) -> Result<[u8; 3]> {
    match *values {
        [r, g, b] => Ok([r, g, b]),
        _ => Err(invalid_parameter(
            parameter,
            &format!("{values:?}"),
            &"expected exactly three 8-bit channel values",
        )),
    }
}

/// Orchestrates batch sprite generation with progress tracking
pub struct SpriteBatch {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl SpriteBatch {
    /// Create a new batch runner from CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.count));

        Self { cli, progress }
    }

    /// Generate and save the requested sprites
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter fails validation or a sprite cannot be
    /// written to disk.
    pub fn run(&mut self) -> Result<()> {
        self.validate()?;
        let colors = self.cli.color_config()?;

        let mut rng = self
            .cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        for _ in 0..self.cli.count {
            let sprite = generate_sprite(&mut rng, &colors);
            let output_path = self.cli.directory.join(random_sprite_name(&mut rng));
            export_sprite_png(&sprite, self.cli.scale, &output_path)?;

            if let Some(ref progress) = self.progress {
                progress.complete_sprite();
            }
        }

        if let Some(ref progress) = self.progress {
            progress.finish();
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"at least one sprite must be generated",
            ));
        }

        if self.cli.scale == 0 || self.cli.scale > MAX_SCALE {
            return Err(invalid_parameter(
                "scale",
                &self.cli.scale,
                &format!("scale must be between 1 and {MAX_SCALE}"),
            ));
        }

        Ok(())
    }
}
