//! CLI entry point for the cellular automaton sprite generator

use cellsprite::io::cli::{Cli, SpriteBatch};
use clap::Parser;

fn main() -> cellsprite::Result<()> {
    let cli = Cli::parse();
    let mut batch = SpriteBatch::new(cli);
    batch.run()
}
