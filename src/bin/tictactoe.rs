//! Tic-Tac-Toe self-play
//!
//! Plays one game in which both sides use exhaustive minimax and prints the
//! board after every ply.

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use tictactoe_minimax::cli::{self, PlayArgs, PlayConfig};

fn main() -> Result<()> {
    let config = PlayConfig::from(PlayArgs::parse());
    cli::init_logging(&config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    cli::run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
