//! CLI infrastructure for the self-play driver
//!
//! Running without arguments plays one perfect game and prints every position.

pub mod config;
pub mod output;

use std::{io::Write, path::Path};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::tictactoe::{Game, GameRecord};
pub use config::PlayConfig;

#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version, about = "Plays a perfect game of Tic-Tac-Toe against itself", long_about = None)]
pub struct PlayArgs {
    /// Print debug logs (candidate scores for every move) to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the finished game as JSON
    #[arg(long)]
    pub export: Option<std::path::PathBuf>,
}

impl From<PlayArgs> for PlayConfig {
    fn from(args: PlayArgs) -> Self {
        PlayConfig {
            verbose: args.verbose,
            export: args.export,
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the config's level.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &PlayConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

/// Play one game, rendering every position to `out`.
pub fn run<W: Write>(config: &PlayConfig, out: &mut W) -> Result<Game> {
    let game = Game::new()
        .play_out(|game| {
            output::write_board(&mut *out, &game.board).map_err(|source| crate::Error::Io {
                operation: "write board".to_string(),
                source,
            })
        })
        .context("self-play failed")?;

    if let Some(path) = &config.export {
        export_record(&game.record(), path)?;
        info!(path = %path.display(), "exported game record");
    }

    Ok(game)
}

/// Write a game record as pretty-printed JSON
pub fn export_record(record: &GameRecord, path: &Path) -> crate::Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    std::fs::write(path, json).map_err(|source| crate::Error::Io {
        operation: format!("write game record to {}", path.display()),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_convert_to_config() {
        let args = PlayArgs::parse_from(["tictactoe", "--verbose", "--export", "game.json"]);
        let config = PlayConfig::from(args);
        assert!(config.verbose);
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.export.as_deref(), Some(Path::new("game.json")));
    }

    #[test]
    fn test_no_arguments_is_the_default_config() {
        let args = PlayArgs::parse_from(["tictactoe"]);
        assert_eq!(PlayConfig::from(args), PlayConfig::default());
    }

    #[test]
    fn test_run_prints_every_position() {
        let mut out = Vec::new();
        let game = run(&PlayConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        // seven template lines plus a blank line per position
        assert_eq!(text.lines().count(), 8 * (game.plies.len() + 1));
    }

    #[test]
    fn test_init_logging_reports_a_second_install() {
        let config = PlayConfig::default();
        // the first install may race other tests in this binary; the second never succeeds
        init_logging(&config).ok();
        let err = init_logging(&config).unwrap_err();
        assert!(err.to_string().contains("log subscriber"));
    }

    #[test]
    fn test_failed_write_carries_the_operation() {
        struct BrokenPipe;

        impl Write for BrokenPipe {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = run(&PlayConfig::default(), &mut BrokenPipe).unwrap_err();
        let source = err.downcast_ref::<crate::Error>().unwrap();
        assert!(matches!(
            source,
            crate::Error::Io { operation, .. } if operation == "write board"
        ));
    }
}
