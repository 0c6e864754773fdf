// main.rs
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hydrodrive::Config;
use hydrodrive::core::rules::Difficulty;

#[derive(Debug, Parser)]
#[command(name = "hydrodrive", version, about = "Reach the point target before your fuel runs out")]
struct Args {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for station placement and wall unlocks
    #[arg(long)]
    seed: Option<u64>,

    /// Authored maze file (# wall, . path, H station)
    #[arg(long)]
    maze: Option<PathBuf>,

    /// Skip the difficulty menu
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Directory holding textures and sounds
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Disable sound and music
    #[arg(long)]
    mute: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<Config> {
        let mut cfg = match &self.config {
            Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
            None => Config::default(),
        };
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if self.maze.is_some() {
            cfg.maze = self.maze;
        }
        if self.difficulty.is_some() {
            cfg.difficulty = self.difficulty;
        }
        if self.assets.is_some() {
            cfg.assets = self.assets;
        }
        if self.mute {
            cfg.audio.enabled = false;
        }
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = Args::parse().into_config()?;
    info!(seed = ?cfg.seed, maze = ?cfg.maze, "HydroDrive starting");

    if let Err(e) = hydrodrive::app::run(&cfg) {
        error!(error = %e, "startup failed");
        return Err(e).context("running game");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_every_flag_has_help() {
        let cmd = Args::command();
        for arg in cmd.get_arguments().filter(|a| a.get_long().is_some()) {
            assert!(arg.get_help().is_some(), "--{} has no help text", arg.get_id());
        }
    }

    #[test]
    fn test_mute_overrides_config() {
        let args = Args::parse_from(["hydrodrive", "--mute", "--seed", "3"]);
        let cfg = args.into_config().unwrap();
        assert!(!cfg.audio.enabled);
        assert_eq!(cfg.seed, Some(3));
    }
}
