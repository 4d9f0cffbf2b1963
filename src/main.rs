//! Point Snake entry point
//!
//! Parses the command line, loads settings and runs the chosen scene.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use point_snake::settings::DEFAULT_SETTINGS_PATH;
use point_snake::{SceneKind, Settings, app};

#[derive(Parser, Debug)]
#[command(name = "point-snake", version, about = "Point snake and friends")]
struct Cli {
    /// Which program to run
    #[arg(long, value_enum, default_value_t = SceneKind::Snake)]
    scene: SceneKind,

    /// JSON settings file (missing file means defaults)
    #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
    settings: PathBuf,

    /// RNG seed for enemy respawns, overrides the settings file
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.settings)?;
    let seed = cli.seed.or(settings.seed).unwrap_or_else(rand::random);

    log::info!(
        "Point Snake starting: scene={} seed={}",
        cli.scene.as_str(),
        seed
    );
    app::run(settings, cli.scene, seed)
}
