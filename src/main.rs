use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use strokepad::Config;
use strokepad::draw::CanvasSurface;
use strokepad::replay::{Script, ScriptRunner};

#[derive(Parser, Debug)]
#[command(name = "strokepad")]
#[command(version, about = "Replay drawing gestures on a headless canvas")]
struct Cli {
    /// Gesture script to replay (TOML, one [[step]] table per host action)
    #[arg(value_name = "SCRIPT", required_unless_present = "init_config")]
    script: Option<PathBuf>,

    /// Write a documented default config to ~/.config/strokepad/config.toml and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,

    /// Config file to use instead of ~/.config/strokepad/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Canvas width in pixels (overrides the config)
    #[arg(long, value_name = "W")]
    width: Option<f64>,

    /// Canvas height in pixels (overrides the config)
    #[arg(long, value_name = "H")]
    height: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created {}", path.display());
        return Ok(());
    }
    let script_path = cli.script.context("No gesture script given")?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    // Command-line overrides go through the same range checks as the file.
    config.validate_and_clamp();

    let script = Script::load(&script_path)?;
    log::info!(
        "Replaying {} step(s) on a {}x{} canvas",
        script.steps.len(),
        config.canvas.width,
        config.canvas.height
    );

    let canvas = CanvasSurface::new(config.canvas.width, config.canvas.height);
    let mut runner = ScriptRunner::new(canvas, config.to_settings());
    runner
        .run(&script)
        .with_context(|| format!("Failed to replay {}", script_path.display()))?;

    let committed = runner.committed();
    log::info!("{} primitive(s) committed", committed.len());
    println!(
        "{}",
        serde_json::to_string_pretty(&committed).context("Failed to serialize primitives")?
    );
    Ok(())
}
