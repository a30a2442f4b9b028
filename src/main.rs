use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use pixelboard::{Config, InputState, script};
use serde_json::json;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pixelboard")]
#[command(
    version,
    about = "Headless driver for a multi-frame, multi-layer pixel-art editor"
)]
struct Cli {
    /// Config file to use instead of ~/.config/pixelboard/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Canvas width in pixels (overrides the config file)
    #[arg(long, value_name = "PIXELS")]
    width: Option<usize>,

    /// Canvas height in pixels (overrides the config file)
    #[arg(long, value_name = "PIXELS")]
    height: Option<usize>,

    /// Print the effective configuration as TOML and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_config: bool,

    /// Skip malformed script lines instead of stopping at the first one
    #[arg(long, short = 'k', action = ArgAction::SetTrue)]
    keep_going: bool,

    /// Include the preview panel projection in the output
    #[arg(long, action = ArgAction::SetTrue)]
    preview: bool,

    /// JSON-lines script to run (reads stdin when omitted or "-")
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<Config> {
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
    if cli.width.is_some() || cli.height.is_some() {
        config.validate_and_clamp();
    }

    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let mut state = InputState::from_config(&config);
    log::info!(
        "Editing {}x{} document (history depth {})",
        config.canvas.width,
        config.canvas.height,
        config.history.max_depth
    );

    let report = match cli.script.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            script::run(BufReader::new(file), &mut state, cli.keep_going)?
        }
        _ => script::run(io::stdin().lock(), &mut state, cli.keep_going)?,
    };
    log::info!(
        "Ran {} steps ({} effective, {} skipped)",
        report.steps,
        report.effective,
        report.skipped
    );

    let document = state.document();
    let engine = state.engine();
    let mut output = json!({
        "frames": document.frame_count(),
        "current_frame": document.current_frame_index(),
        "current_layer": document.current_layer_id(),
        "tool": document.current_tool(),
        "color": document.current_color(),
        "palette": document.palette(),
        "undo_depth": engine.history().undo_depth(),
        "redo_depth": engine.history().redo_depth(),
        "projection": state.projection(),
    });
    if cli.preview {
        output["preview"] = serde_json::to_value(state.preview_projection())?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
