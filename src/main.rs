use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use sketchpad::draw::Canvas;
use sketchpad::{Config, SketchState, export, script};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SKETCHPAD_GIT_HASH"), ")"),
    about = "Replay sketchpad pointer scripts and render them to PNG"
)]
struct Cli {
    /// Event script to replay ("-" reads stdin)
    #[arg(long, short = 's', value_name = "FILE")]
    script: PathBuf,

    /// Output PNG path (defaults to a timestamped file in the export directory)
    #[arg(long, short = 'o', value_name = "PNG")]
    output: Option<PathBuf>,

    /// Config file (defaults to ~/.config/sketchpad/config.toml)
    #[arg(long, short = 'c', value_name = "TOML")]
    config: Option<PathBuf>,

    /// Export scale factor, overriding the config value
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=8))]
    scale: Option<u32>,

    /// Write the live frame (with tool preview) instead of the content-only export
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "scale")]
    live: bool,

    /// Also write the committed drawables as JSON
    #[arg(long, value_name = "FILE")]
    scene_json: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let source = read_script(&cli.script)?;
    let commands = script::parse_script(&source)
        .with_context(|| format!("Invalid script {}", cli.script.display()))?;

    let mut state = SketchState::from_config(&config);
    state.subscribe(|change| log::trace!("Surface change: {change:?}"));

    let mut canvas = Canvas::new(config.canvas.width as i32, config.canvas.height as i32)
        .context("Failed to create canvas surface")?;
    let mut redraws = 0usize;

    for command in std::iter::once(None).chain(commands.iter().map(Some)) {
        if let Some(command) = command {
            command.apply(&mut state);
        }
        if state.needs_redraw {
            canvas.redraw(&state)?;
            state.needs_redraw = false;
            redraws += 1;
        }
    }

    log::info!(
        "Replayed {} commands ({} redraws, {} drawables)",
        commands.len(),
        redraws,
        state.drawables().len()
    );

    let output = match cli.output {
        Some(path) => path,
        None => export::default_output_path(&config.export)?,
    };

    if cli.live {
        export::write_png(canvas.surface(), &output)?;
    } else {
        let scale = cli.scale.unwrap_or(config.export.scale);
        let image = Canvas::export(&state, scale).context("Failed to render export")?;
        export::write_png(&image, &output)?;
    }

    if let Some(path) = &cli.scene_json {
        export::write_scene_json(state.drawables(), path)?;
    }

    println!("{}", output.display());
    Ok(())
}

fn read_script(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read script from stdin")?;
        return Ok(source);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script from {}", path.display()))
}
