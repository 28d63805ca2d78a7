use anyhow::{Context, Result};
use asciidraw::backend::{GridSurface, SurfaceError, TerminalSurface};
use asciidraw::diagnostics::Diagnostics;
use asciidraw::Config;
use asciidraw::interpreter::{DEMO_SCRIPT, Flow, Interpreter, Settings};
use clap::{ArgAction, Parser};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "asciidraw")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("ASCIIDRAW_GIT_HASH"), ")"),
    about = "Interactive ASCII-art drawing engine for the terminal"
)]
struct Cli {
    /// Run the built-in demonstration scenario, then wait for a key
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "batch")]
    demo: bool,

    /// Read commands from FILE (or stdin) and print the final grid
    #[arg(long, value_name = "FILE")]
    batch: Option<Option<PathBuf>>,

    /// Column count of the batch grid (overrides the config file)
    #[arg(long, value_name = "N", requires = "batch")]
    width: Option<u32>,

    /// Use this config file instead of ~/.config/asciidraw/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_config_path()?,
        };
        Config::create_default_file(&path)?;
        println!("Created default config at {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(source) = cli.batch {
        let width = cli.width.unwrap_or(config.batch.width);
        return run_batch(&config, source, width);
    }

    run_terminal(&config, cli.demo)
}

/// Interactive session on the controlling terminal.
///
/// Diagnostics are held back until the terminal has been restored.
fn run_terminal(config: &Config, demo: bool) -> Result<()> {
    let surface = TerminalSurface::new(config.status_row())?;
    let mut interpreter =
        Interpreter::new(surface, Settings::from_config(config), Diagnostics::new());

    let result = if demo {
        log::info!("Running demo scenario");
        run_demo(&mut interpreter)
    } else {
        interpreter.run()
    };

    let (surface, mut diagnostics) = interpreter.into_parts();
    drop(surface);
    diagnostics.flush();

    result.context("Drawing session failed")
}

fn run_demo(interpreter: &mut Interpreter<TerminalSurface>) -> Result<(), SurfaceError> {
    if interpreter.run_script(DEMO_SCRIPT)? == Flow::Quit {
        return Ok(());
    }
    interpreter.acknowledge("Demo finished, press any key to exit")?;
    interpreter.quit().map(|_| ())
}

/// Renders commands from `source` (stdin when `None`) onto an in-memory grid.
fn run_batch(config: &Config, source: Option<PathBuf>, width: u32) -> Result<()> {
    let input = match &source {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read commands from {}", path.display()))?,
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read commands from stdin")?;
            input
        }
    };

    let columns = usize::try_from(width.clamp(3, 1000)).unwrap_or(80);
    let rows = usize::from(config.status_row()) + 1;
    let surface = GridSurface::new(columns, rows).with_input(input.lines());
    let mut interpreter =
        Interpreter::new(surface, Settings::from_config(config), Diagnostics::new());

    let result = interpreter.run();
    let (surface, mut diagnostics) = interpreter.into_parts();
    diagnostics.flush();
    result.context("Batch session failed")?;

    for warning in surface.warnings() {
        eprintln!("warning: {warning}");
    }
    print!("{surface}");
    Ok(())
}
