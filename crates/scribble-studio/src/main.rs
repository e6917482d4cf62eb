use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use scribble_engine::logging::{LoggingConfig, init_logging};
use scribble_pad::Application;

/// Freehand drawing canvas.
///
/// Keys: Q/Esc quit, Z cycle background, H toggle shadows, O load, S save,
/// U/Backspace undo, C/Delete clear. The mouse wheel changes ink thickness.
#[derive(Debug, Parser)]
#[command(name = "scribble", version, about)]
struct Args {
    /// Document used by load and save (`.canvas` is added on save if missing).
    #[arg(value_name = "FILE", conflicts_with = "file")]
    path: Option<PathBuf>,

    /// Same as the positional FILE.
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Load FILE at startup.
    #[arg(long)]
    open: bool,

    /// Show only the gradient backdrop; no drawing.
    #[arg(long)]
    backdrop_only: bool,

    /// Window title.
    #[arg(long, default_value = "Canvas")]
    title: String,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Log filter in env_logger syntax; overrides RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..LoggingConfig::default()
    });

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("scribble: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut app = if args.backdrop_only {
        Application::backdrop_only()
    } else {
        Application::new()
    };

    app = app
        .title(args.title)
        .size(args.width, args.height)
        .open_on_start(args.open);

    match args.path.or(args.file) {
        Some(path) => app = app.document_path(path),
        None if args.open => log::warn!("--open given without a FILE; starting empty"),
        None => {}
    }

    app.run().context("canvas window failed")
}
