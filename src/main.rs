mod age;
mod config;
mod display;
mod logging;
mod preview;
mod render;
mod task;

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing::{debug, info};

use crate::display::{DisplayPort, HtmlFileDisplay, StdoutDisplay};
use crate::task::TaskId;

/// Render a Telegram chat preview for a daily speech-development task.
#[derive(Debug, Parser)]
#[command(name = "tgpreview", version, about)]
struct Cli {
    /// Id of the task to preview
    task_id: String,

    /// Task data file, searched in the order given; overrides configured sources
    #[arg(short, long = "source", value_name = "FILE")]
    sources: Vec<PathBuf>,

    /// Write the preview page here instead of the configured path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the bare markup fragment to stdout instead of writing a page
    #[arg(long)]
    stdout: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = config::load_config();
    let config = loaded.config;

    // A broken log setup shouldn't stop a preview from rendering
    let _log_guard = match logging::init(&config.logging.level) {
        Ok(ctx) => {
            debug!(
                session_id = %ctx.session_id,
                log_dir = %ctx.log_directory.display(),
                "logging_ready"
            );
            logging::cleanup_old_logs(&ctx.log_directory);
            Some(ctx)
        }
        Err(e) => {
            eprintln!("Warning: failed to initialize logging: {}", e);
            None
        }
    };

    debug!(
        config_path = %loaded.config_path.display(),
        status = ?loaded.status,
        "config_loaded"
    );

    let source_paths = if cli.sources.is_empty() {
        config.source_paths()
    } else {
        cli.sources.clone()
    };
    let sources = task::load_sources(&source_paths);

    let id = TaskId::from(cli.task_id.as_str());
    let resolved = task::resolve_task(&id, &sources);
    let model = preview::build_preview_model(&resolved, Local::now().time());
    let markup = render::render_preview(&model);

    if cli.stdout {
        StdoutDisplay.show_markup(&config.output.container, &markup)?;
    } else {
        let path = cli.output.unwrap_or_else(|| config.output_path());
        let mut display = HtmlFileDisplay::new(path);
        display.show_markup(&config.output.container, &markup)?;
        println!("Preview written to {}", display.path().display());
    }

    info!(id = %id, "preview_rendered");
    Ok(())
}
