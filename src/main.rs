use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, trace, warn};

use events_view::config::{ColorMode, ViewConfig};
use events_view::event::Event;
use events_view::style;
use events_view::view::{EventsView, Session};

#[derive(Parser)]
#[command(name = "events-view", about = "Render session events to the console.")]
struct Cli {
    /// JSON-lines event file (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Config file (defaults to .events-view/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// When to style output
    #[arg(long, value_enum)]
    color: Option<ColorMode>,

    /// Refresh the session after every event
    #[arg(long)]
    refresh: bool,
}

/// Console session: nothing to redraw beyond the appended line.
struct ConsoleSession;

impl Session for ConsoleSession {
    fn refresh(&self) {
        trace!("session refresh");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("events_view=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ViewConfig::from_path(path)?,
        None => ViewConfig::load(),
    };
    if let Some(color) = cli.color {
        config.color = color;
    }
    config.refresh |= cli.refresh;

    let reader: Box<dyn AsyncBufRead + Unpin> = match &cli.input {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    let stdout = std::io::stdout();
    let styler = style::for_mode(config.color, stdout.is_tty());
    let mut view = EventsView::new(stdout, ConsoleSession, styler, &config);

    let source = cli
        .input
        .as_ref()
        .map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
    info!("events-view reading {source}");

    let mut rendered = 0usize;
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Event>(line) {
            Ok(event) => {
                view.render(&event, config.refresh);
                rendered += 1;
            }
            Err(e) => warn!("skipping malformed event: {e}"),
        }
    }

    info!("rendered {rendered} events");
    Ok(())
}
