mod audio;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use controller::AppController;
use model::{AppModel, CatalogClient, DEFAULT_SEARCH_TERM, DEFAULT_VOLUME};
use view::AppView;

#[derive(Parser, Debug)]
#[command(name = "trackpeek", about = "Search the iTunes catalog and play track previews")]
struct Args {
    /// Initial search term
    #[arg(long, default_value = DEFAULT_SEARCH_TERM)]
    term: String,

    /// Initial volume, 0.0 to 1.0
    #[arg(long, default_value_t = DEFAULT_VOLUME)]
    volume: f32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!(term = %args.term, volume = args.volume, "=== trackpeek starting ===");

    let model = Arc::new(AppModel::new(args.term, args.volume));
    let catalog = CatalogClient::new()?;
    let player = audio::spawn_player(args.volume.clamp(0.0, 1.0));

    let controller = AppController::new(model.clone(), catalog, player.clone());

    // Initial fetch for the default term; runs in the background while
    // the UI comes up with the loading placeholder.
    controller.refresh_results().await;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    player.shutdown();

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("trackpeek shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<AppModel>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        let snapshot = model.snapshot().await;

        terminal.draw(|f| {
            AppView::render(f, &snapshot);
        })?;

        // Short poll so background fetch results show up promptly.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let _ = controller.handle_key_event(key).await;
            }
        }

        if model.should_quit().await {
            break;
        }
    }

    Ok(())
}
