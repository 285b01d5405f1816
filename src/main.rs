use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::info;

use worldcup_geo::app::App;
use worldcup_geo::config::{Cli, Commands};
use worldcup_geo::map::MapRenderer;
use worldcup_geo::{data, logging, ui, QueryService, ResultsStore};

fn main() -> Result<ExitCode> {
    let cli = Cli::load();
    let command = cli.command_or_default();

    // The dashboard owns the terminal, so it logs to a file
    match &command {
        Commands::Dashboard => logging::init_file(&cli.log_file)?,
        _ => logging::init_stderr()?,
    }

    // Embedded table; a bad table aborts before anything is shown
    let store = ResultsStore::load().context("embedded results table is invalid")?;
    info!(finals = store.total_finals(), "results loaded");
    let queries = QueryService::new(&store);

    match command {
        Commands::Dashboard => {
            let renderer = load_map(&cli)?;
            run_dashboard(&store, renderer)?;
        }
        // Lookups print the neutral message on a miss and exit non-zero
        Commands::Wins { country: Some(country) } => {
            println!("{}", queries.describe_wins(&country));
            if queries.wins_for(&country).is_err() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Wins { country: None } => {
            for row in store.map_dataset() {
                println!("{:<16} {}", row.country, row.wins);
            }
        }
        Commands::Final { year } => {
            println!("{}", queries.describe_final(year));
            if queries.result_for(year).is_err() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Years => {
            for year in store.all_years() {
                println!("{year}");
            }
        }
        Commands::Countries => {
            for country in store.all_countries() {
                println!("{country}");
            }
        }
        Commands::MapData { pretty } => {
            let rows = store.map_dataset();
            let json = if pretty {
                serde_json::to_string_pretty(&rows)?
            } else {
                serde_json::to_string(&rows)?
            };
            println!("{json}");
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Natural Earth data when present, built-in outlines otherwise
fn load_map(cli: &Cli) -> Result<MapRenderer> {
    let mut renderer = MapRenderer::new();
    if cli.data_dir.exists() {
        data::load_all_geojson(&mut renderer, &cli.data_dir)?;
    }
    if !renderer.has_data() {
        info!(dir = %cli.data_dir.display(), "no country shapes found, using built-in outlines");
        data::generate_simple_world(&mut renderer);
    }
    Ok(renderer)
}

/// Set up the terminal, run the dashboard, restore the terminal
fn run_dashboard(store: &ResultsStore, renderer: MapRenderer) -> Result<()> {
    // Initialize terminal
    let mut terminal = ratatui::init();
    terminal.clear()?;

    // Enable mouse capture
    execute!(std::io::stdout(), EnableMouseCapture)?;

    // Run the app
    let result = run(&mut terminal, store, renderer);

    // Disable mouse capture and restore terminal
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

/// Main loop: draw, then dispatch at most one event per frame
fn run(terminal: &mut DefaultTerminal, store: &ResultsStore, renderer: MapRenderer) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(store, renderer, size.width, size.height);

    loop {
        // Draw
        terminal.draw(|frame| ui::render(frame, &app))?;

        // ~60fps poll
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                // Only handle key press events (not release)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key),
                Event::Mouse(mouse) => app.on_mouse(mouse),
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
        }

        if app.should_quit {
            info!("dashboard closed");
            break;
        }
    }

    Ok(())
}
