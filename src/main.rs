// algoscope: step-by-step algorithm visualizer for the terminal

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use algoscope::catalog::{Catalog, Difficulty};
use algoscope::config::{Cli, Command, Config};
use algoscope::patterns::{difficulty_stats, pattern_stats};
use algoscope::progress::{FileStorage, MemoryStorage, ProgressTracker, ProgressStorage};
use algoscope::session::SessionStore;
use algoscope::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let catalog = Catalog::builtin();

    let config = match Config::from_cli(&cli, catalog) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if let Some(path) = &config.log_file {
        if let Err(e) = algoscope::logging::init(path) {
            eprintln!("Warning: logging disabled: {}", e);
        }
    }
    info!(?config, "starting");

    let storage: Box<dyn ProgressStorage> = match &config.data_dir {
        Some(dir) => Box::new(FileStorage::new(dir)),
        None => Box::new(MemoryStorage::new()),
    };
    let mut progress = ProgressTracker::load(storage);

    match &cli.command {
        Some(Command::List { query, .. }) => {
            let query = query.as_deref().unwrap_or("");
            print_list(catalog, &progress, query, config.difficulty);
            return Ok(());
        }
        Some(Command::Stats) => {
            print_stats(catalog, &progress);
            return Ok(());
        }
        Some(Command::Trace { id, input }) => {
            let Some(algorithm) = catalog.find(id) else {
                eprintln!("Error: unknown algorithm `{}` (try `algoscope list`)", id);
                std::process::exit(2);
            };
            let input = match input {
                Some(text) => serde_json::from_str(text)?,
                None => algorithm.default_input(),
            };
            let steps = algorithm.trace(&input)?;
            println!("{}", serde_json::to_string_pretty(steps.as_slice())?);
            return Ok(());
        }
        Some(Command::Toggle { id }) => {
            let Some(algorithm) = catalog.find(id) else {
                eprintln!("Error: unknown algorithm `{}` (try `algoscope list`)", id);
                std::process::exit(2);
            };
            let solved = progress.toggle(algorithm.id);
            println!(
                "{} {}",
                algorithm.name,
                if solved { "marked solved" } else { "unmarked" }
            );
            return Ok(());
        }
        Some(Command::Reset) => {
            progress.clear();
            println!("Progress cleared");
            return Ok(());
        }
        None => {}
    }

    // Prepare the session before touching the terminal so errors print plainly
    let mut session = SessionStore::new();
    session.set_language(config.language);
    session.set_speed(config.speed)?;
    if let Some(id) = &config.algorithm {
        session.select_algorithm(catalog.find(id))?;
        if let Some(text) = &config.input {
            if let Err(e) = session.set_input_text(text) {
                warn!(error = %e, "start-up input rejected, using default");
                eprintln!("Warning: {}; using the default input", e);
            }
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(catalog, session, progress);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    info!("exiting");
    Ok(())
}

fn print_list(
    catalog: &Catalog,
    progress: &ProgressTracker,
    query: &str,
    difficulty: Option<Difficulty>,
) {
    let entries = catalog.filter(query, difficulty);
    if entries.is_empty() {
        println!("No algorithms match");
        return;
    }
    let mut current = None;
    for algorithm in entries {
        if current != Some(algorithm.category) {
            current = Some(algorithm.category);
            println!(
                "{}",
                catalog
                    .category_name(algorithm.category)
                    .unwrap_or(algorithm.category)
            );
        }
        let mark = if progress.is_solved(algorithm.id) { "✓" } else { " " };
        println!(
            "  [{}] {:<30} {:<6} {:<28} {}",
            mark,
            algorithm.id,
            algorithm.difficulty.label(),
            algorithm.pattern,
            algorithm.time_complexity
        );
    }
}

fn print_stats(catalog: &Catalog, progress: &ProgressTracker) {
    println!(
        "Solved {}/{}",
        progress.solved_count(),
        catalog.len()
    );
    println!();
    for stat in difficulty_stats(catalog, |id| progress.is_solved(id)) {
        println!("  {:<8} {}/{}", stat.difficulty, stat.solved, stat.total);
    }
    println!();
    for stat in pattern_stats(catalog, |id| progress.is_solved(id)) {
        println!("  {:<24} {}/{}", stat.name, stat.solved, stat.total);
    }
}
