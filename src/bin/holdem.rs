use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use holdem_sim::config::TableConfig;
use holdem_sim::knowledge::Knowledge;
use holdem_sim::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::error::Error;
use std::fs::File;
use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Play Hold'em against odds bots in the terminal.
#[derive(Parser, Debug)]
#[command(name = "holdem-tui", version)]
struct Args {
    /// Seats at the table (2-10)
    #[arg(short, long, default_value = "2")]
    players: usize,

    /// Your seat, counted from 1
    #[arg(long, default_value = "2")]
    seat: usize,

    /// Knowledge table the bots bid from
    #[arg(short, long)]
    knowledge: Option<PathBuf>,

    /// Ante each seat posts per deal
    #[arg(short, long, default_value = "10")]
    ante: u64,

    /// Shuffle seed; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// The terminal is taken over, so logs only go to a file.
fn init_logging(path: Option<&PathBuf>) -> io::Result<()> {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    match path {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        None => builder.filter_level(log::LevelFilter::Off).init(),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    if !io::stdout().is_terminal() {
        println!(
            "holdem-tui needs a real terminal (TTY). Press q to quit once running. Version: {}",
            holdem_sim::VERSION
        );
        return Ok(());
    }

    let mut config = TableConfig::default().with_players(args.players);
    config.human_seat = args.seat.saturating_sub(1);
    config.opening_bid = args.ante;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(path) = args.knowledge {
        config = config.with_knowledge(path);
    }
    config.validate()?;

    let knowledge = match config.knowledge_path.as_ref() {
        Some(path) => Some(Arc::new(Knowledge::load(path)?)),
        None => None,
    };
    let mut app = AppState::new(&config, knowledge)?;

    let mut terminal = setup_terminal()?;
    let res = controller::run(&mut terminal, &mut app, Duration::from_millis(100));

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    Ok(res?)
}
