use std::io::{self, IsTerminal};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use kalaha::config::AppConfig;
use kalaha::console::ConsoleGame;
use kalaha::game::GameState;
use kalaha::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "kalaha.log";

/// Play Kalaha for two or more players.
#[derive(Parser)]
#[command(name = "kalaha", about = "Play Kalaha in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "kalaha.toml")]
    config: PathBuf,

    /// Override stones initially placed in each regular pit
    #[arg(long)]
    stones: Option<u32>,

    /// Override number of regular pits per player
    #[arg(long)]
    pits: Option<usize>,

    /// Override number of players
    #[arg(long)]
    players: Option<usize>,

    /// Play on plain stdin/stdout instead of the full-screen UI
    #[arg(long)]
    console: bool,

    /// Print a config file with all default values and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    init_tracing(cli.console)?;

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(stones) = cli.stones {
        app_config.board.stones_per_pit = stones;
    }
    if let Some(pits) = cli.pits {
        app_config.board.pits_per_player = pits;
    }
    if let Some(players) = cli.players {
        app_config.board.player_count = players;
    }
    app_config.validate().context("invalid board settings")?;

    tracing::info!(board = ?app_config.board, console = cli.console, "starting game");

    if cli.console {
        run_console(&app_config)
    } else {
        run_tui(&app_config)
    }
}

/// Log to stderr in console mode; the full-screen UI owns the terminal, so
/// there it goes to `kalaha.log`.
fn init_tracing(console: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if console {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        let log_file =
            open_log(Path::new(LOG_FILE)).with_context(|| format!("opening {LOG_FILE}"))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Arc::new(log_file))
            .with_ansi(false)
            .init();
    }
    Ok(())
}

/// Open the log for appending so earlier sessions are kept.
fn open_log(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn run_console(config: &AppConfig) -> Result<()> {
    let state = GameState::new(config.board)?;
    let stdout = io::stdout();
    let color = stdout.is_terminal();

    let mut game = ConsoleGame::new(state, io::stdin().lock(), stdout.lock()).with_color(color);
    game.run().context("console game")
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let mut app = App::new(config.board)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI")
}
