use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::game::{GameState, Player};
use connect_four::ui::{App, Console};

/// Play Connect Four against a friend at the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Name for player 1 (skips the prompt)
    #[arg(long)]
    player1: Option<String>,

    /// Name for player 2 (skips the prompt)
    #[arg(long)]
    player2: Option<String>,

    /// Use the full-screen terminal UI instead of the prompt loop
    #[arg(long)]
    tui: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(name) = cli.player1 {
        app_config.players.player1 = Some(name);
    }
    if let Some(name) = cli.player2 {
        app_config.players.player2 = Some(name);
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), app_config.display.clone());

    if !cli.tui {
        console.say("Welcome to Connect Four!")?;
    }
    let player1 = resolve_name(&mut console, &app_config, Player::Player1)?;
    let player2 = resolve_name(&mut console, &app_config, Player::Player2)?;

    if cli.tui {
        drop(console);
        run_tui(App::new(player1, player2)).context("running terminal UI")
    } else {
        let mut state = GameState::new(player1, player2);
        console.play(&mut state).context("reading moves")?;
        console.say("\nThanks for playing!")?;
        Ok(())
    }
}

/// Configured name for a seat, or ask for one
fn resolve_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &AppConfig,
    player: Player,
) -> Result<String> {
    match config.players.label(player) {
        Some(name) => Ok(name.to_string()),
        None => console
            .prompt_name(player)
            .with_context(|| format!("reading name for player {}", player.number())),
    }
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
