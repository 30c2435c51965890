//! Delve, a small roguelike dungeon crawler
//!
//! Main entry point for the game.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use log::{LevelFilter, info, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use delve_core::{GameLoopResult, GameRng, GameState};
use delve_tui::config::default_log_path;
use delve_tui::{App, Theme, TuiConfig};

/// Idle poll interval
const POLL_INTERVAL: Duration = Duration::from_millis(100);
/// Poll interval while an animation or banner is running
const BUSY_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Delve: descend five dungeon levels and defeat the Lich Lord
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(author, version, about = "Delve - Descend and defeat the Lich Lord!", long_about = None)]
struct Args {
    /// Config file (JSON); defaults to <config dir>/delve/config.json
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// RNG seed, overrides the config file
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Use the light-background color theme
    #[arg(long = "light")]
    light: bool,

    /// Log file; defaults to <data dir>/delve/delve.log
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();

    let log_path = args.log_file.clone().or_else(default_log_path);
    if let Some(path) = &log_path
        && let Err(e) = init_logging(path, args.verbose)
    {
        eprintln!("delve: logging disabled: {:#}", e);
    }

    let config = TuiConfig::load_or_default(args.config.as_deref())
        .context("failed to load configuration")?;

    let rng = match args.seed.or(config.game.seed) {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!("starting new game, seed {}", rng.seed());

    let theme = Theme::from_choice(config.theme, args.light);
    let state = GameState::new(rng, &config.game.player);
    let mut app = App::new(state, theme, &config);

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        // Held keys arrive as KeyEventKind::Repeat
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = run(&mut terminal, &mut app);

    // Restore terminal
    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let outcome = outcome?;
    let state = app.state();
    match outcome {
        GameLoopResult::PlayerDied(cause) => {
            println!("You died ({}). Final score: {}", cause, state.player.score)
        }
        GameLoopResult::PlayerWon => println!("You won! Final score: {}", state.player.score),
        GameLoopResult::PlayerQuit | GameLoopResult::Continue => {
            println!("Score: {}", state.player.score)
        }
    }

    Ok(())
}

/// Main loop; returns how the game ended
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<GameLoopResult> {
    let mut outcome = GameLoopResult::Continue;

    loop {
        // Draw
        terminal.draw(|frame| app.render(frame))?;

        if app.take_bell() {
            let backend = terminal.backend_mut();
            backend.write_all(b"\x07")?;
            backend.flush()?;
        }

        if app.should_quit() {
            break;
        }

        let timeout = if app.is_busy() {
            BUSY_POLL_INTERVAL
        } else {
            POLL_INTERVAL
        };

        // Handle input
        if event::poll(timeout)? {
            let event = event::read()?;
            match app.handle_event(event, Instant::now()) {
                GameLoopResult::Continue => {}
                result => {
                    info!("game ended: {:?}", result);
                    outcome = result;
                }
            }
        }

        app.update(Instant::now());
    }

    Ok(outcome)
}

/// Send log records to `path`, one timestamped line each.
/// `RUST_LOG` overrides the `-v` level.
fn init_logging(path: &Path, verbosity: u8) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let base_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(base_level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .context("installing logger")?;

    if verbosity > 3 {
        warn!("verbosity above -vvv has no further effect");
    }
    Ok(())
}
