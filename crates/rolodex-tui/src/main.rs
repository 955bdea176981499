use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;

use rolodex_core::{Dataset, SystemOpener};

mod action;
mod app;
mod config_file;
mod input;
mod model;
mod theme;
mod view;

use action::Action;
use app::App;

/// Rolodex TUI — browse a directory of places and open entries in the
/// platform handler.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Dataset file to browse instead of the bundled directory
    #[arg(long)]
    data: Option<PathBuf>,

    /// Color theme: slate (default) or amber
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Keep the appender guard alive for the whole run so buffered log
    // lines are flushed on exit.
    let _log_guard = init_logging();

    // Resolve settings: CLI flag > CWD config > platform config > default
    let config = config_file::load_config();
    let theme_name = args
        .theme
        .or_else(|| config.theme().map(str::to_string))
        .unwrap_or_else(|| "slate".to_string());
    let data_path = args.data.or_else(|| config.data_path());

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let mut app = App::new(theme::Theme::by_name(&theme_name), Box::new(SystemOpener));

    // Show the loading frame, then assign the dataset in one step
    terminal.draw(|f| app.view(f))?;
    let loaded = match &data_path {
        Some(path) => Dataset::from_path(path),
        None => Dataset::bundled(),
    };
    app.apply_load(loaded);

    // Main event loop
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| app.view(f))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Ok(evt) = event::read() {
                app.update(input::map_event(&evt));
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.update(Action::Tick);
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    Ok(())
}

/// Log to a daily-rolling file under the platform cache dir; stderr belongs
/// to the terminal UI. Filter via `ROLODEX_LOG` (defaults to `info`).
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = dirs::cache_dir()?.join("rolodex").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;

    let appender = tracing_appender::rolling::daily(log_dir, "rolodex.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("ROLODEX_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}
