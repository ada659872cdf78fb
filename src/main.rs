// hanoi-tty: Towers of Hanoi step-through visualizer

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info, warn};

use hanoi_tty::replay::DEFAULT_INTERVAL_MS;
use hanoi_tty::session::Session;
use hanoi_tty::settings::{Settings, SettingsStore, ThemeKind};
use hanoi_tty::solver::{self, DiskCount};
use hanoi_tty::ui::panes::CancelAction;
use hanoi_tty::ui::App;

#[derive(Debug, Parser)]
#[command(name = "hanoi-tty", version, about = "Step through the Towers of Hanoi")]
struct Cli {
    /// Number of disks (1-8). Without it, a setup dialog asks at startup.
    #[arg(short = 'n', long)]
    disks: Option<DiskCount>,

    /// Auto-play interval in milliseconds (100-2000)
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL_MS)]
    interval: u64,

    /// Color theme for this run; also saved as the new preference
    #[arg(long)]
    theme: Option<ThemeKind>,

    /// Settings file to use instead of the default location
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Where to write logs
    #[arg(long, default_value = "hanoi-tty.log")]
    log_file: PathBuf,

    /// Print the solution and call trace instead of starting the TUI
    #[arg(long, requires = "disks")]
    print: bool,
}

fn init_logging(path: &Path) -> Result<()> {
    // Log to a file so the TUI keeps the terminal to itself
    let log_file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn print_solution(disks: DiskCount) -> Result<()> {
    let (solution, trace) = solver::solve_with_trace(disks);
    let mut out = io::stdout().lock();
    writeln!(out, "{} disks, {} moves", disks, solution.len())?;
    for (idx, mv) in solution.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{:>3}. {}", idx + 1, mv)?;
        for line in trace.lines(idx) {
            writeln!(out, "     {}", line)?;
        }
    }
    Ok(())
}

fn resolve_theme(store: &SettingsStore, requested: Option<ThemeKind>) -> ThemeKind {
    let saved = store.load_or_default();
    match requested {
        Some(theme) if theme != saved.theme => {
            if let Err(e) = store.save(&Settings { theme }) {
                warn!(error = %e, "failed to save theme preference");
            }
            theme
        }
        Some(theme) => theme,
        None => saved.theme,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print {
        if let Some(disks) = cli.disks {
            return print_solution(disks);
        }
    }

    init_logging(&cli.log_file)?;
    info!(?cli, "starting");

    let store = match &cli.settings {
        Some(path) => SettingsStore::at_path(path),
        None => SettingsStore::default_location(),
    };
    let theme = resolve_theme(&store, cli.theme);

    let disks = cli.disks.unwrap_or_default();
    let session = Session::from_disk_count(disks, cli.interval);
    let mut app = App::new(session, store, theme);
    if cli.disks.is_none() {
        app.open_setup_dialog(CancelAction::Quit);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    info!("exiting");
    Ok(())
}
