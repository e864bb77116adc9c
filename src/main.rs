//! main.rs
//! Entry point for fyle

use fyle::app::AppState;
use fyle::config::Config;
use fyle::core::{LocalFs, terminal};
use fyle::logging;
use fyle::ui::TerminalSink;
use fyle::utils::cli::{CliAction, handle_args};
use fyle::utils::resolve_initial_dir;

use std::io;

fn main() -> io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture,
            crossterm::cursor::Show
        );

        tracing::error!(%info, "panic");
        eprintln!("\n[fyle] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let start = match handle_args() {
        CliAction::Exit => return Ok(()),
        CliAction::RunApp => None,
        CliAction::RunAppAtPath(arg) => Some(resolve_initial_dir(&arg)),
    };

    if let Err(e) = logging::init_tracing() {
        eprintln!("[fyle] Warning: logging disabled: {e}");
    }

    let config = Config::load();
    let fs = LocalFs::new(config.general().show_hidden());

    let app = match start {
        Some(path) => AppState::from_dir(&config, fs, TerminalSink::new(), path),
        None => AppState::new(&config, fs, TerminalSink::new()),
    };
    let mut app = match app {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "could not open start directory");
            eprintln!("\n[fyle] Error: {e}");
            std::process::exit(1);
        }
    };

    terminal::run_terminal(&mut app)
}
