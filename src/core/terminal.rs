//! Terminal rendering and event loop for fyle.
//!
//! Handles setup/teardown of raw mode, alternate screen and mouse capture, redraws,
//! and events (keypress, mouse, resize) to app logic.

use crate::app::{AppState, KeypressResult, PresentationSink};
use crate::core::FsProvider;
use crate::ui::{self, TerminalSink};

use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::{io, time::Duration};

/// Initializes the terminal in raw mode and alternate screen and runs the main event loop.
///
/// Blocks until quit. Returns an std::io::Error if terminal setup or teardown fails.
pub fn run_terminal<P: FsProvider>(app: &mut AppState<'_, P, TerminalSink>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        Show
    )?;
    result
}

/// Draws a frame and stores the listing geometry for mouse hit-testing.
fn draw<B, P>(terminal: &mut Terminal<B>, app: &mut AppState<'_, P, TerminalSink>) -> io::Result<()>
where
    B: Backend,
    P: FsProvider,
    io::Error: From<<B as Backend>::Error>,
{
    let mut view = None;
    terminal.draw(|f| view = Some(ui::render(f, app)))?;
    if let Some(view) = view {
        app.sink_mut().set_list_view(view);
    }
    Ok(())
}

/// Main event loop: draws the UI, polls for events and dispatches them to the app.
/// Returns on quit.
fn event_loop<B, P>(terminal: &mut Terminal<B>, app: &mut AppState<'_, P, TerminalSink>) -> io::Result<()>
where
    B: Backend,
    P: FsProvider,
    io::Error: From<<B as Backend>::Error>,
{
    draw(terminal, app)?;

    loop {
        if !event::poll(Duration::from_millis(16))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.sink_mut().clear_status();
                if app.handle_keypress(key) == KeypressResult::Quit {
                    break;
                }
            }
            Event::Mouse(mouse) => {
                if !handle_mouse(app, mouse) {
                    continue;
                }
            }
            Event::Resize(_, _) => {}
            _ => continue,
        }

        draw(terminal, app)?;
    }
    Ok(())
}

/// Dispatches clicks and wheel scrolls. Returns `true` if a redraw is needed.
fn handle_mouse<P: FsProvider>(app: &mut AppState<'_, P, TerminalSink>, mouse: MouseEvent) -> bool {
    if app.actions().is_input_mode() {
        return false;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(index) = app.sink().row_at(mouse.column, mouse.row) else {
                return false;
            };
            // clicks below the last entry
            if index >= app.nav().entries().len() {
                return false;
            }
            app.sink_mut().clear_status();
            let result = app.handle_row_tap(index);
            if let Err(e) = result {
                tracing::warn!(error = %e, index, "row tap failed");
                app.sink_mut().on_error(&e);
            }
            true
        }
        MouseEventKind::ScrollDown => app.increment_selection(),
        MouseEventKind::ScrollUp => app.decrement_selection(),
        _ => false,
    }
}
