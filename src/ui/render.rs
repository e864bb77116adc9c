//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop: a path
//! header, the directory listing and a bottom line that shows either the input line
//! of the active mode or the status.
//!
//! This module should stay "pure rendering": it reads state + config and produces
//! widgets. The only thing handed back is the list geometry for mouse hit-testing.

use crate::app::AppState;
use crate::app::actions::{ActionMode, InputMode, LineEditor};
use crate::app::tap::Clock;
use crate::config::Display;
use crate::core::{FileEntry, FsProvider};
use crate::ui::sink::{ListView, TerminalSink};
use crate::utils::shorten_home_path;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Renders the entire terminal UI for fyle on each frame.
///
/// Returns where the listing was drawn and its scroll state, which the caller
/// stores back into the [TerminalSink].
pub fn render<P, C>(frame: &mut Frame, app: &AppState<'_, P, TerminalSink, C>) -> ListView
where
    P: FsProvider,
    C: Clock,
{
    let [header, body, footer] = layout_chunks(frame.area());
    let display_cfg = app.config().display();

    render_header(frame, app, display_cfg, header);
    let view = render_listing(frame, app, display_cfg, body);

    match app.actions().mode() {
        ActionMode::Input { mode, editor, .. } => {
            render_input_line(frame, *mode, editor, footer);
        }
        ActionMode::Normal => render_status(frame, app, display_cfg, footer),
    }
    view
}

/// Splits the screen into the header, listing and footer rows.
pub fn layout_chunks(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

fn render_header<P, C>(
    frame: &mut Frame,
    app: &AppState<'_, P, TerminalSink, C>,
    display_cfg: &Display,
    area: Rect,
) where
    P: FsProvider,
    C: Clock,
{
    let path_str = shorten_home_path(app.current_dir());
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(path_str, display_cfg.path().style()),
            Span::raw(" "),
        ])),
        area,
    );
}

/// Draws the listing and returns its geometry.
fn render_listing<P, C>(
    frame: &mut Frame,
    app: &AppState<'_, P, TerminalSink, C>,
    display_cfg: &Display,
    area: Rect,
) -> ListView
where
    P: FsProvider,
    C: Clock,
{
    let entries = app.nav().entries();
    if entries.is_empty() {
        let line = Line::from(Span::styled("[Empty]", display_cfg.entry().style()));
        frame.render_widget(Paragraph::new(line), area);
        return ListView::new(area, Default::default());
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| make_entry_row(entry, display_cfg))
        .collect();

    let mut state = app.sink().list_state().clone();
    state.select(app.selected_idx());

    let selection_style = display_cfg.selection().style_or(display_cfg.entry());
    frame.render_stateful_widget(
        List::new(items)
            .highlight_style(selection_style)
            .highlight_symbol(display_cfg.selection_icon()),
        area,
        &mut state,
    );
    ListView::new(area, state)
}

fn make_entry_row(entry: &FileEntry, display_cfg: &Display) -> ListItem<'static> {
    let mut name = entry.name_str().into_owned();
    if entry.is_dir() && display_cfg.dir_marker() {
        name.push('/');
    }

    let mut style = if entry.is_dir() {
        display_cfg.directory().style_or(display_cfg.entry())
    } else {
        display_cfg.entry().style()
    };
    if entry.is_symlink() {
        style = style.add_modifier(Modifier::ITALIC);
    }
    ListItem::new(Line::from(Span::styled(name, style)))
}

/// Draws the input line with the selected range highlighted and places the cursor.
fn render_input_line(frame: &mut Frame, mode: InputMode, editor: &LineEditor, area: Rect) {
    let label = match mode {
        InputMode::Rename => format!("{}: ", mode.label()),
        InputMode::Command | InputMode::Search => String::new(),
    };

    let text = editor.text();
    let (start, end) = editor.selection().unwrap_or((editor.cursor(), editor.cursor()));

    let line = Line::from(vec![
        Span::styled(label.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(&text[..start]),
        Span::styled(&text[start..end], Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(&text[end..]),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let offset = label.width() + text[..editor.cursor()].width();
    let max_x = area.right().saturating_sub(1);
    let x = (area.x as usize + offset).min(max_x as usize) as u16;
    frame.set_cursor_position(Position::new(x, area.y));
}

/// Draws the status message, or the position in the listing when there is none.
fn render_status<P, C>(
    frame: &mut Frame,
    app: &AppState<'_, P, TerminalSink, C>,
    display_cfg: &Display,
    area: Rect,
) where
    P: FsProvider,
    C: Clock,
{
    let base = display_cfg.status_line().style();

    if let Some(status) = app.sink().status() {
        let style = if status.is_error() {
            base.fg(Color::Red)
        } else {
            base
        };
        frame.render_widget(Paragraph::new(Span::styled(status.text(), style)), area);
        return;
    }

    let total = app.nav().entries().len();
    let position = app.selected_idx().map_or(0, |i| i + 1);
    frame.render_widget(
        Paragraph::new(Span::styled(format!("{position}/{total}"), base))
            .alignment(Alignment::Right),
        area,
    );
}
