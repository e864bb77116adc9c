//! Helpers for fyle.
//!
//! - Color parsing from names or hex codes
//! - Handing a file to the platform's default application
//! - Displaying the home directory as "~" and expanding it back
//! - Resolving the start directory given on the command line
//! - Folding `.` and `..` out of paths

use ratatui::style::Color;
use std::io;
use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};
use std::process::{Command, Stdio};

/// Parses a string (color name or hex) into a ratatui::style::Color
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB).
/// Anything else falls back to [Color::Reset].
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" => Color::Gray,
        "darkgray" => Color::DarkGray,
        _ => s
            .strip_prefix('#')
            .and_then(parse_hex)
            .unwrap_or(Color::Reset),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let expanded = match hex.len() {
        6 => hex.to_string(),
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        _ => return None,
    };
    let rgb = u32::from_str_radix(&expanded, 16).ok()?;
    Some(Color::Rgb(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    ))
}

/// Hands `path` to the platform opener (`xdg-open`, `open` or `start`).
pub fn open_with_default_app(path: &Path) -> io::Result<()> {
    let pid = spawn_detached(opener_command(path)?)?;
    tracing::debug!(pid, path = %path.display(), "opened with default app");
    Ok(())
}

/// Spawns `cmd` with null stdio and returns its pid.
///
/// A background thread waits on the child so it is reaped when it exits.
fn spawn_detached(mut cmd: Command) -> io::Result<u32> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    let pid = child.id();

    std::thread::Builder::new()
        .name(format!("reap-{pid}"))
        .spawn(move || match child.wait() {
            Ok(status) => tracing::debug!(pid, %status, "opener exited"),
            Err(e) => tracing::warn!(pid, error = %e, "waiting on opener failed"),
        })?;
    Ok(pid)
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> io::Result<Command> {
    let mut cmd = Command::new(which::which("open").map_err(io::Error::other)?);
    cmd.arg(path);
    Ok(cmd)
}

#[cfg(windows)]
fn opener_command(path: &Path) -> io::Result<Command> {
    let mut cmd = Command::new(which::which("cmd").map_err(io::Error::other)?);
    cmd.args(["/C", "start", ""]).arg(path);
    Ok(cmd)
}

#[cfg(not(any(target_os = "macos", windows)))]
fn opener_command(path: &Path) -> io::Result<Command> {
    let opener = which::which("xdg-open").map_err(|e| {
        io::Error::new(io::ErrorKind::NotFound, format!("xdg-open not found: {e}"))
    })?;
    let mut cmd = Command::new(opener);
    cmd.arg(path);
    Ok(cmd)
}

/// Util function to shorten home directory to ~.
/// Used by the path header in the renderer.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        let mut short = stripped.display().to_string();
        if short.starts_with(MAIN_SEPARATOR) {
            short.remove(0);
        }
        return format!("~{}{}", MAIN_SEPARATOR, short);
    }
    path.display().to_string()
}

/// Expands a leading `~` to the home directory. Other paths are returned as is.
pub fn expand_home_path(input: &str) -> PathBuf {
    let rest = match input.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', MAIN_SEPARATOR]) => rest,
        _ => return PathBuf::from(input),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', MAIN_SEPARATOR])),
        None => PathBuf::from(input),
    }
}

/// Lexically folds `.` and `..` out of `path` without touching the filesystem.
///
/// `..` at the root stays at the root; leading `..` of a relative path are kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Turns the `PATH` argument into an absolute directory to start in.
///
/// Relative paths are taken against the working directory. The result is
/// canonicalized when possible.
pub fn resolve_initial_dir(arg: &str) -> PathBuf {
    let expanded = expand_home_path(arg.trim());
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&expanded))
            .unwrap_or(expanded)
    };
    absolute.canonicalize().unwrap_or(absolute)
}
