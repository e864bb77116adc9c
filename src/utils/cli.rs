//! Command-line argument parsing and help for fyle.
//!
//! When invoked with no args/flags (`fy`), fyle opens the home directory.

use crate::config::Config;

pub enum CliAction {
    RunApp,
    RunAppAtPath(String),
    Exit,
}

/// What the command line asked for, before anything is printed or written.
#[derive(Debug, PartialEq, Eq)]
pub enum CliCommand {
    Run(Option<String>),
    Help,
    Version,
    Keybinds,
    Init,
    Invalid(String),
}

pub fn parse_args<I, S>(args: I) -> CliCommand
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();

    match args.as_slice() {
        [] => CliCommand::Run(None),
        [arg] => match arg.as_str() {
            "--version" | "-v" => CliCommand::Version,
            "-h" | "--help" => CliCommand::Help,
            "--keybinds" | "--keys" => CliCommand::Keybinds,
            "--init" => CliCommand::Init,
            path if !path.starts_with('-') && !path.trim().is_empty() => {
                CliCommand::Run(Some(path.to_string()))
            }
            other => CliCommand::Invalid(format!("Unknown argument: {other}")),
        },
        _ => CliCommand::Invalid("fyle accepts only one argument at a time.".to_string()),
    }
}

pub fn handle_args() -> CliAction {
    match parse_args(std::env::args().skip(1)) {
        CliCommand::Run(None) => CliAction::RunApp,
        CliCommand::Run(Some(path)) => CliAction::RunAppAtPath(path),
        CliCommand::Version => {
            println!("fyle {}", env!("CARGO_PKG_VERSION"));
            CliAction::Exit
        }
        CliCommand::Help => {
            print_help();
            CliAction::Exit
        }
        CliCommand::Keybinds => {
            println!("{KEYBINDS_TEXT}");
            CliAction::Exit
        }
        CliCommand::Init => {
            let path = Config::default_path();
            match Config::generate_default(&path) {
                Ok(()) => println!("Wrote default config to {}", path.display()),
                Err(e) => eprintln!("Error: {}: {}", path.display(), e),
            }
            CliAction::Exit
        }
        CliCommand::Invalid(msg) => {
            eprintln!("{msg}");
            eprintln!("Usage: fy [PATH] or fy [OPTION]. Try --help for available options");
            CliAction::Exit
        }
    }
}

fn print_help() {
    println!(
        r#"fyle - A small modal directory browser for the terminal

USAGE:
  fy [PATH]

PATH:
  Directory to open (defaults to the home directory)

OPTIONS:
      --init              Write a commented default configuration
      --keybinds          Display the default keybinds
  -h, --help              Print help information
  -v, --version           Display the installed version of fyle

ENVIRONMENT:
  FYLE_CONFIG             Override the default config path
  FYLE_LOG                Log filter, e.g. "debug" or "fyle=trace"
"#
    );
}

const KEYBINDS_TEXT: &str = r##"
=========================
 Key Bindings
=========================
[keys]
  go_down                   ["j", "Down"]
  go_up                     ["k", "Up"]
  enter                     ["l", "Enter"]
  go_parent                 ["h", "Backspace"]
  command                   [":"]
  search                    ["/"]
  search_next               ["n"]
  rename                    ["r", "F2"]

  Input line:
    Enter                   Submit (":q" quits)
    Esc                     Cancel
    Left/Right/Home/End     Move the cursor
    Backspace/Delete        Edit (an empty ":" or "/" line closes)

  Mouse:
    Click                   Select a row
    Double click            Open the row
    Wheel                   Move the selection

  Syntax Reference:
    Modifiers: <c-x> (Ctrl), <m-x>/<a-x> (Alt/Meta), <s-x> (Shift)
    Standard:  ctrl+x, alt+x, shift+x
    Special:   "space", "enter", "esc", "tab", "backspace", "f1".."f12"
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_runs_at_home() {
        assert_eq!(parse_args(Vec::<String>::new()), CliCommand::Run(None));
    }

    #[test]
    fn flags_and_paths() {
        assert_eq!(parse_args(["-v"]), CliCommand::Version);
        assert_eq!(parse_args(["--help"]), CliCommand::Help);
        assert_eq!(parse_args(["--init"]), CliCommand::Init);
        assert_eq!(parse_args(["--keybinds"]), CliCommand::Keybinds);
        assert_eq!(
            parse_args(["~/src"]),
            CliCommand::Run(Some("~/src".to_string()))
        );
    }

    #[test]
    fn rejects_unknown_and_extra_args() {
        assert!(matches!(parse_args(["--nope"]), CliCommand::Invalid(_)));
        assert!(matches!(parse_args(["a", "b"]), CliCommand::Invalid(_)));
        assert!(matches!(parse_args(["  "]), CliCommand::Invalid(_)));
    }
}
