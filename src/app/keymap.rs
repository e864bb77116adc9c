//! Normal mode key mapping for fyle.
//!
//! Parses key strings from the `[keys]` config table into [Key]s and maps them
//! to navigation and mode actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Represents any Normal mode action.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Action {
    Nav(NavAction),
    Mode(ModeAction),
}

/// Selection and traversal actions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NavAction {
    GoDown,
    GoUp,
    Enter,
    GoParent,
    SearchNext,
}

/// Actions that open an input line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ModeAction {
    Command,
    Search,
    Rename,
}

/// Key + modifiers as used in the keymap
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Stores the mapping from Key to action, built from the config
pub struct Keymap {
    map: HashMap<Key, Action>,
}

impl Keymap {
    /// Builds the keymap from the config
    #[rustfmt::skip]
    pub fn from_config(config: &crate::config::Config) -> Self {
        let mut map = HashMap::new();
        let keys = config.keys();

        macro_rules! bind {
            ($keys:expr, $action:expr) => {
                bind($keys, $action, &mut map);
            };
        }

        use NavAction as N;
        use ModeAction as M;

        bind!(keys.go_down(),       Action::Nav(N::GoDown));
        bind!(keys.go_up(),         Action::Nav(N::GoUp));
        bind!(keys.enter(),         Action::Nav(N::Enter));
        bind!(keys.go_parent(),     Action::Nav(N::GoParent));
        bind!(keys.search_next(),   Action::Nav(N::SearchNext));

        bind!(keys.command(),       Action::Mode(M::Command));
        bind!(keys.search(),        Action::Mode(M::Search));
        bind!(keys.rename(),        Action::Mode(M::Rename));

        Keymap { map }
    }

    /// Looks up the action for a given key event
    pub fn lookup(&self, key: KeyEvent) -> Option<Action> {
        let k = Key {
            code: key.code,
            modifiers: key.modifiers,
        };

        if let Some(action) = self.map.get(&k).copied() {
            return Some(action);
        }

        // ':' and friends arrive with SHIFT on most terminals
        if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
            let k2 = Key {
                code: key.code,
                modifiers: key.modifiers - KeyModifiers::SHIFT,
            };
            return self.map.get(&k2).copied();
        }
        None
    }
}

/// Parses a key description such as `"j"`, `"Enter"`, `"F2"`, `"ctrl+n"` or `"<c-n>"`.
pub fn parse_key(s: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    // single characters bind literally, including '+', '-' and '<'
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(Key {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let is_bracketed = s.starts_with('<') && s.ends_with('>');
    let mut input = s.trim_start_matches('<').trim_end_matches('>').to_string();

    if is_bracketed && input.contains('-') {
        let parts: Vec<&str> = input.split('-').collect();

        for &prefix in parts.iter().take(parts.len().saturating_sub(1)) {
            match prefix.to_lowercase().as_str() {
                "c" | "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "a" | "m" | "alt" => modifiers |= KeyModifiers::ALT,
                "s" | "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }
        input = parts.last()?.to_string();
    }

    let normalized = input.replace('-', "+");
    for part in normalized.split('+') {
        let p_low = part.to_lowercase();
        match p_low.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,

            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "enter" | "return" => code = Some(KeyCode::Enter),
            "esc" | "escape" => code = Some(KeyCode::Esc),
            "backspace" | "back" => code = Some(KeyCode::Backspace),
            "tab" => code = Some(KeyCode::Tab),
            "space" | "spc" => code = Some(KeyCode::Char(' ')),

            _ => {
                if part.chars().count() == 1 {
                    let mut c = part.chars().next()?;
                    if modifiers.contains(KeyModifiers::SHIFT) {
                        c = c.to_ascii_uppercase();
                    }
                    code = Some(KeyCode::Char(c));
                } else if p_low.starts_with('f')
                    && p_low.len() > 1
                    && p_low[1..].chars().all(|c| c.is_ascii_digit())
                {
                    let n = p_low[1..].parse().ok()?;
                    code = Some(KeyCode::F(n));
                } else if part.is_empty() {
                    continue;
                } else {
                    return None;
                }
            }
        }
    }

    Some(Key {
        code: code?,
        modifiers,
    })
}

fn bind(key_list: &[String], action: Action, map: &mut HashMap<Key, Action>) {
    for k in key_list {
        match parse_key(k) {
            Some(key) => {
                map.insert(key, action);
            }
            None => tracing::warn!(key = %k, "ignoring unparsable key binding"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn parse_named_and_char_keys() {
        assert_eq!(parse_key("j").map(|k| k.code), Some(KeyCode::Char('j')));
        assert_eq!(parse_key(":").map(|k| k.code), Some(KeyCode::Char(':')));
        assert_eq!(parse_key("/").map(|k| k.code), Some(KeyCode::Char('/')));
        assert_eq!(parse_key("Enter").map(|k| k.code), Some(KeyCode::Enter));
        assert_eq!(parse_key("Backspace").map(|k| k.code), Some(KeyCode::Backspace));
        assert_eq!(parse_key("F2").map(|k| k.code), Some(KeyCode::F(2)));

        let ctrl_n = parse_key("<c-n>");
        assert_eq!(
            ctrl_n,
            Some(Key {
                code: KeyCode::Char('n'),
                modifiers: KeyModifiers::CONTROL
            })
        );
        assert_eq!(parse_key("ctrl+n"), ctrl_n);
        assert_eq!(parse_key("hyper+x"), None);
    }

    #[test]
    fn default_bindings() {
        let config = Config::default();
        let keymap = Keymap::from_config(&config);

        use ModeAction as M;
        use NavAction as N;
        let cases = [
            (KeyCode::Char('j'), Action::Nav(N::GoDown)),
            (KeyCode::Down, Action::Nav(N::GoDown)),
            (KeyCode::Char('k'), Action::Nav(N::GoUp)),
            (KeyCode::Up, Action::Nav(N::GoUp)),
            (KeyCode::Char('l'), Action::Nav(N::Enter)),
            (KeyCode::Enter, Action::Nav(N::Enter)),
            (KeyCode::Char('h'), Action::Nav(N::GoParent)),
            (KeyCode::Backspace, Action::Nav(N::GoParent)),
            (KeyCode::Char('n'), Action::Nav(N::SearchNext)),
            (KeyCode::Char(':'), Action::Mode(M::Command)),
            (KeyCode::Char('/'), Action::Mode(M::Search)),
            (KeyCode::Char('r'), Action::Mode(M::Rename)),
            (KeyCode::F(2), Action::Mode(M::Rename)),
        ];
        for (code, action) in cases {
            assert_eq!(keymap.lookup(press(code)), Some(action), "binding for {code:?}");
        }
        assert_eq!(keymap.lookup(press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn shifted_chars_fall_back_to_plain_binding() {
        let keymap = Keymap::from_config(&Config::default());
        let colon = KeyEvent::new(KeyCode::Char(':'), KeyModifiers::SHIFT);
        assert_eq!(keymap.lookup(colon), Some(Action::Mode(ModeAction::Command)));
    }
}
