//! Input configuration options for fyle
//!
//! This module defines the Normal mode key bindings which are read from the `[keys]`
//! table of fyle.toml.

use serde::Deserialize;

/// Input configuration options of all Normal mode actions
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Keys {
    go_down: Vec<String>,
    go_up: Vec<String>,
    enter: Vec<String>,
    go_parent: Vec<String>,
    command: Vec<String>,
    rename: Vec<String>,
    search: Vec<String>,
    search_next: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    go_down,
    go_up,
    enter,
    go_parent,
    command,
    rename,
    search,
    search_next,
);

/// Default input configuration options
impl Default for Keys {
    fn default() -> Self {
        Keys {
            go_down: vec!["j".into(), "Down".into()],
            go_up: vec!["k".into(), "Up".into()],
            enter: vec!["l".into(), "Enter".into()],
            go_parent: vec!["h".into(), "Backspace".into()],

            command: vec![":".into()],
            rename: vec!["r".into(), "F2".into()],
            search: vec!["/".into()],
            search_next: vec!["n".into()],
        }
    }
}
