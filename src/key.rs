//! Key bindings for the tracker's controls.
//!
//! A [`Binding`] couples one or more key presses with the help text shown in
//! the help line. Bindings are built with the option functions in this module:
//!
//! ```rust
//! use pomodoro_tracker::key::{new_binding, with_help, with_keys_str};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let start = new_binding(vec![
//!     with_keys_str(&["s", "enter"]),
//!     with_help("s", "start"),
//! ]);
//!
//! let msg = KeyMsg { key: KeyCode::Char('s'), modifiers: KeyModifiers::NONE };
//! assert!(start.matches(&msg));
//! assert_eq!(start.help().desc, "start");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key together with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub mods: KeyModifiers,
}

impl KeyPress {
    /// Whether a key event is this key press.
    ///
    /// Shift is ignored for character keys since the terminal already
    /// reports it through the character's case.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        let (want, got) = match self.code {
            KeyCode::Char(_) => (
                self.mods.difference(KeyModifiers::SHIFT),
                msg.modifiers.difference(KeyModifiers::SHIFT),
            ),
            _ => (self.mods, msg.modifiers),
        };
        want == got
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// How the key is displayed, e.g. `"s"` or `"ctrl+c"`.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of keys bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding) + Send>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Sets the keys of a binding from their string names.
///
/// Names follow the bubbletea convention: `"a"`, `"B"`, `"enter"`, `"esc"`,
/// `"tab"`, `"space"`, `"backspace"`, `"up"`, `"ctrl+c"`, `"alt+x"`. Unknown
/// names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| parse_key(k)).collect();
    Box::new(move |b| b.keys = parsed)
}

/// Sets the help text of a binding.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b| b.help = help)
}

/// Creates the binding in a disabled state.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b| b.disabled = true)
}

/// Parses a key name such as `"ctrl+c"` into a [`KeyPress`].
pub fn parse_key(name: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut rest = name;
    loop {
        if let Some(r) = rest.strip_prefix("ctrl+") {
            mods |= KeyModifiers::CONTROL;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt+") {
            mods |= KeyModifiers::ALT;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("shift+") {
            mods |= KeyModifiers::SHIFT;
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" | " " => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(KeyPress { code, mods })
}

impl Binding {
    /// Whether the key event triggers this binding. Disabled bindings never
    /// match.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }

    /// The keys that trigger this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text for the help line.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding is active and has keys.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }
}

/// Anything that can list its bindings for the help line.
pub trait KeyMap {
    /// Bindings shown in the one-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings shown in the expanded help, one column per group.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
