//! Key bindings for the tracker panel.

use crate::key::{new_binding, with_help, with_keys_str, Binding, KeyMap};

/// Bindings for every control on the panel.
///
/// # Examples
///
/// ```rust
/// use pomodoro_tracker::key::{new_binding, with_help, with_keys_str};
/// use pomodoro_tracker::tracker::TrackerKeyMap;
///
/// // Remap Stop to `r` ("reset").
/// let keys = TrackerKeyMap {
///     stop: new_binding(vec![with_keys_str(&["r"]), with_help("r", "reset")]),
///     ..TrackerKeyMap::default()
/// };
/// assert_eq!(keys.stop.help().key, "r");
/// ```
#[derive(Debug, Clone)]
pub struct TrackerKeyMap {
    /// Start the countdown.
    pub start: Binding,
    /// Pause the countdown.
    pub pause: Binding,
    /// Reset to the configured duration and halt.
    pub stop: Binding,
    /// Load the 10 minute break.
    pub short_break: Binding,
    /// Load the 1 hour break.
    pub long_break: Binding,
    /// Focus the minutes field.
    pub edit_minutes: Binding,
    /// Load the configured duration (the Set control).
    pub apply: Binding,
    /// Leave the minutes field without applying.
    pub leave_minutes: Binding,
    /// Toggle the expanded help.
    pub show_full_help: Binding,
    /// Quit the program.
    pub quit: Binding,
}

impl Default for TrackerKeyMap {
    fn default() -> Self {
        Self {
            start: new_binding(vec![with_keys_str(&["s", "enter"]), with_help("s", "start")]),
            pause: new_binding(vec![with_keys_str(&["p", "space"]), with_help("p", "pause")]),
            stop: new_binding(vec![with_keys_str(&["x"]), with_help("x", "stop")]),
            short_break: new_binding(vec![
                with_keys_str(&["b"]),
                with_help("b", "10m break"),
            ]),
            long_break: new_binding(vec![
                with_keys_str(&["B"]),
                with_help("B", "1hr break"),
            ]),
            edit_minutes: new_binding(vec![
                with_keys_str(&["tab"]),
                with_help("tab", "edit minutes"),
            ]),
            apply: new_binding(vec![with_keys_str(&["=", "enter"]), with_help("=", "set")]),
            leave_minutes: new_binding(vec![
                with_keys_str(&["esc", "tab"]),
                with_help("esc", "done"),
            ]),
            show_full_help: new_binding(vec![with_keys_str(&["?"]), with_help("?", "help")]),
            quit: new_binding(vec![
                with_keys_str(&["q", "ctrl+c"]),
                with_help("q", "quit"),
            ]),
        }
    }
}

impl KeyMap for TrackerKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.start,
            &self.pause,
            &self.stop,
            &self.edit_minutes,
            &self.show_full_help,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.start, &self.pause, &self.stop],
            vec![&self.short_break, &self.long_break],
            vec![&self.edit_minutes, &self.apply, &self.leave_minutes],
            vec![&self.show_full_help, &self.quit],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubbletea_rs::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_break_keys_are_distinct() {
        let keys = TrackerKeyMap::default();
        assert!(keys.short_break.matches(&key(KeyCode::Char('b'))));
        assert!(!keys.short_break.matches(&key(KeyCode::Char('B'))));
        assert!(keys.long_break.matches(&KeyMsg {
            key: KeyCode::Char('B'),
            modifiers: KeyModifiers::SHIFT,
        }));
    }

    #[test]
    fn test_edit_minutes_is_tab_only() {
        let keys = TrackerKeyMap::default();
        assert_eq!(keys.edit_minutes.keys().len(), 1);
        assert!(keys.edit_minutes.matches(&key(KeyCode::Tab)));
        assert!(!keys.edit_minutes.matches(&key(KeyCode::Char('m'))));
    }

    #[test]
    fn test_full_help_covers_every_control() {
        let keys = TrackerKeyMap::default();
        let count: usize = keys.full_help().iter().map(Vec::len).sum();
        assert_eq!(count, 10);
    }
}
