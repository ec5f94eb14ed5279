//! Numeric minutes field.
//!
//! A small single-line input that only accepts ASCII digits, holds at most
//! three of them, and declares the 1–120 range through its rendering. It
//! does not clamp by itself: the timer decides what the text means through
//! [`crate::timer::Model::set_custom_duration_str`].

use crate::key::{new_binding, with_help, with_keys_str, Binding};
use crate::Component;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// Maximum number of digits the field holds.
pub const CHAR_LIMIT: usize = 3;

/// Key bindings for editing the field.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Remove the last digit.
    pub delete_character_backward: Binding,
    /// Clear the field.
    pub delete_all: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            delete_character_backward: new_binding(vec![
                with_keys_str(&["backspace", "ctrl+h"]),
                with_help("⌫", "delete"),
            ]),
            delete_all: new_binding(vec![
                with_keys_str(&["ctrl+u"]),
                with_help("ctrl+u", "clear"),
            ]),
        }
    }
}

/// The minutes field.
///
/// # Examples
///
/// ```rust
/// use pomodoro_tracker::duration_input::Model;
/// use pomodoro_tracker::Component;
/// use bubbletea_rs::KeyMsg;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let mut input = Model::new(40);
/// input.focus();
/// let backspace: bubbletea_rs::Msg = Box::new(KeyMsg { key: KeyCode::Backspace, modifiers: KeyModifiers::NONE });
/// let five: bubbletea_rs::Msg = Box::new(KeyMsg { key: KeyCode::Char('5'), modifiers: KeyModifiers::NONE });
/// input.update(&backspace);
/// input.update(&five);
/// assert_eq!(input.value(), "45");
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    value: String,
    focus: bool,
    /// Edit bindings.
    pub key_map: KeyMap,
    /// Style of the digits.
    pub text_style: Style,
    /// Style of the brackets and cursor while focused.
    pub focused_style: Style,
    /// Style of the brackets while blurred.
    pub blurred_style: Style,
    /// Suffix rendered after the field.
    pub suffix: String,
}

impl Model {
    /// Creates a blurred field showing `minutes`.
    pub fn new(minutes: u32) -> Self {
        Self {
            value: minutes.to_string(),
            focus: false,
            key_map: KeyMap::default(),
            text_style: Style::new().bold(true),
            focused_style: Style::new().foreground(Color::from("#7D56F4")),
            blurred_style: Style::new().foreground(Color::from("#777777")),
            suffix: " min".to_string(),
        }
    }

    /// The raw text of the field.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the text, keeping only digits and at most [`CHAR_LIMIT`] of
    /// them.
    pub fn set_value(&mut self, value: &str) {
        self.value = value
            .chars()
            .filter(char::is_ascii_digit)
            .take(CHAR_LIMIT)
            .collect();
    }

    /// Handles a key press. Returns `true` when the text changed.
    ///
    /// Keys are ignored while blurred.
    pub fn update(&mut self, msg: &Msg) -> bool {
        if !self.focus {
            return false;
        }
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return false;
        };
        self.handle_key(key_msg)
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> bool {
        if self.key_map.delete_character_backward.matches(key_msg) {
            return self.value.pop().is_some();
        }
        if self.key_map.delete_all.matches(key_msg) {
            let changed = !self.value.is_empty();
            self.value.clear();
            return changed;
        }
        if let KeyCode::Char(ch) = key_msg.key {
            let plain = !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT);
            if plain && ch.is_ascii_digit() && self.value.len() < CHAR_LIMIT {
                self.value.push(ch);
                return true;
            }
        }
        false
    }

    /// Renders the bracketed digits followed by the suffix, with a cursor
    /// bar while focused.
    pub fn view(&self) -> String {
        let frame = if self.focus {
            &self.focused_style
        } else {
            &self.blurred_style
        };
        let cursor = if self.focus {
            frame.clone().inline(true).render("▏")
        } else {
            " ".to_string()
        };
        let text = self.text_style.clone().inline(true).render(&self.value);
        // Pad to the char limit so the row does not jump while typing.
        let pad = " ".repeat(CHAR_LIMIT.saturating_sub(self.value.len()));
        format!(
            "{} {}{}{} {}{}",
            frame.clone().inline(true).render("["),
            text,
            cursor,
            pad,
            frame.clone().inline(true).render("]"),
            self.suffix,
        )
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<bubbletea_rs::Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
