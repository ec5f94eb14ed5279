//! Pomodoro tracker panel.
//!
//! The tracker puts a [`crate::timer::Model`] behind a small control panel:
//! a `MM:SS` readout, a status line, Start/Pause/Stop controls, and a
//! "Quick Set" row with two break presets, the minutes field and Set. Every
//! control is reachable from the keyboard through [`TrackerKeyMap`].
//!
//! # Basic Usage
//!
//! ```rust
//! use pomodoro_tracker::tracker::{new, with_configured_minutes};
//!
//! let mut tracker = new(&[with_configured_minutes(25)]);
//! assert_eq!(tracker.timer().remaining_seconds(), 25 * 60);
//!
//! let _tick = tracker.start();
//! tracker.set_break(10);
//! assert_eq!(tracker.timer().remaining_seconds(), 600);
//! assert!(!tracker.timer().running());
//! ```
//!
//! # Running it
//!
//! ```rust,ignore
//! use bubbletea_rs::Program;
//! use pomodoro_tracker::tracker::Model;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let program = Program::<Model>::builder().alt_screen(true).build()?;
//! program.run().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Editing the duration
//!
//! `tab` focuses the minutes field. Digits and backspace edit it, and every
//! edit stores the clamped value as the configured duration, so Stop picks it
//! up even without pressing Set. `enter` applies it and leaves the field;
//! `esc` leaves without applying. Leaving the field rewrites its text to the
//! stored value, so an empty field shows `1` afterwards. While the field has
//! focus only `ctrl+c` quits.

mod keys;
mod style;


pub use keys::TrackerKeyMap;
pub use style::Styles;

use crate::duration_input;
use crate::help;
use crate::timer::{self, LONG_BREAK_MINUTES, SHORT_BREAK_MINUTES};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::KeyModifiers;
use lipgloss_extras::lipgloss;
use tracing::debug;

/// Options accepted by [`new`].
#[derive(Debug, Clone)]
pub enum TrackerOption {
    /// Sets the configured duration and loads it.
    WithConfiguredMinutes(u32),
    /// Replaces the panel styles.
    WithStyles(Box<Styles>),
    /// Replaces the key bindings.
    WithKeyMap(Box<TrackerKeyMap>),
    /// Hides the help line.
    WithoutHelp,
}

impl TrackerOption {
    fn apply(&self, m: &mut Model) {
        match self {
            TrackerOption::WithConfiguredMinutes(minutes) => {
                m.timer = timer::with_minutes(*minutes);
                m.sync_input();
            }
            TrackerOption::WithStyles(styles) => {
                m.styles = (**styles).clone();
            }
            TrackerOption::WithKeyMap(key_map) => {
                m.key_map = (**key_map).clone();
            }
            TrackerOption::WithoutHelp => {
                m.show_help = false;
            }
        }
    }
}

/// Starts with `minutes` configured and loaded. Clamped to 1..=120.
pub fn with_configured_minutes(minutes: u32) -> TrackerOption {
    TrackerOption::WithConfiguredMinutes(minutes)
}

/// Uses custom styles.
pub fn with_styles(styles: Styles) -> TrackerOption {
    TrackerOption::WithStyles(Box::new(styles))
}

/// Uses custom key bindings.
pub fn with_key_map(key_map: TrackerKeyMap) -> TrackerOption {
    TrackerOption::WithKeyMap(Box::new(key_map))
}

/// Hides the help line under the panel.
pub fn without_help() -> TrackerOption {
    TrackerOption::WithoutHelp
}

/// The tracker panel.
#[derive(Debug, Clone)]
pub struct Model {
    timer: timer::Model,
    input: duration_input::Model,
    /// Key bindings for the controls.
    pub key_map: TrackerKeyMap,
    /// Panel styles.
    pub styles: Styles,
    /// Help line renderer.
    pub help: help::Model,
    /// Whether the help line is rendered.
    pub show_help: bool,
}

/// Creates a tracker with the default 40 minute duration, then applies
/// `opts` in order.
///
/// ```rust
/// use pomodoro_tracker::tracker::{new, without_help};
///
/// let tracker = new(&[without_help()]);
/// assert_eq!(tracker.timer().view(), "40:00");
/// assert!(!tracker.show_help);
/// ```
pub fn new(opts: &[TrackerOption]) -> Model {
    let timer = timer::new();
    let mut m = Model {
        input: duration_input::Model::new(timer.configured_minutes()),
        timer,
        key_map: TrackerKeyMap::default(),
        styles: Styles::default(),
        help: help::Model::new(),
        show_help: true,
    };

    for opt in opts {
        opt.apply(&mut m);
    }

    m
}

impl Model {
    /// The countdown state.
    pub fn timer(&self) -> &timer::Model {
        &self.timer
    }

    /// The minutes field.
    pub fn input(&self) -> &duration_input::Model {
        &self.input
    }

    /// Start control. Returns the first tick, or `None` when the control is
    /// disabled or the timer already runs.
    pub fn start(&mut self) -> Option<Cmd> {
        self.timer.start()
    }

    /// Pause control.
    pub fn pause(&mut self) {
        self.timer.pause();
    }

    /// Stop control.
    pub fn stop(&mut self) {
        self.timer.stop();
    }

    /// Stores a custom duration and shows it in the minutes field.
    pub fn set_custom_duration(&mut self, minutes: i64) {
        self.timer.set_custom_duration(minutes);
        self.sync_input();
    }

    /// Set control: loads the configured duration.
    pub fn apply_custom_duration(&mut self) {
        self.timer.apply_custom_duration();
    }

    /// Break preset controls.
    pub fn set_break(&mut self, minutes: u32) {
        self.timer.set_break(minutes);
    }

    fn sync_input(&mut self) {
        self.input
            .set_value(&self.timer.configured_minutes().to_string());
    }

    fn leave_input(&mut self) {
        self.input.blur();
        self.sync_input();
    }

    /// Handles key presses and ticks.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            // While editing, only a ctrl chord quits so typed letters stay in the field.
            let can_quit =
                !self.input.focused() || key_msg.modifiers.contains(KeyModifiers::CONTROL);
            if can_quit && self.key_map.quit.matches(key_msg) {
                return Some(bubbletea_rs::quit());
            }
            if self.input.focused() {
                self.handle_input_key(key_msg, &msg);
                return None;
            }
            return self.handle_control_key(key_msg);
        }

        self.timer.update(msg)
    }

    fn handle_input_key(&mut self, key_msg: &KeyMsg, msg: &Msg) {
        if self.key_map.apply.matches(key_msg) {
            self.apply_custom_duration();
            self.leave_input();
        } else if self.key_map.leave_minutes.matches(key_msg) {
            self.leave_input();
        } else if self.input.update(msg) {
            self.timer.set_custom_duration_str(self.input.value());
        }
    }

    fn handle_control_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        let keys = &self.key_map;
        if keys.start.matches(key_msg) {
            return self.start();
        }
        if keys.pause.matches(key_msg) {
            self.pause();
        } else if keys.stop.matches(key_msg) {
            self.stop();
        } else if keys.short_break.matches(key_msg) {
            self.set_break(SHORT_BREAK_MINUTES);
        } else if keys.long_break.matches(key_msg) {
            self.set_break(LONG_BREAK_MINUTES);
        } else if keys.apply.matches(key_msg) {
            self.apply_custom_duration();
        } else if keys.edit_minutes.matches(key_msg) {
            debug!(id = self.timer.id(), "editing minutes");
            return self.input.focus();
        } else if keys.show_full_help.matches(key_msg) {
            self.help.show_all = !self.help.show_all;
        }
        None
    }

    /// Renders the panel.
    pub fn view(&self) -> String {
        let s = &self.styles;
        let status = self.timer.status();
        let status_style = if status == timer::Status::Expired {
            &s.status_expired
        } else {
            &s.status
        };
        let start_style = if self.timer.can_start() {
            &s.start
        } else {
            &s.start_disabled
        };

        let controls = [
            start_style.clone().inline(true).render("▶ Start"),
            s.pause.clone().inline(true).render("‖ Pause"),
            s.stop.clone().inline(true).render("■ Stop"),
        ]
        .join(" ");
        let presets = [
            s.short_break.clone().inline(true).render("10m Break"),
            s.long_break.clone().inline(true).render("1hr Break"),
            self.input.view(),
            s.set.clone().inline(true).render("Set"),
        ]
        .join(" ");

        let mut lines = vec![
            s.time.clone().inline(true).render(&self.timer.view()),
            status_style.clone().inline(true).render(&status.to_string()),
            String::new(),
            controls,
            String::new(),
            s.label.clone().inline(true).render("◷ Quick Set:"),
            presets,
        ];
        if self.show_help {
            lines.push(String::new());
            lines.push(self.help.view(&self.key_map));
        }

        // Readout and status sit centered over the controls.
        let body = center_head(&lines, 2).join("\n");
        s.panel.render(&body)
    }
}

/// Centers the first `head` lines within the width of the widest line.
fn center_head(lines: &[String], head: usize) -> Vec<String> {
    let width = lines
        .iter()
        .flat_map(|l| l.lines())
        .map(|l| lipgloss::width_visible(l))
        .max()
        .unwrap_or(0);
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i < head {
                let pad = width.saturating_sub(lipgloss::width_visible(line)) / 2;
                format!("{}{}", " ".repeat(pad), line)
            } else {
                line.clone()
            }
        })
        .collect()
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(&[]), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}
