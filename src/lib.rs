#![warn(missing_docs)]

//! # pomodoro-tracker
//!
//! A Pomodoro countdown tracker for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The crate is one widget split into a few small pieces, each following the
//! Elm Architecture with `update()` and `view()` methods:
//!
//! - [`timer`]: the countdown state, its command handlers and the
//!   once-per-second tick loop
//! - [`duration_input`]: the numeric minutes field
//! - [`tracker`]: the panel that ties both to keyboard controls
//! - [`key`] and [`help`]: key bindings and the help line
//!
//! ## Quick Start
//!
//! ```rust
//! use pomodoro_tracker::prelude::*;
//!
//! let mut tracker = tracker_new(&[]);
//! assert_eq!(tracker.timer().view(), "40:00");
//!
//! let _tick = tracker.start();
//! assert_eq!(tracker.timer().status(), Status::Running);
//!
//! tracker.stop();
//! assert_eq!(tracker.timer().status(), Status::Paused);
//! ```
//!
//! ## Embedding
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model, Msg};
//! use pomodoro_tracker::prelude::*;
//!
//! struct App {
//!     tracker: Tracker,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (Self { tracker: tracker_new(&[with_configured_minutes(25)]) }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.tracker.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.tracker.view()
//!     }
//! }
//! ```

pub mod duration_input;
pub mod error;
pub mod help;
pub mod key;
pub mod timer;
pub mod tracker;

use bubbletea_rs::Cmd;

/// Components that can hold keyboard focus.
///
/// The tracker routes key presses to a focused component before treating them
/// as control shortcuts.
///
/// ```rust
/// use pomodoro_tracker::duration_input::Model;
/// use pomodoro_tracker::Component;
///
/// let mut input = Model::new(40);
/// assert!(!input.focused());
/// input.focus();
/// assert!(input.focused());
/// input.blur();
/// assert!(!input.focused());
/// ```
pub trait Component {
    /// Gives the component focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus from the component.
    fn blur(&mut self);

    /// Whether the component currently has focus.
    fn focused(&self) -> bool;
}

pub use duration_input::Model as DurationInput;
pub use error::DurationError;
pub use help::Model as HelpModel;
pub use key::{new_binding, with_disabled, with_help, with_keys_str, Binding, KeyMap, KeyPress};
pub use timer::{
    format_display, parse_minutes, Model as Timer, Status, TickMsg as TimerTickMsg,
};
pub use tracker::{
    new as tracker_new, with_configured_minutes, with_key_map, with_styles, without_help,
    Model as Tracker, TrackerKeyMap, TrackerOption,
};

/// Commonly used types and functions.
///
/// ```rust
/// use pomodoro_tracker::prelude::*;
///
/// let tracker: Tracker = tracker_new(&[without_help()]);
/// assert_eq!(format_display(tracker.timer().remaining_seconds()), "40:00");
/// ```
pub mod prelude {
    pub use crate::duration_input::Model as DurationInput;
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{new_binding, with_help, with_keys_str, Binding, KeyMap};
    pub use crate::timer::{
        format_display, Model as Timer, Status, LONG_BREAK_MINUTES, SHORT_BREAK_MINUTES,
    };
    pub use crate::tracker::{
        new as tracker_new, with_configured_minutes, with_key_map, with_styles, without_help,
        Model as Tracker, TrackerKeyMap,
    };
    pub use crate::Component;
}
