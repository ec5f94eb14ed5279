//! Countdown timer core for the Pomodoro tracker.
//!
//! This module holds the whole countdown state: remaining seconds, whether the
//! timer is running, and the configured custom duration. It exposes the
//! command handlers the tracker's controls call (start, pause, stop, set,
//! breaks) and processes the once-per-second [`TickMsg`].
//!
//! # Basic Usage
//!
//! ```rust
//! use pomodoro_tracker::timer::{new, Status};
//!
//! let mut timer = new();
//! assert_eq!(timer.remaining_seconds(), 40 * 60);
//! assert_eq!(timer.status(), Status::Paused);
//! assert_eq!(timer.view(), "40:00");
//!
//! // Returns the first tick command; hand it to the bubbletea runtime.
//! let _cmd = timer.start();
//! assert!(timer.running());
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use pomodoro_tracker::timer::{new, Model};
//!
//! struct App {
//!     timer: Model,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut timer = new();
//!         let cmd = timer.start();
//!         (Self { timer }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Ticks are filtered by id and tag, so forwarding everything is safe.
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("{} {}", self.timer.view(), self.timer.status())
//!     }
//! }
//! ```
//!
//! # Tick Loop
//!
//! The timer re-arms a one-shot [`bubbletea_rs::tick`] after every accepted
//! tick. Each tick carries the timer's `id` and the current `tag`. Any
//! transition out of the running state bumps the tag, so a tick that was
//! already in flight arrives stale and is dropped. At most one tick loop per
//! timer is therefore live at a time.

use crate::error::DurationError;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use std::fmt;
use std::num::IntErrorKind;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tracing::{debug, trace};

/// Custom duration used when a timer is created.
pub const DEFAULT_MINUTES: u32 = 40;
/// Smallest custom duration the minutes field accepts.
pub const MIN_MINUTES: u32 = 1;
/// Largest custom duration the minutes field accepts.
pub const MAX_MINUTES: u32 = 120;
/// The "10m Break" preset.
pub const SHORT_BREAK_MINUTES: u32 = 10;
/// The "1hr Break" preset.
pub const LONG_BREAK_MINUTES: u32 = 60;
/// Time between two ticks. Every tick removes exactly one second.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Formats a number of seconds as `MM:SS`.
///
/// Minutes are `seconds / 60` and are padded to at least two digits. There is
/// no hour rollover, so 100 minutes renders as `100:00`.
///
/// # Examples
///
/// ```rust
/// use pomodoro_tracker::timer::format_display;
///
/// assert_eq!(format_display(125), "02:05");
/// assert_eq!(format_display(40 * 60), "40:00");
/// assert_eq!(format_display(0), "00:00");
/// assert_eq!(format_display(100 * 60 + 1), "100:01");
/// ```
pub fn format_display(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Parses the text of the minutes field strictly.
///
/// Surrounding whitespace is ignored. Anything that is not an integer in
/// `MIN_MINUTES..=MAX_MINUTES` is an error. Digits too large for an `i64`
/// saturate, so they still report [`DurationError::AboveMaximum`].
///
/// Trailing garbage is rejected rather than truncated: `"45abc"` is
/// [`DurationError::NotANumber`], not 45. The minutes field only accepts
/// digits, so this only matters to direct callers.
///
/// # Examples
///
/// ```rust
/// use pomodoro_tracker::error::DurationError;
/// use pomodoro_tracker::timer::parse_minutes;
///
/// assert_eq!(parse_minutes(" 45 "), Ok(45));
/// assert_eq!(parse_minutes(""), Err(DurationError::Empty));
/// assert_eq!(parse_minutes("121"), Err(DurationError::AboveMaximum(121)));
/// assert!(matches!(parse_minutes("45abc"), Err(DurationError::NotANumber(_))));
/// ```
pub fn parse_minutes(input: &str) -> Result<u32, DurationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DurationError::Empty);
    }
    let value: i64 = match trimmed.parse() {
        Ok(value) => value,
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => return Err(DurationError::NotANumber(trimmed.to_string())),
        },
    };
    check_minutes(value)
}

fn check_minutes(value: i64) -> Result<u32, DurationError> {
    if value < i64::from(MIN_MINUTES) {
        return Err(DurationError::BelowMinimum(value));
    }
    if value > i64::from(MAX_MINUTES) {
        return Err(DurationError::AboveMaximum(value));
    }
    // In range, so the conversion cannot truncate.
    Ok(value as u32)
}

/// What the status line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The countdown reached zero.
    Expired,
    /// The countdown is ticking.
    Running,
    /// Time remains but the countdown is halted.
    Paused,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::Expired => "Time's up!",
            Status::Running => "Running",
            Status::Paused => "Paused",
        };
        f.write_str(text)
    }
}

/// Message delivered once per second while a timer runs.
///
/// Timers only accept ticks carrying their own `id` and current `tag`, and
/// only while running. Everything else is silently dropped, which is how an
/// outdated tick loop is cancelled.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The timer this tick belongs to.
    pub id: i64,
    /// Generation of the tick loop that produced this message.
    tag: i64,
}

/// The countdown state of one tracker.
///
/// # Examples
///
/// ```rust
/// use pomodoro_tracker::timer::{new, Status};
///
/// let mut timer = new();
/// timer.set_custom_duration(45);
/// timer.apply_custom_duration();
/// assert_eq!(timer.remaining_seconds(), 2700);
///
/// timer.set_break(10);
/// assert_eq!(timer.remaining_seconds(), 600);
/// assert_eq!(timer.configured_minutes(), 45);
///
/// timer.stop();
/// assert_eq!(timer.remaining_seconds(), 2700);
/// assert_eq!(timer.status(), Status::Paused);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    remaining_seconds: u64,
    running: bool,
    configured_minutes: u32,
    id: i64,
    tag: i64,
}

/// Creates a timer with the default 40 minute duration, not running.
pub fn new() -> Model {
    with_minutes(DEFAULT_MINUTES)
}

/// Creates an idle timer configured for `minutes`, clamped to the allowed
/// range, with that much time remaining.
///
/// ```rust
/// use pomodoro_tracker::timer::with_minutes;
///
/// let timer = with_minutes(25);
/// assert_eq!(timer.remaining_seconds(), 1500);
/// assert_eq!(with_minutes(0).configured_minutes(), 1);
/// ```
pub fn with_minutes(minutes: u32) -> Model {
    let configured_minutes = minutes.clamp(MIN_MINUTES, MAX_MINUTES);
    Model {
        remaining_seconds: minutes_to_seconds(configured_minutes),
        running: false,
        configured_minutes,
        id: next_id(),
        tag: 0,
    }
}

fn minutes_to_seconds(minutes: u32) -> u64 {
    u64::from(minutes) * 60
}

impl Model {
    /// Unique identifier of this timer instance.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Seconds left on the countdown.
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    /// The custom duration applied by Set and Stop.
    pub fn configured_minutes(&self) -> u32 {
        self.configured_minutes
    }

    /// Whether the countdown is ticking.
    ///
    /// Always `false` once the countdown has reached zero.
    pub fn running(&self) -> bool {
        self.running && !self.expired()
    }

    /// Whether the countdown has reached zero.
    pub fn expired(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Whether Start would do anything. Drives the disabled Start control.
    pub fn can_start(&self) -> bool {
        !self.expired()
    }

    /// Current status for the status line.
    pub fn status(&self) -> Status {
        if self.expired() {
            Status::Expired
        } else if self.running {
            Status::Running
        } else {
            Status::Paused
        }
    }

    /// Starts the countdown and returns the first tick.
    ///
    /// Returns `None` without changing anything when no time remains or the
    /// timer is already running.
    ///
    /// ```rust
    /// use pomodoro_tracker::timer::new;
    ///
    /// let mut timer = new();
    /// assert!(timer.start().is_some());
    /// assert!(timer.start().is_none()); // already running
    /// ```
    pub fn start(&mut self) -> Option<Cmd> {
        if !self.can_start() || self.running {
            return None;
        }
        self.running = true;
        self.tag += 1;
        debug!(
            id = self.id,
            remaining = self.remaining_seconds,
            "timer started"
        );
        Some(self.tick())
    }

    /// Halts the countdown, keeping the remaining time.
    pub fn pause(&mut self) {
        if self.running {
            debug!(
                id = self.id,
                remaining = self.remaining_seconds,
                "timer paused"
            );
        }
        self.halt();
    }

    /// Halts the countdown and resets it to the configured duration.
    pub fn stop(&mut self) {
        self.halt();
        self.remaining_seconds = minutes_to_seconds(self.configured_minutes);
        debug!(
            id = self.id,
            configured = self.configured_minutes,
            "timer stopped"
        );
    }

    /// Stores a new custom duration, clamped into `MIN_MINUTES..=MAX_MINUTES`.
    ///
    /// Remaining time and running state are left alone; use
    /// [`Model::apply_custom_duration`] to load it.
    ///
    /// ```rust
    /// use pomodoro_tracker::timer::new;
    ///
    /// let mut timer = new();
    /// timer.set_custom_duration(-5);
    /// assert_eq!(timer.configured_minutes(), 1);
    /// timer.set_custom_duration(500);
    /// assert_eq!(timer.configured_minutes(), 120);
    /// ```
    pub fn set_custom_duration(&mut self, minutes: i64) {
        let minutes = check_minutes(minutes).unwrap_or_else(|err| {
            debug!(id = self.id, %err, "clamping custom duration");
            err.clamped()
        });
        self.configured_minutes = minutes;
    }

    /// Stores a custom duration typed by the user.
    ///
    /// Empty or non-numeric text counts as one minute.
    pub fn set_custom_duration_str(&mut self, input: &str) {
        self.configured_minutes = parse_minutes(input).unwrap_or_else(|err| {
            debug!(id = self.id, %err, "clamping custom duration");
            err.clamped()
        });
    }

    /// Loads the configured duration and halts the countdown.
    pub fn apply_custom_duration(&mut self) {
        self.halt();
        self.remaining_seconds = minutes_to_seconds(self.configured_minutes);
        debug!(
            id = self.id,
            configured = self.configured_minutes,
            "custom duration applied"
        );
    }

    /// Loads a break of `minutes` and halts the countdown.
    ///
    /// The configured duration is not changed, so Stop afterwards returns to
    /// it.
    pub fn set_break(&mut self, minutes: u32) {
        self.halt();
        self.remaining_seconds = minutes_to_seconds(minutes);
        debug!(id = self.id, minutes, "break set");
    }

    /// Starts when idle, pauses when running.
    pub fn toggle(&mut self) -> Option<Cmd> {
        if self.running() {
            self.pause();
            None
        } else {
            self.start()
        }
    }

    fn halt(&mut self) {
        if self.running {
            // Invalidates the tick that is currently in flight.
            self.tag += 1;
        }
        self.running = false;
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(TICK_INTERVAL, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// The tick the current loop is waiting for, as the runtime would deliver
    /// it.
    #[cfg(test)]
    pub(crate) fn pending_tick(&self) -> Msg {
        Box::new(TickMsg {
            id: self.id,
            tag: self.tag,
        })
    }

    /// Processes a tick.
    ///
    /// A tick for this timer and its current loop removes one second and
    /// schedules the next one. Reaching zero stops the loop.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let tick_msg = msg.downcast_ref::<TickMsg>()?;
        if tick_msg.id != self.id {
            return None;
        }
        if !self.running() || tick_msg.tag != self.tag {
            trace!(
                id = self.id,
                tag = tick_msg.tag,
                current = self.tag,
                "dropping stale tick"
            );
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.expired() {
            self.halt();
            debug!(id = self.id, "time's up");
            return None;
        }
        Some(self.tick())
    }

    /// Renders the remaining time as `MM:SS`.
    pub fn view(&self) -> String {
        format_display(self.remaining_seconds)
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
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
        new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_for(timer: &Model) -> Msg {
        timer.pending_tick()
    }

    fn advance(timer: &mut Model, seconds: u64) {
        for _ in 0..seconds {
            let msg = tick_for(timer);
            timer.update(msg);
        }
    }

    #[test]
    fn test_default_state() {
        let timer = new();
        assert_eq!(timer.remaining_seconds(), 2400);
        assert_eq!(timer.configured_minutes(), 40);
        assert!(!timer.running());
        assert_eq!(timer.status(), Status::Paused);
        assert!(timer.id() > 0);
    }

    #[test]
    fn test_unique_ids() {
        let a = new();
        let b = new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(format_display(125), "02:05");
        assert_eq!(format_display(2400), "40:00");
        assert_eq!(format_display(59), "00:59");
        assert_eq!(format_display(60), "01:00");
        assert_eq!(format_display(6000), "100:00");
        assert_eq!(format_display(7199), "119:59");
    }

    #[test]
    fn test_start_then_five_ticks() {
        let mut timer = new();
        assert!(timer.start().is_some());
        advance(&mut timer, 5);

        assert_eq!(timer.remaining_seconds(), 2395);
        assert_eq!(timer.status(), Status::Running);
        assert_eq!(timer.status().to_string(), "Running");
        assert_eq!(timer.view(), "39:55");
    }

    #[test]
    fn test_tick_returns_next_tick() {
        let mut timer = new();
        timer.start();
        let msg = tick_for(&timer);
        assert!(timer.update(msg).is_some());
    }

    #[test]
    fn test_pause_freezes_remaining() {
        let mut timer = new();
        timer.start();
        advance(&mut timer, 3);
        let in_flight = tick_for(&timer);

        timer.pause();
        assert_eq!(timer.status(), Status::Paused);
        assert!(timer.update(in_flight).is_none());
        advance(&mut timer, 10);
        assert_eq!(timer.remaining_seconds(), 2397);
    }

    #[test]
    fn test_pause_when_idle_is_harmless() {
        let mut timer = new();
        timer.pause();
        assert!(!timer.running());
        assert_eq!(timer.remaining_seconds(), 2400);
    }

    #[test]
    fn test_stop_resets_to_configured() {
        let mut timer = new();
        timer.set_custom_duration(25);
        timer.start();
        advance(&mut timer, 42);

        timer.stop();
        assert_eq!(timer.remaining_seconds(), 25 * 60);
        assert!(!timer.running());
        assert_eq!(timer.status(), Status::Paused);
    }

    #[test]
    fn test_stop_when_idle_resets_too() {
        let mut timer = new();
        timer.set_break(10);
        timer.stop();
        assert_eq!(timer.remaining_seconds(), 2400);
    }

    #[test]
    fn test_expiry_forces_idle() {
        let mut timer = with_minutes(1);
        timer.start();
        advance(&mut timer, 59);
        assert!(timer.running());

        let last = tick_for(&timer);
        assert!(timer.update(last).is_none());
        assert_eq!(timer.remaining_seconds(), 0);
        assert!(!timer.running());
        assert_eq!(timer.status(), Status::Expired);
        assert_eq!(timer.status().to_string(), "Time's up!");
        assert_eq!(timer.view(), "00:00");

        // Start is a no-op once expired.
        assert!(!timer.can_start());
        assert!(timer.start().is_none());
        assert!(!timer.running());
        assert!(timer.toggle().is_none());
    }

    #[test]
    fn test_ticks_after_expiry_do_not_underflow() {
        let mut timer = with_minutes(1);
        timer.start();
        advance(&mut timer, 120);
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn test_custom_duration_clamps() {
        let mut timer = new();
        timer.set_custom_duration(-5);
        assert_eq!(timer.configured_minutes(), 1);
        timer.set_custom_duration(0);
        assert_eq!(timer.configured_minutes(), 1);
        timer.set_custom_duration(120);
        assert_eq!(timer.configured_minutes(), 120);
        timer.set_custom_duration(121);
        assert_eq!(timer.configured_minutes(), 120);
        // Only the configured value changes.
        assert_eq!(timer.remaining_seconds(), 2400);
    }

    #[test]
    fn test_custom_duration_from_text() {
        let mut timer = new();
        timer.set_custom_duration_str("abc");
        assert_eq!(timer.configured_minutes(), 1);
        timer.set_custom_duration_str("");
        assert_eq!(timer.configured_minutes(), 1);
        timer.set_custom_duration_str("30");
        assert_eq!(timer.configured_minutes(), 30);
        timer.set_custom_duration_str("999");
        assert_eq!(timer.configured_minutes(), 120);
        timer.set_custom_duration_str("45abc");
        assert_eq!(timer.configured_minutes(), 1);
    }

    #[test]
    fn test_custom_duration_beyond_i64_saturates() {
        let mut timer = new();
        timer.set_custom_duration_str("99999999999999999999");
        assert_eq!(timer.configured_minutes(), 120);
        timer.set_custom_duration_str("-99999999999999999999");
        assert_eq!(timer.configured_minutes(), 1);
        assert_eq!(
            parse_minutes("99999999999999999999"),
            Err(DurationError::AboveMaximum(i64::MAX))
        );
    }

    #[test]
    fn test_apply_custom_duration() {
        let mut timer = new();
        timer.start();
        timer.set_custom_duration(45);
        timer.apply_custom_duration();
        assert_eq!(timer.remaining_seconds(), 2700);
        assert!(!timer.running());
    }

    #[test]
    fn test_set_break_ignores_configured() {
        let mut timer = new();
        timer.set_custom_duration(15);
        timer.start();
        timer.set_break(SHORT_BREAK_MINUTES);
        assert_eq!(timer.remaining_seconds(), 600);
        assert!(!timer.running());
        assert_eq!(timer.configured_minutes(), 15);

        timer.set_break(LONG_BREAK_MINUTES);
        assert_eq!(timer.remaining_seconds(), 3600);
    }

    #[test]
    fn test_break_recovers_from_expiry() {
        let mut timer = with_minutes(1);
        timer.start();
        advance(&mut timer, 60);
        assert!(timer.expired());

        timer.set_break(SHORT_BREAK_MINUTES);
        assert!(timer.can_start());
        assert!(timer.start().is_some());
    }

    #[test]
    fn test_double_start_keeps_single_loop() {
        let mut timer = new();
        timer.start();
        let first = tick_for(&timer);
        assert!(timer.start().is_none());
        assert!(timer.update(first).is_some());
        assert_eq!(timer.remaining_seconds(), 2399);
    }

    #[test]
    fn test_restart_drops_previous_loop() {
        let mut timer = new();
        timer.start();
        let old = tick_for(&timer);
        timer.pause();
        timer.start();

        assert!(timer.update(old).is_none());
        assert_eq!(timer.remaining_seconds(), 2400);
        advance(&mut timer, 1);
        assert_eq!(timer.remaining_seconds(), 2399);
    }

    #[test]
    fn test_wrong_id_is_ignored() {
        let mut timer = new();
        let other = new();
        timer.start();
        let msg: Msg = Box::new(TickMsg {
            id: other.id(),
            tag: timer.tag,
        });
        assert!(timer.update(msg).is_none());
        assert_eq!(timer.remaining_seconds(), 2400);
    }

    #[test]
    fn test_idle_timer_ignores_ticks() {
        let mut timer = new();
        advance(&mut timer, 5);
        assert_eq!(timer.remaining_seconds(), 2400);
    }

    #[test]
    fn test_toggle() {
        let mut timer = new();
        assert!(timer.toggle().is_some());
        assert!(timer.running());
        assert!(timer.toggle().is_none());
        assert!(!timer.running());
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("1"), Ok(1));
        assert_eq!(parse_minutes("120"), Ok(120));
        assert_eq!(parse_minutes("  "), Err(DurationError::Empty));
        assert_eq!(parse_minutes("-5"), Err(DurationError::BelowMinimum(-5)));
        assert_eq!(
            parse_minutes("4.5"),
            Err(DurationError::NotANumber("4.5".to_string()))
        );
    }

    #[test]
    fn test_with_minutes_clamps() {
        assert_eq!(with_minutes(500).configured_minutes(), 120);
        assert_eq!(with_minutes(500).remaining_seconds(), 7200);
    }
}
