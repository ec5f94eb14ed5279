//! Styling for the tracker panel.
//!
//! Colors follow the familiar traffic-light scheme: green Start, yellow
//! Pause, red Stop, with the break presets in blue and purple.

use lipgloss_extras::lipgloss::AdaptiveColor;
use lipgloss_extras::prelude::*;

/// Styles used by [`super::Model::view`].
#[derive(Debug, Clone)]
pub struct Styles {
    /// The large `MM:SS` readout.
    pub time: Style,
    /// The status line under the readout.
    pub status: Style,
    /// Status line once the countdown expired.
    pub status_expired: Style,
    /// Start control.
    pub start: Style,
    /// Start control when there is no time left.
    pub start_disabled: Style,
    /// Pause control.
    pub pause: Style,
    /// Stop control.
    pub stop: Style,
    /// The "Quick Set:" label.
    pub label: Style,
    /// The 10 minute break preset.
    pub short_break: Style,
    /// The 1 hour break preset.
    pub long_break: Style,
    /// The Set control.
    pub set: Style,
    /// Left margin of the whole panel.
    pub panel: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let button = Style::new().padding(0, 1, 0, 1).bold(true);
        let chip = Style::new().padding(0, 1, 0, 1);

        Self {
            time: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#1F2937",
                Dark: "#F3F4F6",
            }),
            status: Style::new().foreground(AdaptiveColor {
                Light: "#6B7280",
                Dark: "#9CA3AF",
            }),
            status_expired: Style::new().bold(true).foreground(Color::from("#EF4444")),
            start: button
                .clone()
                .background(Color::from("#22C55E"))
                .foreground(Color::from("#FFFFFF")),
            start_disabled: button
                .clone()
                .background(Color::from("#4B5563"))
                .foreground(Color::from("#9CA3AF")),
            pause: button
                .clone()
                .background(Color::from("#EAB308"))
                .foreground(Color::from("#FFFFFF")),
            stop: button
                .background(Color::from("#EF4444"))
                .foreground(Color::from("#FFFFFF")),
            label: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#374151",
                Dark: "#D1D5DB",
            }),
            short_break: chip
                .clone()
                .background(Color::from("#DBEAFE"))
                .foreground(Color::from("#1D4ED8")),
            long_break: chip
                .clone()
                .background(Color::from("#F3E8FF"))
                .foreground(Color::from("#7E22CE")),
            set: chip
                .background(Color::from("#F3F4F6"))
                .foreground(Color::from("#374151")),
            panel: Style::new().padding(1, 2, 1, 2),
        }
    }
}
