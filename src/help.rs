//! Help line for the tracker.
//!
//! Renders the bindings of a [`KeyMap`] either as a single line
//! (`s start • p pause • x stop`) or, when `show_all` is set, as columns of
//! grouped bindings. Disabled bindings are skipped, and when a `width` is set
//! the line is cut with an ellipsis instead of wrapping.
//!
//! ```rust
//! use pomodoro_tracker::help::Model;
//! use pomodoro_tracker::tracker::TrackerKeyMap;
//!
//! let help = Model::new();
//! let line = help.view(&TrackerKeyMap::default());
//! assert!(!line.is_empty());
//! ```

use crate::key::{Binding, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles for the help line.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style of the ellipsis shown when the line is cut.
    pub ellipsis: Style,
    /// Key column style in the short view.
    pub short_key: Style,
    /// Description style in the short view.
    pub short_desc: Style,
    /// Separator style in the short view.
    pub short_separator: Style,
    /// Key column style in the full view.
    pub full_key: Style,
    /// Description style in the full view.
    pub full_desc: Style,
    /// Column separator style in the full view.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// The help line model.
#[derive(Debug, Clone)]
pub struct Model {
    /// Show the grouped full help instead of the single line.
    pub show_all: bool,
    /// Maximum width in cells. Zero means unlimited.
    pub width: usize,
    /// Separator between items in the short view.
    pub short_separator: String,
    /// Separator between columns in the full view.
    pub full_separator: String,
    /// Marker appended when items were cut.
    pub ellipsis: String,
    /// Rendering styles.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help model with default styles and no width limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the width limit.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the help for a key map.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings on one line.
    pub fn short_help_view(&self, bindings: Vec<&Binding>) -> String {
        let mut builder = String::new();
        let mut total_width = 0;
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        for kb in bindings.iter().filter(|b| b.enabled()) {
            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let help = kb.help();
            let key_part = self.styles.short_key.clone().inline(true).render(&help.key);
            let desc_part = self
                .styles
                .short_desc
                .clone()
                .inline(true)
                .render(&help.desc);
            let item = format!("{}{} {}", sep, key_part, desc_part);
            let item_width = lipgloss::width_visible(&item);

            if let Some(tail) = self.should_add_item(total_width, item_width) {
                builder.push_str(&tail);
                break;
            }

            total_width += item_width;
            builder.push_str(&item);
        }
        builder
    }

    /// Renders groups of bindings as side-by-side columns.
    pub fn full_help_view(&self, groups: Vec<Vec<&Binding>>) -> String {
        let mut columns = Vec::new();
        let mut total_width = 0;
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);

        for group in groups.iter().filter(|g| should_render_column(g)) {
            let rows: Vec<String> = group
                .iter()
                .filter(|b| b.enabled())
                .map(|b| {
                    let help = b.help();
                    let key_part = self.styles.full_key.clone().inline(true).render(&help.key);
                    let desc_part = self
                        .styles
                        .full_desc
                        .clone()
                        .inline(true)
                        .render(&help.desc);
                    format!("{} {}", key_part, desc_part)
                })
                .collect();
            let column = rows.join("\n");
            let column_width = lipgloss::width_visible(&column);

            if let Some(tail) = self.should_add_item(total_width, column_width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }

            total_width += column_width;
            columns.push(column);
        }

        let mut parts: Vec<&str> = Vec::new();
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                parts.push(separator.as_str());
            }
            parts.push(column.as_str());
        }
        lipgloss::join_horizontal(lipgloss::TOP, &parts)
    }

    fn should_add_item(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width == 0 || total_width + item_width <= self.width {
            return None;
        }
        let tail = format!(
            " {}",
            self.styles
                .ellipsis
                .clone()
                .inline(true)
                .render(&self.ellipsis)
        );
        if total_width + lipgloss::width_visible(&tail) < self.width {
            Some(tail)
        } else {
            Some(String::new())
        }
    }
}

/// Whether a group has at least one enabled binding.
pub fn should_render_column(bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.enabled())
}
