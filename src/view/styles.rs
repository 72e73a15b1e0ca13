//! Form styling configuration.
//!
//! Provides the colors for the title, fields, switch and result line.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== FormStyles =====

/// Styles for the calculator form.
///
/// Without colors the focused field is still distinguishable through
/// bold and reversed modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormStyles {
    /// Screen title.
    pub title: Style,
    /// Field labels and unfocused borders.
    pub label: Style,
    /// Border of the focused field.
    pub focused_border: Style,
    /// Switch indicator when on.
    pub switch_on: Style,
    /// Switch indicator when off.
    pub switch_off: Style,
    /// Formatted tip on the result line.
    pub result: Style,
    /// Status bar and secondary text.
    pub muted: Style,
    /// Category headers in the help overlay.
    pub section_header: Style,
    /// Key names in the help overlay.
    pub key: Style,
}

impl FormStyles {
    /// Create FormStyles with the default color scheme.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create FormStyles with the specified color configuration.
    ///
    /// If colors are disabled, styles use modifiers only.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                title: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                label: Style::default().fg(Color::Gray),
                focused_border: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                switch_on: Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                switch_off: Style::default().fg(Color::DarkGray),
                result: Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                muted: Style::default().fg(Color::DarkGray),
                section_header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                title: Style::default().add_modifier(Modifier::BOLD),
                label: Style::default(),
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                switch_on: Style::default().add_modifier(Modifier::REVERSED),
                switch_off: Style::default(),
                result: Style::default().add_modifier(Modifier::BOLD),
                muted: Style::default(),
                section_header: Style::default().add_modifier(Modifier::BOLD),
                key: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for FormStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====
