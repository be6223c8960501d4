//! Badge and chrome styling.
//!
//! Severity and status values get stable per-value colors so a row can be
//! read at a glance, mirroring the badge colors of the original web UI.

use crate::model::{Severity, Status};
use ratatui::style::{Color, Modifier, Style};

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

/// Styles for badges, banners, and table chrome.
#[derive(Debug, Clone, Copy)]
pub struct UiStyles {
    enabled: bool,
}

impl UiStyles {
    /// Create styles honoring the color configuration.
    pub fn new(config: ColorConfig) -> Self {
        Self {
            enabled: config.colors_enabled(),
        }
    }

    fn colored(self, style: Style) -> Style {
        if self.enabled {
            style
        } else {
            Style::default()
        }
    }

    /// Badge style for a severity value.
    pub fn severity(self, severity: Severity) -> Style {
        let color = match severity {
            Severity::Sev1 => Color::Red,
            Severity::Sev2 => Color::LightRed,
            Severity::Sev3 => Color::Yellow,
            Severity::Sev4 => Color::Blue,
        };
        self.colored(Style::default().fg(color).add_modifier(Modifier::BOLD))
    }

    /// Badge style for a status value.
    pub fn status(self, status: Status) -> Style {
        let color = match status {
            Status::Open => Color::Red,
            Status::Mitigated => Color::Yellow,
            Status::Resolved => Color::Green,
        };
        self.colored(Style::default().fg(color))
    }

    /// Style for the error banner.
    pub fn error_banner(self) -> Style {
        self.colored(Style::default().fg(Color::White).bg(Color::Red))
    }

    /// Style for the focused table row.
    pub fn selected_row(self) -> Style {
        self.colored(Style::default().add_modifier(Modifier::REVERSED))
    }

    /// Style for header of the column currently sorted on.
    pub fn sorted_header(self) -> Style {
        self.colored(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    }

    /// Muted style for hints and secondary text.
    pub fn muted(self) -> Style {
        self.colored(Style::default().fg(Color::DarkGray))
    }

    /// Style for the active pagination button.
    pub fn active_page(self) -> Style {
        self.colored(Style::default().add_modifier(Modifier::REVERSED))
    }
}
