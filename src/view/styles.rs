//! Result list styling configuration.

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
        Self::from_lookup(no_color_flag, |key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env_and_args`] with an injected variable lookup.
    pub fn from_lookup(no_color_flag: bool, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = !no_color_flag && lookup("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ListStyles =====

/// Styles of the search screen.
///
/// Without colors only modifiers remain, so the selection and the error line
/// stay distinguishable on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStyles {
    /// Search box border.
    pub input_border: Style,
    /// Cursor cell in the search box.
    pub cursor: Style,
    /// Expand/collapse chevron.
    pub chevron: Style,
    /// Selected entry header.
    pub selected: Style,
    /// Labels of expanded detail rows.
    pub detail_label: Style,
    /// Error line.
    pub error: Style,
    /// Loading indicators.
    pub loading: Style,
    /// Status bar.
    pub status: Style,
}

impl ListStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let base = Self {
            input_border: Style::default(),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            chevron: Style::default(),
            selected: Style::default().add_modifier(Modifier::REVERSED),
            detail_label: Style::default().add_modifier(Modifier::BOLD),
            error: Style::default().add_modifier(Modifier::BOLD),
            loading: Style::default().add_modifier(Modifier::ITALIC),
            status: Style::default(),
        };
        if !config.colors_enabled() {
            return base;
        }
        Self {
            input_border: base.input_border.fg(Color::Cyan),
            cursor: Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            chevron: base.chevron.fg(Color::Cyan),
            detail_label: base.detail_label.fg(Color::Gray),
            error: base.error.fg(Color::Red),
            loading: base.loading.fg(Color::Yellow),
            status: base.status.fg(Color::Gray),
            ..base
        }
    }
}

impl Default for ListStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::enabled())
    }
}

// ===== Tests =====
