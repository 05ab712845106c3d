//! Visual theme and styling.

use console::Style;

/// The analyser's visual theme.
#[derive(Debug, Clone)]
pub struct AnalyserTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for highlighted values such as paths and counts (green).
    pub info: Style,
}

impl Default for AnalyserTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyserTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().green(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_colors(use_colors: bool) -> Self {
        if use_colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(msg))
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(msg))
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }

    /// Format a label followed by a highlighted value.
    pub fn format_labeled(&self, label: &str, value: &str) -> String {
        format!("{} {}", label, self.info.apply_to(value))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_unchanged() {
        let theme = AnalyserTheme::plain();
        assert_eq!(theme.format_success("Complete"), "Complete");
        assert_eq!(theme.format_warning("Caution"), "Caution");
        assert_eq!(theme.format_error("Failed"), "Failed");
    }

    #[test]
    fn labeled_joins_label_and_value() {
        let theme = AnalyserTheme::plain();
        assert_eq!(
            theme.format_labeled("Using configuration", "/work/.pa.yml"),
            "Using configuration /work/.pa.yml"
        );
    }

    #[test]
    fn for_colors_selects_theme() {
        let plain = AnalyserTheme::for_colors(false);
        assert_eq!(plain.format_success("x"), "x");
        let _ = AnalyserTheme::for_colors(true).format_success("x");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = AnalyserTheme::default();
        let new = AnalyserTheme::new();
        assert_eq!(default.format_error("test"), new.format_error("test"));
    }
}
