//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, AnalyserTheme, OutputMode, Table, UserInterface};

/// Terminal UI writing to stdout, with errors on stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: AnalyserTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI, coloring output when the terminal supports it.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_colors(mode, should_use_colors())
    }

    /// Create a terminal UI with colors explicitly on or off.
    pub fn with_colors(mode: OutputMode, use_colors: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: AnalyserTheme::for_colors(use_colors),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn labeled(&mut self, label: &str, value: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_labeled(label, value)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_table(&mut self, table: &Table) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", table.render()).ok();
        }
    }

    fn data(&mut self, data: &str) {
        writeln!(self.out, "{}", data).ok();
    }
}

/// Create the terminal UI for the given mode.
pub fn create_ui(mode: OutputMode, no_color: bool) -> TerminalUI {
    if no_color {
        TerminalUI::with_colors(mode, false)
    } else {
        TerminalUI::new(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_ui_keeps_mode() {
        let ui = create_ui(OutputMode::Quiet, true);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn quiet_ui_writes_nothing_for_status() {
        let mut ui = TerminalUI::with_colors(OutputMode::Quiet, false);
        ui.message("hidden");
        ui.success("hidden");
        ui.show_table(&Table::new(vec!["A"]));
    }
}
