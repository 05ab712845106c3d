//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use package_analyser::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.labeled("Analysing package in directory", "/work/acme");
//! ui.success("Done!");
//!
//! assert!(ui.has_message("Analysing package in directory /work/acme"));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use super::{OutputMode, Table, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    tables: Vec<String>,
    data: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages, labeled ones included.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all rendered tables.
    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    /// Get all captured data output.
    pub fn data_output(&self) -> &[String] {
        &self.data
    }

    /// Check if a message was recorded.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m == msg)
    }

    /// Check if an error containing `text` was recorded.
    pub fn has_error_containing(&self, text: &str) -> bool {
        self.errors.iter().any(|e| e.contains(text))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn labeled(&mut self, label: &str, value: &str) {
        self.messages.push(format!("{} {}", label, value));
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_table(&mut self, table: &Table) {
        self.tables.push(table.render());
    }

    fn data(&mut self, data: &str) {
        self.data.push(data.to_string());
    }
}
