//! HTML report rendering.
//!
//! The report is a fixed template with `{{ name }}` placeholders, filled in a
//! single pass so substituted text is never re-scanned for placeholders.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::{Captures, Regex};
use tracing::info;

use crate::analysis::{DisplayRow, EvaluationRun};
use crate::error::Result;
use crate::steps::StepStatus;

/// File name of the written report.
pub const REPORT_FILE: &str = "pa-report.html";

const TEMPLATE: &str = include_str!("template.html");

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{ ([a-z_]+) \}\}").expect("placeholder regex must compile")
});

/// Renders an [`EvaluationRun`] as a standalone HTML page.
pub struct ReportWriter<'a> {
    run: &'a EvaluationRun,
    version: &'a str,
}

impl<'a> ReportWriter<'a> {
    /// Create a writer for `run`, stamping the crate version.
    pub fn new(run: &'a EvaluationRun) -> Self {
        Self {
            run,
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Render the report with the current time.
    pub fn render(&self) -> String {
        self.render_at(Utc::now())
    }

    /// Render the report with a fixed timestamp.
    pub fn render_at(&self, generated_at: DateTime<Utc>) -> String {
        let directory = escape_html(&self.run.directory().display().to_string());
        let generated_at = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true);
        let tbody = self
            .run
            .steps_for_display()
            .iter()
            .map(render_row)
            .collect::<Vec<_>>()
            .join("\n");

        PLACEHOLDER
            .replace_all(TEMPLATE, |caps: &Captures<'_>| match &caps[1] {
                "directory" => directory.clone(),
                "version" => self.version.to_string(),
                "generated_at" => generated_at.clone(),
                "tbody" => tbody.clone(),
                _ => caps[0].to_string(),
            })
            .into_owned()
    }

    /// Write `pa-report.html` into `output_dir` and return its path.
    pub fn write(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(REPORT_FILE);
        fs::write(&path, self.render())?;
        info!("Wrote report to {}", path.display());
        Ok(path)
    }
}

fn row_class(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Satisfied => "table-success",
        StepStatus::Violated => "table-danger",
        StepStatus::Irrelevant | StepStatus::Omitted => "table-secondary",
    }
}

fn render_row(row: &DisplayRow) -> String {
    format!(
        "      <tr class=\"{}\">\n        <th scope=\"row\">{}</th>\n        <td>{}</td>\n        <td>{}</td>\n      </tr>",
        row_class(row.status),
        row.position,
        escape_html(row.summary),
        row.glyph
    )
}

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
