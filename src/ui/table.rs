//! Table rendering for formatted output.

use console::measure_text_width;

/// A box-drawn table with an optional full-width footer.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    footer: Option<String>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            footer: None,
            column_widths,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row: Vec<String> = row.iter().map(|s| s.to_string()).collect();

        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(measure_text_width(cell));
            }
        }

        self.rows.push(row);
    }

    /// Set a footer line spanning all columns.
    pub fn set_footer(&mut self, footer: impl Into<String>) {
        self.footer = Some(footer.into());
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let widths = self.effective_widths();
        let mut lines = Vec::new();

        lines.push(render_border(&widths, '┌', Some('┬'), '┐'));
        lines.push(render_row(&widths, &self.headers));
        lines.push(render_border(&widths, '├', Some('┼'), '┤'));

        for row in &self.rows {
            lines.push(render_row(&widths, row));
        }

        if let Some(footer) = &self.footer {
            lines.push(render_border(&widths, '├', Some('┴'), '┤'));
            let inner = spanned_width(&widths);
            lines.push(format!("│ {} │", pad(footer, inner)));
            lines.push(render_border(&widths, '└', None, '┘'));
        } else {
            lines.push(render_border(&widths, '└', Some('┴'), '┘'));
        }

        lines.join("\n")
    }

    // Widen the last column when the footer needs more room than the columns.
    fn effective_widths(&self) -> Vec<usize> {
        let mut widths = self.column_widths.clone();
        if let Some(footer) = &self.footer {
            let needed = measure_text_width(footer);
            let available = spanned_width(&widths);
            if needed > available {
                if let Some(last) = widths.last_mut() {
                    *last += needed - available;
                }
            }
        }
        widths
    }
}

// Width of a cell spanning every column, separators included.
fn spanned_width(widths: &[usize]) -> usize {
    let total: usize = widths.iter().map(|w| w + 3).sum();
    total.saturating_sub(3)
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(measure_text_width(cell));
    format!("{}{}", cell, " ".repeat(fill))
}

fn render_border(widths: &[usize], left: char, mid: Option<char>, right: char) -> String {
    let mut s = String::new();
    s.push(left);

    for (i, width) in widths.iter().enumerate() {
        s.push_str(&"─".repeat(width + 2));
        if i < widths.len() - 1 {
            s.push(mid.unwrap_or('─'));
        }
    }

    s.push(right);
    s
}

fn render_row(widths: &[usize], row: &[String]) -> String {
    let mut s = String::from("│");

    for (i, width) in widths.iter().enumerate() {
        let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
        s.push_str(&format!(" {} │", pad(cell, *width)));
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_empty() {
        let table = Table::new(vec!["A", "B"]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);

        let output = table.render();
        assert!(output.contains("A"));
        assert!(output.contains("B"));
    }

    #[test]
    fn table_with_rows() {
        let mut table = Table::new(vec!["#", "Analyse step", "Status"]);
        table.add_row(vec!["1", "Use continuous integration.", "✅"]);
        table.add_row(vec!["2", "Enforce a coding style.", "⛔"]);

        assert_eq!(table.row_count(), 2);

        let output = table.render();
        assert!(output.contains("Use continuous integration."));
        assert!(output.contains("⛔"));
    }

    #[test]
    fn table_uses_box_drawing() {
        let table = Table::new(vec!["Test"]);
        let output = table.render();

        assert!(output.contains("┌"));
        assert!(output.contains("┐"));
        assert!(output.contains("└"));
        assert!(output.contains("┘"));
        assert!(output.contains("│"));
        assert!(output.contains("─"));
    }

    #[test]
    fn table_handles_missing_cells() {
        let mut table = Table::new(vec!["A", "B", "C"]);
        table.add_row(vec!["only", "two"]);

        let output = table.render();
        assert!(output.contains("only"));
        assert!(output.contains("two"));
    }

    #[test]
    fn rows_have_equal_display_width() {
        let mut table = Table::new(vec!["#", "Step", "Status"]);
        table.add_row(vec!["1", "short", "✅"]);
        table.add_row(vec!["10", "a longer summary", "🔕"]);
        table.set_footer("Ran 2 analysis steps.");

        let output = table.render();
        let widths: Vec<_> = output.lines().map(measure_text_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }

    #[test]
    fn footer_spans_columns() {
        let mut table = Table::new(vec!["A", "B"]);
        table.add_row(vec!["a", "b"]);
        table.set_footer("A footer wider than both columns together");

        let output = table.render();
        let lines: Vec<_> = output.lines().collect();

        // top, header, separator, row, footer separator, footer, bottom
        assert_eq!(lines.len(), 7);
        assert!(lines[4].contains("┴"));
        assert!(lines[5].contains("A footer wider"));
        assert!(!lines[6].contains("┴"));
    }

    #[test]
    fn table_render_consistency() {
        let mut table = Table::new(vec!["Step", "Duration", "Status"]);
        table.add_row(vec!["setup", "1.2s", "✅"]);
        table.add_row(vec!["build", "45.3s", "✅"]);
        table.add_row(vec!["test", "5.0s", "⛔"]);

        let output = table.render();
        let lines: Vec<_> = output.lines().collect();

        // Should have: top border, header, separator, 3 data rows, bottom border
        assert_eq!(lines.len(), 7);
    }
}
