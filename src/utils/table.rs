//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Display width above which a cell is truncated with "...".
const MAX_CELL_WIDTH: usize = 40;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct TextTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            columns: headers
                .iter()
                .map(|h| Column {
                    header: h.as_ref().to_string(),
                    width: UnicodeWidthStr::width(h.as_ref()),
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        let row: Vec<String> = row.into_iter().map(|c| truncate(&c)).collect();
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad(cell, col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn truncate(s: &str) -> String {
    if UnicodeWidthStr::width(s) <= MAX_CELL_WIDTH {
        return s.to_string();
    }
    let mut t: String = s.chars().take(MAX_CELL_WIDTH - 3).collect();
    t.push_str("...");
    t
}

// format! pads by char count, which is wrong for wide glyphs.
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}
