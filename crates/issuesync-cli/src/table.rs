// SPDX-License-Identifier: Apache-2.0

//! Lightweight table printer for consistent formatting.

/// A simple table printer for rendering rows with consistent column alignment.
pub struct TablePrinter {
    /// Column widths for alignment, in characters.
    column_widths: Vec<usize>,
    /// Rows of data.
    rows: Vec<Vec<String>>,
}

impl TablePrinter {
    /// Create a new table printer with the given header row.
    pub fn with_header(header: &[&str]) -> Self {
        let mut table = Self {
            column_widths: vec![0; header.len()],
            rows: Vec::new(),
        };
        table.add_row(header.iter().map(ToString::to_string).collect());
        table
    }

    /// Add a row to the table, updating column widths as needed.
    pub fn add_row(&mut self, cells: Vec<String>) {
        for (width, cell) in self.column_widths.iter_mut().zip(&cells) {
            *width = (*width).max(cell.chars().count());
        }
        self.rows.push(cells);
    }

    /// Render the table as a formatted string.
    ///
    /// The last column is not padded, so lines carry no trailing spaces
    /// unless an inner cell is empty.
    pub fn render(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();

        for row in &self.rows {
            let last = row.len().saturating_sub(1);
            for (i, cell) in row.iter().enumerate() {
                match self.column_widths.get(i) {
                    Some(&width) if i < last => {
                        let _ = write!(output, "{cell:<width$}  ");
                    }
                    _ => output.push_str(cell),
                }
            }
            output.push('\n');
        }

        output
    }
}
