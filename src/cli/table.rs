//! Minimal fixed-width table renderer for the menu listings.

/// A table with headers and string rows, rendered with padded columns.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let mut width = header.chars().count();
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(cell.chars().count());
                    }
                }
                width
            })
            .collect()
    }

    fn render_row(row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = widths
            .iter()
            .copied()
            .enumerate()
            .map(|(idx, width)| {
                let cell = row.get(idx).map(String::as_str).unwrap_or("");
                format!("{cell:<width$}")
            })
            .collect();
        cells.join(" | ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let rule_len = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);

        let mut out = String::new();
        out.push_str(&Self::render_row(&self.headers, &widths));
        out.push('\n');
        out.push_str(&"-".repeat(rule_len));
        for row in &self.rows {
            out.push('\n');
            out.push_str(&Self::render_row(row, &widths));
        }
        out
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}
