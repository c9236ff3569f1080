//! Text rendering for `show` and `printSchema`

use std::fmt;

use super::DataFrame;

/// Default number of rows printed by [`DataFrame::show`]
pub const DEFAULT_SHOW_ROWS: usize = 20;

/// Default cell width limit used when truncation is on
pub const DEFAULT_TRUNCATE: usize = 20;

fn truncate_cell(cell: String, truncate: usize) -> String {
    let len = cell.chars().count();
    if truncate == 0 || len <= truncate {
        return cell;
    }
    if truncate < 4 {
        cell.chars().take(truncate).collect()
    } else {
        let mut out: String = cell.chars().take(truncate - 3).collect();
        out.push_str("...");
        out
    }
}

fn pad(cell: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.chars().count()));
    if right_align {
        format!("{}{}", fill, cell)
    } else {
        format!("{}{}", cell, fill)
    }
}

impl DataFrame {
    /// Render the first `num_rows` rows as an ASCII table
    ///
    /// With `truncate > 0` cells longer than `truncate` characters are cut and
    /// all cells are right-aligned; with `truncate == 0` cells are printed in
    /// full and left-aligned.
    pub fn show_string(&self, num_rows: usize, truncate: usize) -> String {
        let shown = num_rows.min(self.count());
        let header: Vec<String> = self
            .columns()
            .into_iter()
            .map(|c| truncate_cell(c, truncate))
            .collect();
        let body: Vec<Vec<String>> = (0..shown)
            .map(|row| {
                self.series()
                    .iter()
                    .map(|s| truncate_cell(s.values()[row].to_string(), truncate))
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count().max(3)).collect();
        for row in &body {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let right_align = truncate > 0;
        let sep: String = {
            let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            format!("+{}+\n", dashes.join("+"))
        };
        let render_line = |cells: &[String]| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| pad(c, *w, right_align))
                .collect();
            format!("|{}|\n", padded.join("|"))
        };

        let mut out = String::new();
        out.push_str(&sep);
        out.push_str(&render_line(&header));
        out.push_str(&sep);
        for row in &body {
            out.push_str(&render_line(row));
        }
        out.push_str(&sep);
        if self.count() > shown {
            let noun = if shown == 1 { "row" } else { "rows" };
            out.push_str(&format!("only showing top {} {}\n", shown, noun));
        }
        out
    }

    /// Print the first 20 rows with truncation
    pub fn show(&self) {
        self.show_with(DEFAULT_SHOW_ROWS, true);
    }

    /// Print the first `num_rows` rows, truncating long cells when asked
    pub fn show_with(&self, num_rows: usize, truncate: bool) {
        let width = if truncate { DEFAULT_TRUNCATE } else { 0 };
        println!("{}", self.show_string(num_rows, width));
    }

    /// Print the schema as a tree
    pub fn print_schema(&self) {
        println!("{}", self.schema().tree_string());
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.show_string(DEFAULT_SHOW_ROWS, DEFAULT_TRUNCATE))
    }
}
