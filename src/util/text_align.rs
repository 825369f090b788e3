//! Column alignment for help tables.
//!
//! Rows are lists of cells. Every column except the last is padded to the
//! width of its widest cell, capped at `width_max`, then followed by
//! `col_sep` spaces. A cell wider than the cap is written whole and pushes
//! the rest of its row to the right.

use crate::constants::{HELP_COLUMN_GAP, HELP_WIDTH_MAX};

#[derive(Debug, Clone)]
pub struct TextAlign {
    rows: Vec<Vec<String>>,
    width_max: usize,
    col_sep: usize,
}

impl Default for TextAlign {
    fn default() -> Self {
        TextAlign::new(HELP_WIDTH_MAX, HELP_COLUMN_GAP)
    }
}

impl TextAlign {
    pub fn new(width_max: usize, col_sep: usize) -> Self {
        TextAlign { rows: Vec::new(), width_max, col_sep }
    }

    pub fn add_line<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let w = cell.chars().count().min(self.width_max);
                match widths.get_mut(i) {
                    Some(slot) => *slot = (*slot).max(w),
                    None => widths.push(w),
                }
            }
        }
        widths
    }

    /// Formatted table, each row terminated by `\n`.
    pub fn text(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();
        for row in &self.rows {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                line.push_str(cell);
                if i + 1 == row.len() {
                    break;
                }
                let len = cell.chars().count();
                let pad = widths[i].saturating_sub(len) + self.col_sep;
                line.extend(std::iter::repeat(' ').take(pad));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}
