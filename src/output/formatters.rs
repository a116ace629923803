//! Formatting utilities for terminal output

use crate::core::Grid;

/// Capitalise a cell for display (`qu` becomes `Qu`)
#[must_use]
pub fn format_cell(cell: &str) -> String {
    let mut chars = cell.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Grid rows with cells padded to a common width
#[must_use]
pub fn grid_lines(grid: &Grid) -> Vec<String> {
    let width = grid
        .cells()
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(1);
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|cell| format!("{:<width$}", format_cell(cell)))
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    let filled = (((value / max) * width as f64) as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
