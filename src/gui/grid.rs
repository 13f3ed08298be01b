//! Grid layout for the level selector
//!
//! Entries fill rows left to right. Rows stop at `max_rows`: every entry past
//! the last row is placed in the last row, overlapping what is already there.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Column/row of an entry in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

/// Grid constants, loaded as part of the level catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    pub entries_per_row: usize,
    pub max_rows: usize,
    /// Top-left of the first cell
    pub origin: (f32, f32),
    /// Horizontal space between an entry and the next column
    pub column_gap: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        GridLayout {
            entries_per_row: 5,
            max_rows: 3,
            origin: (110.0, 125.0),
            column_gap: 50.0,
        }
    }
}

impl GridLayout {
    /// Cell for the entry at `index`
    pub fn cell(&self, index: usize) -> Cell {
        let per_row = self.entries_per_row.max(1);
        let last_row = self.max_rows.max(1) - 1;

        Cell {
            col: index % per_row,
            row: (index / per_row).min(last_row),
        }
    }

    /// Resting pixel position of the entry at `index`
    ///
    /// Columns advance by the entry's own width plus the gap, rows by its
    /// height, so entries of uneven size do not line up exactly.
    pub fn position(&self, index: usize, entry_size: (u32, u32)) -> Vec2 {
        let cell = self.cell(index);
        let (width, height) = entry_size;

        Vec2::new(
            self.origin.0 + cell.col as f32 * (width as f32 + self.column_gap),
            self.origin.1 + cell.row as f32 * height as f32,
        )
    }
}

/// Horizontal slide applied to menu entries during a transition
///
/// `transition_position` is squared so the movement eases out near rest.
/// Entries arriving slide in from the left, leaving ones slide out right.
pub fn transition_slide(transition_position: f32, transitioning_on: bool) -> f32 {
    let offset = transition_position.powi(2);
    if transitioning_on { -offset * 256.0 } else { offset * 512.0 }
}
