//! The memory tape: a sparse, grow-right array of byte cells.
//!
//! Cells are addressed from 0 and hold values in `[0, 255]`. The tape has no
//! upper bound; positions that have never been touched read as 0. Moving the
//! pointer left of cell 0 is an error — the tape never extends in the
//! negative direction.

use std::collections::HashMap;

use crate::error::TarpitError;

/// Number of distinct values a cell can hold. Fixed by the language, not
/// configurable.
pub const CELL_SIZE: i64 = 256;

/// Sparse cell store plus the data pointer.
pub struct Tape {
    pointer_position: usize,
    cells: HashMap<usize, u8>,
}

impl Tape {
    /// A fresh tape: every cell 0, pointer at cell 0.
    pub fn new() -> Self {
        Self {
            pointer_position: 0,
            cells: HashMap::new(),
        }
    }

    /// Index of the currently active cell.
    pub fn pointer_position(&self) -> usize {
        self.pointer_position
    }

    /// Value of the current cell. A cell that has never been written is
    /// materialized to 0 on first read; the default lives in the container,
    /// not in the callers.
    pub fn cell_value(&mut self) -> u8 {
        *self.cells.entry(self.pointer_position).or_insert(0)
    }

    /// Store `value` in the current cell. Rejects anything outside the cell
    /// domain; increment/decrement route through here so they stay valid by
    /// construction, and the input path relies on the same check.
    pub fn set_cell_value(&mut self, value: i64) -> Result<(), TarpitError> {
        if !(0..CELL_SIZE).contains(&value) {
            return Err(TarpitError::InvalidValue { value });
        }
        self.cells.insert(self.pointer_position, value as u8);
        Ok(())
    }

    /// Add 1 to the current cell, wrapping 255 -> 0.
    pub fn increment_cell_value(&mut self) -> Result<(), TarpitError> {
        let value = (i64::from(self.cell_value()) + 1).rem_euclid(CELL_SIZE);
        self.set_cell_value(value)
    }

    /// Subtract 1 from the current cell, wrapping 0 -> 255.
    pub fn decrement_cell_value(&mut self) -> Result<(), TarpitError> {
        let value = (i64::from(self.cell_value()) - 1).rem_euclid(CELL_SIZE);
        self.set_cell_value(value)
    }

    /// Move the pointer one cell to the right. The tape grows without limit.
    pub fn increment_pointer(&mut self) {
        self.pointer_position += 1;
    }

    /// Move the pointer one cell to the left. Fails at cell 0 without
    /// changing any state.
    pub fn decrement_pointer(&mut self) -> Result<(), TarpitError> {
        if self.pointer_position == 0 {
            return Err(TarpitError::PointerBoundary);
        }
        self.pointer_position -= 1;
        Ok(())
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}
