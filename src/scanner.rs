//! Cursor over the raw instruction characters.
//!
//! The scanner owns the immutable program text and a single index into it.
//! It knows nothing about cell values or dispatch; its only non-trivial job
//! is relocating the cursor across balanced bracket pairs.

use crate::error::{TarpitError, UnmatchedBracketKind};

/// A bounds-aware cursor over the program characters.
pub struct Scanner {
    chars: Vec<char>,
    index: usize,
}

impl Scanner {
    pub fn new(chars: Vec<char>) -> Self {
        Self { chars, index: 0 }
    }

    /// The character under the cursor. Callers check [`Scanner::at_end`]
    /// first; the access itself is unguarded.
    pub fn current_char(&self) -> char {
        self.chars[self.index]
    }

    /// True once the cursor has exhausted the program.
    pub fn at_end(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// Advance the cursor one step.
    pub fn consume(&mut self) {
        self.index += 1;
    }

    /// Scan forward from the current `[` to its matching `]`, leaving the
    /// cursor on the `]`. Used to skip a loop whose condition cell is zero.
    pub fn jump_forward(&mut self) -> Result<(), TarpitError> {
        self.jump('[', ']', 1, UnmatchedBracketKind::Open)
    }

    /// Scan backward from the current `]` to its matching `[`, leaving the
    /// cursor on the `[`. Used to re-enter a loop whose cell is non-zero.
    pub fn jump_back(&mut self) -> Result<(), TarpitError> {
        self.jump(']', '[', -1, UnmatchedBracketKind::Close)
    }

    /// Iterative depth-counted scan. The bracket under the cursor counts as
    /// depth 1; every `from` nests one deeper, every `to` closes one level.
    /// Walking off either end of the program means the brackets are not
    /// balanced.
    fn jump(
        &mut self,
        from: char,
        to: char,
        step: isize,
        kind: UnmatchedBracketKind,
    ) -> Result<(), TarpitError> {
        let origin = self.index;
        let mut index = self.index as isize;
        let mut counter = 1usize;

        while counter != 0 {
            index += step;
            if index < 0 || index as usize >= self.chars.len() {
                return Err(TarpitError::UnmatchedBracket { ip: origin, kind });
            }
            let ch = self.chars[index as usize];
            if ch == from {
                counter += 1;
            } else if ch == to {
                counter -= 1;
            }
        }

        self.index = index as usize;
        Ok(())
    }
}
