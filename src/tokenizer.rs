//! The program-counter state machine.
//!
//! The tokenizer wraps a [`Scanner`] and resolves control flow: given the
//! current cell value it turns `[` and `]` into the instruction that logically
//! follows them, invoking scanner jumps as needed, and hands every other
//! character straight through. The dispatch loop never sees the cursor.

use crate::error::TarpitError;
use crate::scanner::Scanner;

/// One fetch from the tokenizer: either the next instruction character, or
/// the end of the program. End-of-program is the normal termination signal,
/// not an error, so it travels as data and is pattern-matched by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Instruction(char),
    EndOfProgram,
}

/// Resolves the source text into a stream of executable instructions.
pub struct Tokenizer {
    scanner: Scanner,
}

impl Tokenizer {
    pub fn new(source_text: &str) -> Self {
        Self {
            scanner: Scanner::new(source_text.chars().collect()),
        }
    }

    /// Fetch the next instruction, resolving brackets against `cell_value`.
    ///
    /// - `[` with a zero cell skips to past the matching `]`.
    /// - `]` with a zero cell consumes the whole run of adjacent `]`
    ///   terminators the cursor is resting on.
    /// - `]` with a non-zero cell re-enters the loop at the instruction after
    ///   the matching `[`, without re-checking the `[` condition.
    ///
    /// The cursor always ends one past the position of the returned element.
    pub fn next(&mut self, cell_value: u8) -> Result<Step, TarpitError> {
        if self.scanner.at_end() {
            return Ok(Step::EndOfProgram);
        }

        let mut element = self.scanner.current_char();

        match element {
            '[' => {
                if cell_value == 0 {
                    self.scanner.jump_forward()?;
                }
                self.scanner.consume();
                if self.scanner.at_end() {
                    return Ok(Step::EndOfProgram);
                }
                element = self.scanner.current_char();
            }
            ']' => {
                if cell_value == 0 {
                    while element == ']' {
                        self.scanner.consume();
                        if self.scanner.at_end() {
                            return Ok(Step::EndOfProgram);
                        }
                        element = self.scanner.current_char();
                    }
                } else {
                    self.scanner.jump_back()?;
                    self.scanner.consume();
                    if self.scanner.at_end() {
                        return Ok(Step::EndOfProgram);
                    }
                    element = self.scanner.current_char();
                }
            }
            _ => {}
        }

        self.scanner.consume();
        Ok(Step::Instruction(element))
    }
}
