//! The dispatch loop binding tokenizer output to tape and I/O effects.

use std::io::{self, Read, Write};

use crate::error::TarpitError;
use crate::tape::Tape;
use crate::tokenizer::{Step, Tokenizer};

/// Executes a tarpit program to completion.
///
/// The interpreter owns the tokenizer and the tape for the duration of one
/// run and has no state of its own beyond running/terminated. By default `.`
/// writes to stdout and `,` reads from stdin; both can be redirected through
/// hooks for embedding and testing.
pub struct Interpreter {
    tokenizer: Tokenizer,
    tape: Tape,
    // Optional hooks:
    output_sink: Option<Box<dyn Fn(&[u8]) + Send + Sync>>,
    input_provider: Option<Box<dyn Fn() -> Option<u8> + Send + Sync>>,
}

impl Interpreter {
    pub fn new(tokenizer: Tokenizer, tape: Tape) -> Self {
        Self {
            tokenizer,
            tape,
            output_sink: None,
            input_provider: None,
        }
    }

    /// Build an interpreter over `source_text` with a fresh, all-zero tape.
    pub fn from_source(source_text: &str) -> Self {
        Self::new(Tokenizer::new(source_text), Tape::new())
    }

    /// Provide an output sink. When set, `.` sends bytes to this sink instead
    /// of stdout. The sink receives a single-byte slice per `.`.
    pub fn set_output_sink<F>(&mut self, sink: F)
    where
        F: Fn(&[u8]) + Send + Sync + 'static,
    {
        self.output_sink = Some(Box::new(sink));
    }

    /// Provide an input provider. When set, `,` reads from this provider
    /// instead of stdin. Returning `None` indicates the input is exhausted.
    pub fn set_input_provider<F>(&mut self, provider: F)
    where
        F: Fn() -> Option<u8> + Send + Sync + 'static,
    {
        self.input_provider = Some(Box::new(provider));
    }

    /// Run the program until the tokenizer reports end of program.
    ///
    /// Returns `Ok(())` on normal termination or the first fatal
    /// [`TarpitError`]. There are no retries; any failure ends the run.
    pub fn run(&mut self) -> Result<(), TarpitError> {
        loop {
            let cell_value = self.tape.cell_value();
            match self.tokenizer.next(cell_value)? {
                Step::EndOfProgram => return Ok(()),
                Step::Instruction(instruction) => match instruction {
                    '+' => self.tape.increment_cell_value()?,
                    '-' => self.tape.decrement_cell_value()?,
                    '>' => self.tape.increment_pointer(),
                    '<' => self.tape.decrement_pointer()?,
                    '.' => {
                        let byte = self.tape.cell_value();
                        self.write_byte(byte)?;
                    }
                    ',' => {
                        // A zero byte is the "no input available" sentinel;
                        // exhausted input is treated the same way. Either one
                        // leaves the tape untouched.
                        match self.read_byte()? {
                            Some(0) | None => {}
                            Some(byte) => self.tape.set_cell_value(i64::from(byte))?,
                        }
                    }
                    // Comments and any bracket that leaks out of a degenerate
                    // adjacent-bracket sequence are no-ops.
                    _ => {}
                },
            }
        }
    }

    /// Write exactly one byte per `.`, flushed immediately so every output
    /// instruction is one observable write.
    fn write_byte(&mut self, byte: u8) -> Result<(), TarpitError> {
        if let Some(sink) = self.output_sink.as_ref() {
            (sink)(&[byte]);
            return Ok(());
        }
        let mut stdout = io::stdout();
        stdout
            .write_all(&[byte])
            .and_then(|_| stdout.flush())
            .map_err(|source| TarpitError::Io { source })
    }

    /// Request exactly one byte. `None` means the input is exhausted.
    fn read_byte(&mut self) -> Result<Option<u8>, TarpitError> {
        if let Some(provider) = self.input_provider.as_ref() {
            return Ok((provider)());
        }
        let mut buf = [0u8; 1];
        match io::stdin().read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(source) => Err(TarpitError::Io { source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Run `source` with canned input bytes, collecting everything `.` emits.
    fn run_collecting(source: &str, input: &[u8]) -> (Result<(), TarpitError>, Vec<u8>) {
        let output = Arc::new(Mutex::new(Vec::new()));
        let sink_output = Arc::clone(&output);

        let queue = Mutex::new(input.iter().copied().collect::<VecDeque<u8>>());

        let mut interpreter = Interpreter::from_source(source);
        interpreter.set_output_sink(move |bytes| {
            sink_output.lock().unwrap().extend_from_slice(bytes);
        });
        interpreter.set_input_provider(move || queue.lock().unwrap().pop_front());

        let result = interpreter.run();
        let collected = output.lock().unwrap().clone();
        (result, collected)
    }

    #[test]
    fn outputs_cell_value_as_a_single_byte() {
        let (result, output) = run_collecting("+++.", &[]);
        assert!(result.is_ok());
        assert_eq!(output, vec![3]);
    }

    #[test]
    fn loop_decrements_cell_to_zero_then_terminates() {
        let (result, output) = run_collecting("+[-].", &[]);
        assert!(result.is_ok());
        assert_eq!(output, vec![0]);
    }

    #[test]
    fn loop_with_zero_cell_on_entry_never_runs() {
        // The body would emit a byte on every pass; skipping emits none.
        let (result, output) = run_collecting("[.]", &[]);
        assert!(result.is_ok());
        assert!(output.is_empty());
    }

    #[test]
    fn moved_pointer_reads_default_zero() {
        let (result, output) = run_collecting(">>>>>.", &[]);
        assert!(result.is_ok());
        assert_eq!(output, vec![0]);
    }

    #[test]
    fn leading_left_move_is_a_pointer_boundary_error() {
        let (result, _) = run_collecting("<", &[]);
        assert!(matches!(result, Err(TarpitError::PointerBoundary)));
    }

    #[test]
    fn nested_loops_multiply() {
        // 2 outer passes, each adding 3 then 2*3 via the inner loop: cell 2
        // ends at 12.
        let (result, output) = run_collecting("++[>+++[>++<-]<-]>>.", &[]);
        assert!(result.is_ok());
        assert_eq!(output, vec![12]);
    }

    #[test]
    fn input_stores_nonzero_byte_in_current_cell() {
        let (result, output) = run_collecting(",.", &[65]);
        assert!(result.is_ok());
        assert_eq!(output, vec![65]);
    }

    #[test]
    fn zero_input_byte_is_ignored_without_invalid_value() {
        let (result, output) = run_collecting(",", &[0]);
        assert!(result.is_ok());
        assert!(output.is_empty());
    }

    #[test]
    fn zero_input_byte_leaves_cell_untouched() {
        let (result, output) = run_collecting("+++,.", &[0]);
        assert!(result.is_ok());
        assert_eq!(output, vec![3]);
    }

    #[test]
    fn exhausted_input_leaves_cell_untouched() {
        let (result, output) = run_collecting("+,.", &[]);
        assert!(result.is_ok());
        assert_eq!(output, vec![1]);
    }

    #[test]
    fn comment_characters_are_ignored() {
        let (result, output) = run_collecting("say three: +++ then print .", &[]);
        assert!(result.is_ok());
        assert_eq!(output, vec![3]);
    }

    #[test]
    fn unmatched_open_bracket_aborts_the_run() {
        let (result, _) = run_collecting("[+", &[]);
        assert!(matches!(result, Err(TarpitError::UnmatchedBracket { .. })));
    }

    #[test]
    fn unmatched_close_bracket_aborts_the_run() {
        let (result, _) = run_collecting("+]", &[]);
        assert!(matches!(result, Err(TarpitError::UnmatchedBracket { .. })));
    }

    #[test]
    fn high_bytes_are_emitted_verbatim() {
        let code = "+".repeat(200) + ".";
        let (result, output) = run_collecting(&code, &[]);
        assert!(result.is_ok());
        assert_eq!(output, vec![200]);
    }
}
