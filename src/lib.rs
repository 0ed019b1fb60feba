//! A tiny tape-machine esolang interpreter library.
//!
//! This crate interprets a minimal esoteric language with eight
//! single-character instructions operating on a memory tape with a single
//! data pointer.
//!
//! Features and behaviors:
//! - Sparse tape indexed from 0, growing without limit to the right;
//!   untouched cells read as 0.
//! - Cells hold a byte; `+`/`-` wrap modulo 256.
//! - Moving left from cell 0 returns an error; the tape never extends in the
//!   negative direction.
//! - Output `.` writes the current cell as exactly one byte, flushed per
//!   instruction.
//! - Input `,` requests one raw byte; a zero byte (or exhausted input) means
//!   "no input available" and leaves the cell untouched.
//! - Loops `[`/`]` nest to arbitrary depth, resolved by depth-counted scans;
//!   a jump off the end of an unbalanced program is reported as an error.
//! - Any other character is a no-op, so programs can carry prose comments.
//!
//! Quick start:
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use turing_tarpit::Interpreter;
//!
//! let output = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&output);
//!
//! let mut interpreter = Interpreter::from_source("+++.");
//! interpreter.set_output_sink(move |bytes| sink.lock().unwrap().extend_from_slice(bytes));
//! interpreter.run().expect("program should run");
//!
//! assert_eq!(*output.lock().unwrap(), vec![3]);
//! ```

pub mod cli_util;
pub mod error;
pub mod interpreter;
pub mod scanner;
pub mod tape;
pub mod tokenizer;

pub use error::{TarpitError, UnmatchedBracketKind};
pub use interpreter::Interpreter;
pub use scanner::Scanner;
pub use tape::{CELL_SIZE, Tape};
pub use tokenizer::{Step, Tokenizer};
