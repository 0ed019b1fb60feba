use std::fmt;

/// Errors that can occur while running a tarpit program.
///
/// Reaching the end of the program is not an error; the tokenizer reports it
/// as [`Step::EndOfProgram`](crate::Step) and the run ends cleanly. Every
/// variant here is fatal to the run.
#[derive(Debug, thiserror::Error)]
pub enum TarpitError {
    /// The data pointer attempted to move left of cell 0. The tape only grows
    /// to the right.
    #[error("Pointer moved below cell 0")]
    PointerBoundary,

    /// A cell was assigned a value outside the cell domain `[0, 255]`.
    #[error("Invalid cell value {value} (cells hold 0..=255)")]
    InvalidValue { value: i64 },

    /// A bracket jump scanned off the end of the program; the loops are not
    /// balanced. `ip` is the index of the bracket the jump started from.
    #[error("Unmatched bracket {kind} at instruction {ip}")]
    UnmatchedBracket { ip: usize, kind: UnmatchedBracketKind },

    /// An underlying I/O error occurred while writing output or reading input.
    #[error("I/O error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}

/// Which side of a loop was unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmatchedBracketKind {
    Open,
    Close,
}

impl fmt::Display for UnmatchedBracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnmatchedBracketKind::Open => write!(f, "'['"),
            UnmatchedBracketKind::Close => write!(f, "']'"),
        }
    }
}
