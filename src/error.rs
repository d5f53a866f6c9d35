use std::fmt;

use crate::program::Instruction;

/// Errors raised while extracting instructions from source text.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source held no `><+-.,[]` characters at all.
    #[error("Input is empty or contains no valid Brainfuck instructions")]
    NoInstructions,
}

/// Errors that abort a run. Each carries the program counter it happened at.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The data pointer attempted to move left of cell 0 or beyond the last cell.
    #[error("Pointer out of bounds at instruction {ip} (ptr={ptr}, op='{op}')")]
    PointerOutOfBounds { ip: usize, ptr: usize, op: Instruction },

    /// A bracket scan ran off the end (or start) of the program.
    #[error("Unmatched bracket {kind} at instruction {ip}")]
    UnmatchedBracket { ip: usize, kind: BracketKind },

    /// Reading input or writing output failed.
    #[error("I/O error at instruction {ip}: {source}")]
    Io {
        ip: usize,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    /// Program counter at which the run aborted.
    pub fn ip(&self) -> usize {
        match self {
            RunError::PointerOutOfBounds { ip, .. }
            | RunError::UnmatchedBracket { ip, .. }
            | RunError::Io { ip, .. } => *ip,
        }
    }
}

/// Which side of the loop was unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    Open,
    Close,
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketKind::Open => write!(f, "'['"),
            BracketKind::Close => write!(f, "']'"),
        }
    }
}
