//! Side channel for non-fatal messages produced during a run.
//!
//! Wraparound warnings and the optional step trace go through a
//! [`Diagnostics`] sink owned by the interpreter instead of being printed
//! directly, so callers decide where (and whether) they appear.

use std::fmt;

use crate::program::Instruction;
use crate::tape::Wraparound;

/// A cell wrapped on `+` or `-`. Execution continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    pub kind: Wraparound,
    pub pc: usize,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Wraparound::Overflow => write!(f, "integer overflow at instruction {}", self.pc),
            Wraparound::Underflow => write!(f, "integer underflow at instruction {}", self.pc),
        }
    }
}

/// One executed instruction, as shown in the debug table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTrace {
    pub step: usize,
    pub pc: usize,
    pub cursor: usize,
    pub cell_before: u8,
    pub instruction: Instruction,
    pub action: String,
}

/// Receives advisories and, when tracing is wanted, per-step records.
pub trait Diagnostics {
    fn advisory(&mut self, advisory: &Advisory);

    /// Whether the interpreter should build [`StepTrace`] records at all.
    fn wants_steps(&self) -> bool {
        false
    }

    fn step(&mut self, _trace: &StepTrace) {}
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn advisory(&mut self, advisory: &Advisory) {
        (**self).advisory(advisory)
    }

    fn wants_steps(&self) -> bool {
        (**self).wants_steps()
    }

    fn step(&mut self, trace: &StepTrace) {
        (**self).step(trace)
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn advisory(&mut self, _advisory: &Advisory) {}
}

/// Keeps every advisory in memory.
#[derive(Debug, Default, Clone)]
pub struct CollectedDiagnostics {
    pub advisories: Vec<Advisory>,
}

impl Diagnostics for CollectedDiagnostics {
    fn advisory(&mut self, advisory: &Advisory) {
        self.advisories.push(*advisory);
    }
}
