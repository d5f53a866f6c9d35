//! The execution engine: walks a [`Program`] against a [`Tape`].
//!
//! Loops are resolved by scanning the program for the matching bracket each
//! time a jump is taken. There is no precomputed jump table.

use std::io::{ErrorKind, Read, Write};

use crate::diagnostics::{Advisory, Diagnostics, StepTrace};
use crate::error::{BracketKind, RunError};
use crate::program::{Instruction, Program};
use crate::tape::Tape;

/// Value stored by `,` once the input stream is exhausted.
pub const EOF_VALUE: u8 = 0;

/// A single run of a program.
///
/// The interpreter maintains:
/// - the loaded program and a program counter into it,
/// - the tape (memory and data pointer),
/// - the input, output and diagnostics streams.
pub struct Interpreter<R, W, D> {
    program: Program,
    tape: Tape,
    pc: usize,
    runs: usize,
    input: R,
    output: W,
    diagnostics: D,
}

impl<R: Read, W: Write, D: Diagnostics> Interpreter<R, W, D> {
    pub fn new(program: Program, tape: Tape, input: R, output: W, diagnostics: D) -> Self {
        Self {
            program,
            tape,
            pc: 0,
            runs: 0,
            input,
            output,
            diagnostics,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Take the interpreter apart, e.g. to recover the output buffer after a run.
    pub fn into_parts(self) -> (Program, Tape, R, W, D) {
        (self.program, self.tape, self.input, self.output, self.diagnostics)
    }

    /// Execute the program from the first instruction until it completes or aborts.
    ///
    /// Returns `Ok(())` when the program counter runs off the end. Output is
    /// flushed either way, so an aborted run keeps everything it printed.
    ///
    /// The first run uses the tape passed to [`Interpreter::new`]; every later
    /// run starts on a zeroed tape of the same capacity.
    pub fn run(&mut self) -> Result<(), RunError> {
        if self.runs > 0 {
            self.tape = Tape::new(self.tape.capacity());
        }
        self.runs += 1;
        let result = self.execute();
        let flushed = self.output.flush();
        match (result, flushed) {
            (Err(err), _) => Err(err),
            (Ok(()), Err(source)) => Err(RunError::Io { ip: self.pc, source }),
            (Ok(()), Ok(())) => Ok(()),
        }
    }

    fn execute(&mut self) -> Result<(), RunError> {
        self.pc = 0;
        let mut step: usize = 0;

        while let Some(instr) = self.program.get(self.pc) {
            let pc = self.pc;
            let (cursor_before, cell_before) = (self.tape.cursor(), self.tape.get());
            let mut action: Option<String> = self.diagnostics.wants_steps().then(String::new);
            let mut next = pc + 1;

            match instr {
                Instruction::MoveRight | Instruction::MoveLeft => {
                    let moved = if instr == Instruction::MoveRight {
                        self.tape.move_right()
                    } else {
                        self.tape.move_left()
                    };
                    moved.map_err(|_| RunError::PointerOutOfBounds {
                        ip: pc,
                        ptr: cursor_before,
                        op: instr,
                    })?;
                    if let Some(a) = action.as_mut() {
                        *a = format!("Moved pointer head to index {}", self.tape.cursor());
                    }
                }
                Instruction::Increment | Instruction::Decrement => {
                    let wrapped = if instr == Instruction::Increment {
                        self.tape.increment()
                    } else {
                        self.tape.decrement()
                    };
                    if let Some(kind) = wrapped {
                        self.flush_output(pc)?;
                        self.diagnostics.advisory(&Advisory { kind, pc });
                    }
                    if let Some(a) = action.as_mut() {
                        let verb = if instr == Instruction::Increment { "Increment" } else { "Decrement" };
                        *a = format!("{verb} cell[{cursor_before}] from {cell_before} to {}", self.tape.get());
                    }
                }
                Instruction::Output => {
                    self.output
                        .write_all(&[self.tape.get()])
                        .map_err(|source| RunError::Io { ip: pc, source })?;
                    if let Some(a) = action.as_mut() {
                        *a = format!("Output byte {}", self.tape.get());
                    }
                }
                Instruction::Input => {
                    let byte = self.read_byte().map_err(|source| RunError::Io { ip: pc, source })?;
                    self.tape.set(byte);
                    if let Some(a) = action.as_mut() {
                        *a = format!("Read byte from input -> {byte}");
                    }
                }
                Instruction::LoopOpen => {
                    if self.tape.get() == 0 {
                        let close = matching_close(&self.program, pc).ok_or(RunError::UnmatchedBracket {
                            ip: pc,
                            kind: BracketKind::Open,
                        })?;
                        if let Some(a) = action.as_mut() {
                            *a = format!("Cell is 0; jump forward to matching ']' at IP {close}");
                        }
                        next = close + 1;
                    } else if let Some(a) = action.as_mut() {
                        *a = "Enter loop (cell != 0)".to_string();
                    }
                }
                Instruction::LoopClose => {
                    if self.tape.get() != 0 {
                        let open = matching_open(&self.program, pc).ok_or(RunError::UnmatchedBracket {
                            ip: pc,
                            kind: BracketKind::Close,
                        })?;
                        if let Some(a) = action.as_mut() {
                            *a = format!("Cell != 0; jump back to matching '[' at IP {open}");
                        }
                        // Land on the '[' itself so the loop condition is checked again.
                        next = open;
                    } else if let Some(a) = action.as_mut() {
                        *a = "Exit loop (cell is 0)".to_string();
                    }
                }
            }

            if let Some(action) = action {
                self.flush_output(pc)?;
                self.diagnostics.step(&StepTrace {
                    step,
                    pc,
                    cursor: cursor_before,
                    cell_before,
                    instruction: instr,
                    action,
                });
            }

            step += 1;
            self.pc = next;
        }

        Ok(())
    }

    /// Diagnostics go to a different stream; earlier output must land first.
    fn flush_output(&mut self, pc: usize) -> Result<(), RunError> {
        self.output.flush().map_err(|source| RunError::Io { ip: pc, source })
    }

    /// Read exactly one byte, or [`EOF_VALUE`] if the stream has ended.
    fn read_byte(&mut self) -> std::io::Result<u8> {
        // Prompts written by the program must be visible before we block.
        self.output.flush()?;
        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => return Ok(EOF_VALUE),
                Ok(_) => return Ok(buf[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Scan forward from the `[` at `open` for its matching `]`.
fn matching_close(program: &Program, open: usize) -> Option<usize> {
    let mut depth: usize = 1;
    for (pos, instr) in program.instructions().iter().enumerate().skip(open + 1) {
        match instr {
            Instruction::LoopOpen => depth += 1,
            Instruction::LoopClose => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos);
                }
            }
            _ => {}
        }
    }
    None
}

/// Scan backward from the `]` at `close` for its matching `[`.
fn matching_open(program: &Program, close: usize) -> Option<usize> {
    let mut depth: usize = 1;
    for pos in (0..close).rev() {
        match program.instructions()[pos] {
            Instruction::LoopClose => depth += 1,
            Instruction::LoopOpen => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos);
                }
            }
            _ => {}
        }
    }
    None
}

/// Run `program` once on a fresh tape of `tape_size` cells.
pub fn run_program<R: Read, W: Write, D: Diagnostics>(
    program: Program,
    tape_size: usize,
    input: R,
    output: W,
    diagnostics: D,
) -> Result<(), RunError> {
    Interpreter::new(program, Tape::new(tape_size), input, output, diagnostics).run()
}
