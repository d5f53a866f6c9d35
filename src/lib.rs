//! A strict Brainfuck interpreter library.
//!
//! Programs run on a fixed-size byte tape (default 30,000 cells) with a single
//! data pointer.
//!
//! Features and behaviors:
//! - Memory tape initialized to 0.
//! - Strict pointer bounds: moving left from cell 0 or right past the last
//!   cell aborts the run with an error.
//! - Cells wrap on `+`/`-`; each wrap is reported as an advisory through a
//!   [`Diagnostics`] sink and execution continues.
//! - Input `,` reads a single byte; on EOF the current cell is set to 0.
//! - Output `.` writes the byte at the current cell verbatim.
//! - Characters outside `><+-.,[]` are comments and are dropped on load.
//! - Loops are matched by scanning for the partner bracket when a jump is
//!   taken; an unmatched bracket aborts the run when it is reached.
//!
//! Quick start:
//!
//! ```no_run
//! use std::io;
//! use strict_bf::{run_program, NullDiagnostics, Program, DEFAULT_TAPE_SIZE};
//!
//! // Classic "Hello World!" in Brainfuck
//! let code = "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.>.";
//! let program = Program::load(code).expect("program should load");
//! run_program(program, DEFAULT_TAPE_SIZE, io::stdin(), io::stdout(), NullDiagnostics)
//!     .expect("program should run");
//! ```

pub mod cli_util;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod interpreter;
pub mod program;
pub mod tape;

pub use diagnostics::{Advisory, CollectedDiagnostics, Diagnostics, NullDiagnostics, StepTrace};
pub use error::{BracketKind, LoadError, RunError};
pub use interpreter::{run_program, Interpreter, EOF_VALUE};
pub use program::{Instruction, Program};
pub use tape::{Tape, TapeError, Wraparound, DEFAULT_TAPE_SIZE};
