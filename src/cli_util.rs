use std::fmt::Write as _;
use std::io::{self, Write};

use nu_ansi_term::Color;

use crate::diagnostics::{Advisory, Diagnostics, StepTrace};
use crate::error::{LoadError, RunError};
use crate::program::Program;

/// Paint `text` when `enabled`, otherwise return it untouched.
pub fn label(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        color.bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Pretty-print a runtime error with caret positioning under the failing instruction.
/// If `program_name` is `Some("bf")`, messages are prefixed with "bf: ...".
pub fn print_run_error(program_name: Option<&str>, code: &Program, err: &RunError, color: bool) {
    let head = label("Runtime error", Color::Red, color);
    let detail = match err {
        RunError::PointerOutOfBounds { ptr, op, .. } => {
            format!("pointer out of bounds (ptr={ptr}, op={op})")
        }
        RunError::UnmatchedBracket { kind, .. } => format!("unmatched bracket {kind}"),
        RunError::Io { source, .. } => format!("I/O error: {source}"),
    };
    let msg = prefixed(program_name, &format!("{head}: {detail}"));
    eprint!("{}", format_error_with_context(&msg, &code.to_string(), err.ip()));
    let _ = io::stderr().flush();
}

pub fn print_load_error(program_name: Option<&str>, err: &LoadError, color: bool) {
    let head = label("Load error", Color::Red, color);
    eprintln!("{}", prefixed(program_name, &format!("{head}: {err}")));
    let _ = io::stderr().flush();
}

fn prefixed(program_name: Option<&str>, msg: &str) -> String {
    match program_name {
        Some(p) => format!("{p}: {msg}"),
        None => msg.to_string(),
    }
}

/// Render a concise error with instruction index and a caret context window.
///
/// `code` is the extracted instruction stream, which is always ASCII.
pub fn format_error_with_context(prefix: &str, code: &str, pos: usize) -> String {
    // Show a short window around the position for context
    const WINDOW: usize = 32;

    let start = pos.saturating_sub(WINDOW);
    let end = (pos + WINDOW + 1).min(code.len());
    let slice = code.get(start..end).unwrap_or_default();

    let mut out = String::new();
    let _ = writeln!(out, "{prefix} at instruction {pos}");
    let _ = writeln!(out, "  {slice}");
    let _ = writeln!(out, "  {}^", " ".repeat(pos.saturating_sub(start)));
    out
}

/// Diagnostics sink for the command line: warnings and the debug table on stderr.
///
/// The interpreter flushes program output before each call, so warnings and
/// table rows appear after any bytes the program wrote earlier.
pub struct StderrDiagnostics {
    quiet: bool,
    debug: bool,
    color: bool,
    header_printed: bool,
}

impl StderrDiagnostics {
    pub fn new(quiet: bool, debug: bool, color: bool) -> Self {
        Self {
            quiet,
            debug,
            color,
            header_printed: false,
        }
    }
}

impl Diagnostics for StderrDiagnostics {
    fn advisory(&mut self, advisory: &Advisory) {
        if self.quiet {
            return;
        }
        eprintln!("{}: {advisory}", label("warning", Color::Yellow, self.color));
    }

    fn wants_steps(&self) -> bool {
        self.debug
    }

    fn step(&mut self, trace: &StepTrace) {
        if !self.header_printed {
            eprintln!("STEP | IP  | PTR | CELL | INSTR | ACTION");
            eprintln!("-----+-----+-----+------+-------+------------------------------------------------");
            self.header_printed = true;
        }
        eprintln!("{}", format_step(trace));
    }
}

/// One row of the debug table.
pub fn format_step(trace: &StepTrace) -> String {
    format!(
        "{:<4} | {:<3} | {:<3} | {:<4} |  {}    | {}",
        trace.step, trace.pc, trace.cursor, trace.cell_before, trace.instruction, trace.action
    )
}
