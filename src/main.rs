use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use strict_bf::cli_util::{label, print_load_error, print_run_error, StderrDiagnostics};
use strict_bf::config::Settings;
use strict_bf::{Interpreter, Program, Tape};

const PROGRAM: &str = "bf";

/// Exit status used when the run is interrupted with ctrl+c.
const INTERRUPTED: i32 = 130;

#[derive(Parser, Debug)]
#[command(name = "bf", version, about = "Run a Brainfuck program loaded from a file")]
struct Cli {
    /// Brainfuck source file; characters other than ><+-.,[] are comments
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Number of tape cells (fallback BF_TAPE_SIZE; default 30000)
    #[arg(long = "tape-size", value_name = "CELLS", value_parser = parse_tape_size)]
    tape_size: Option<usize>,

    /// Do not print wraparound warnings
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Print a step-by-step table of operations to stderr while executing
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn parse_tape_size(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("tape must have at least one cell".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn run(cli: Cli) -> i32 {
    let color = io::stderr().is_terminal();

    let settings = match Settings::from_env(cli.tape_size, cli.quiet, cli.debug) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{PROGRAM}: {e}");
            let _ = io::stderr().flush();
            return 2;
        }
    };

    let source = match fs::read(&cli.file) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("{PROGRAM}: could not open file {}: {e}", cli.file.display());
            let _ = io::stderr().flush();
            return 1;
        }
    };

    let program = match Program::load(&source) {
        Ok(p) => p,
        Err(e) => {
            print_load_error(Some(PROGRAM), &e, color);
            return 1;
        }
    };

    // Flush whatever the program printed so far, then exit on ctrl+c.
    if let Err(e) = ctrlc::set_handler(|| {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
        process::exit(INTERRUPTED);
    }) {
        eprintln!(
            "{PROGRAM}: {}: failed to set ctrl+c handler: {e}",
            label("warning", nu_ansi_term::Color::Yellow, color)
        );
    }

    let diagnostics = StderrDiagnostics::new(settings.quiet, settings.debug, color);
    let mut interpreter = Interpreter::new(
        program,
        Tape::new(settings.tape_size),
        io::stdin(),
        io::stdout(),
        diagnostics,
    );

    match interpreter.run() {
        Ok(()) => 0,
        Err(err) => {
            print_run_error(Some(PROGRAM), interpreter.program(), &err, color);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    process::exit(run(cli));
}
