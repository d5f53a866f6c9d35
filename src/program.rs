//! Instruction set and the loader that extracts it from source text.

use std::fmt;
use std::str::FromStr;

use crate::error::LoadError;

/// One of the eight Brainfuck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    MoveRight,
    MoveLeft,
    Increment,
    Decrement,
    Output,
    Input,
    LoopOpen,
    LoopClose,
}

impl Instruction {
    /// Map a source byte to its instruction, or `None` for comment bytes.
    pub fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            b'>' => Instruction::MoveRight,
            b'<' => Instruction::MoveLeft,
            b'+' => Instruction::Increment,
            b'-' => Instruction::Decrement,
            b'.' => Instruction::Output,
            b',' => Instruction::Input,
            b'[' => Instruction::LoopOpen,
            b']' => Instruction::LoopClose,
            _ => return None,
        })
    }

    /// The source character for this instruction.
    pub fn symbol(self) -> char {
        match self {
            Instruction::MoveRight => '>',
            Instruction::MoveLeft => '<',
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::Output => '.',
            Instruction::Input => ',',
            Instruction::LoopOpen => '[',
            Instruction::LoopClose => ']',
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A loaded program: the instruction characters of a source, in order.
///
/// Never empty; [`Program::load`] refuses sources without instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Extract every instruction character from `source`, dropping everything
    /// else so that comments and free-form layout are allowed.
    ///
    /// Works on raw bytes; comment text does not need to be valid UTF-8.
    pub fn load(source: impl AsRef<[u8]>) -> Result<Self, LoadError> {
        let instructions: Vec<Instruction> = source
            .as_ref()
            .iter()
            .filter_map(|&b| Instruction::from_byte(b))
            .collect();

        if instructions.is_empty() {
            return Err(LoadError::NoInstructions);
        }

        Ok(Self { instructions })
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the program has no instructions (never true for a loaded program).
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, pc: usize) -> Option<Instruction> {
        self.instructions.get(pc).copied()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}

impl FromStr for Program {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Program::load(s)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instr in &self.instructions {
            write!(f, "{instr}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_instruction_characters_in_order() {
        let program = Program::load("a+b.c[d-e]f <x> ,\n").unwrap();
        assert_eq!(program.to_string(), "+.[-]<>,");
    }

    #[test]
    fn comments_between_symbols_are_ignored() {
        let plain = Program::load("+.[-]").unwrap();
        let commented: Program = "increment +\n print it . then\n clear [ - ] done"
            .parse()
            .unwrap();
        assert_eq!(plain, commented);
        assert_eq!(plain.len(), 5);
    }

    #[test]
    fn empty_source_fails_to_load() {
        assert!(matches!(Program::load(""), Err(LoadError::NoInstructions)));
    }

    #[test]
    fn comment_only_source_fails_to_load() {
        let result = Program::load("just a comment; no code here\n");
        assert!(matches!(result, Err(LoadError::NoInstructions)));
    }

    #[test]
    fn non_utf8_comment_bytes_are_dropped() {
        let program = Program::load([0xff, b'+', 0xfe, b'.', 0x80]).unwrap();
        assert_eq!(program.instructions(), &[Instruction::Increment, Instruction::Output]);
    }

    #[test]
    fn symbol_round_trips_through_from_byte() {
        for b in b"><+-.,[]" {
            let instr = Instruction::from_byte(*b).unwrap();
            assert_eq!(instr.symbol(), *b as char);
        }
        assert_eq!(Instruction::from_byte(b' '), None);
    }
}
