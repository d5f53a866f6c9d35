//! Fixed-size byte memory with a bounds-checked cursor.

/// Cells on a tape when nothing else is configured.
pub const DEFAULT_TAPE_SIZE: usize = 30_000;

/// Which way a cell wrapped around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wraparound {
    /// `+` took a cell from 255 to 0.
    Overflow,
    /// `-` took a cell from 0 to 255.
    Underflow,
}

/// A cursor move that would leave the tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TapeError {
    #[error("cannot move right of the last cell (cursor={cursor})")]
    RightEdge { cursor: usize },
    #[error("cannot move left of cell 0")]
    LeftEdge,
}

/// The interpreter's memory: zeroed cells plus a cursor starting at cell 0.
///
/// The cursor always satisfies `cursor < capacity`; moves that would break
/// that fail instead of wrapping.
#[derive(Debug, Clone)]
pub struct Tape {
    cells: Vec<u8>,
    cursor: usize,
}

impl Tape {
    /// Create a tape of `capacity` zeroed cells. At least one cell is always allocated.
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: vec![0; capacity.max(1)],
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Value of the cell under the cursor.
    pub fn get(&self) -> u8 {
        self.cells[self.cursor]
    }

    /// Overwrite the cell under the cursor.
    pub fn set(&mut self, value: u8) {
        self.cells[self.cursor] = value;
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Add one to the current cell, reporting a wrap from 255 to 0.
    pub fn increment(&mut self) -> Option<Wraparound> {
        let cell = &mut self.cells[self.cursor];
        let (value, wrapped) = cell.overflowing_add(1);
        *cell = value;
        wrapped.then_some(Wraparound::Overflow)
    }

    /// Subtract one from the current cell, reporting a wrap from 0 to 255.
    pub fn decrement(&mut self) -> Option<Wraparound> {
        let cell = &mut self.cells[self.cursor];
        let (value, wrapped) = cell.overflowing_sub(1);
        *cell = value;
        wrapped.then_some(Wraparound::Underflow)
    }

    pub fn move_right(&mut self) -> Result<(), TapeError> {
        if self.cursor + 1 >= self.cells.len() {
            return Err(TapeError::RightEdge { cursor: self.cursor });
        }
        self.cursor += 1;
        Ok(())
    }

    pub fn move_left(&mut self) -> Result<(), TapeError> {
        if self.cursor == 0 {
            return Err(TapeError::LeftEdge);
        }
        self.cursor -= 1;
        Ok(())
    }
}

impl Default for Tape {
    fn default() -> Self {
        Tape::new(DEFAULT_TAPE_SIZE)
    }
}
