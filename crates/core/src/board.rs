//! Board module - the 10x20 grid of locked cells.
//!
//! Uses a flat array for cache locality and zero-allocation updates.
//! Coordinates: (x, y) with x in 0..10 left to right, y in 0..20 top to
//! bottom. Pieces may hover at negative y while spawning; those rows are
//! never stored and never collide with board content.

use arrayvec::ArrayVec;

use tetris_party_types::{Cell, PieceKind, GRID_COLS, GRID_ROWS};

/// Total number of cells on the board.
const GRID_SIZE: usize = (GRID_COLS as usize) * (GRID_ROWS as usize);

/// The game grid - 10 columns x 20 rows, row-major flat storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [Cell; GRID_SIZE],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_COLS || y < 0 || y >= GRID_ROWS {
            return None;
        }
        Some((y as usize) * (GRID_COLS as usize) + (x as usize))
    }

    /// Get cell at (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    ///
    /// Lock uses this directly: cells above the visible board (y < 0)
    /// are silently skipped.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True iff (x, y) is within the visible grid.
    pub fn is_in_bounds(&self, x: i8, y: i8) -> bool {
        x >= 0 && x < GRID_COLS && y >= 0 && y < GRID_ROWS
    }

    /// True iff (x, y) holds a locked cell. Any y < 0 is unoccupied.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True iff a piece cell at (x, y) would collide: outside the side
    /// walls, at or below the floor, or overlapping a locked cell.
    /// Rows above the board (y < 0) never block.
    pub fn blocks(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= GRID_COLS {
            return true;
        }
        if y >= GRID_ROWS {
            return true;
        }
        y >= 0 && self.is_occupied(x, y)
    }

    /// True iff every cell in row y is occupied.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_ROWS as usize {
            return false;
        }
        let start = y * GRID_COLS as usize;
        let end = start + GRID_COLS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the cleared row indices (bottom to
    /// top). Non-full rows keep their relative order; an equal number of
    /// empty rows is re-padded at the top.
    ///
    /// Two-pointer compaction, zero-allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared_rows = ArrayVec::new();
        let width = GRID_COLS as usize;
        let mut write_y = GRID_ROWS as usize;

        for read_y in (0..GRID_ROWS as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for y in 0..write_y {
            let start = y * width;
            for cell in &mut self.cells[start..start + width] {
                *cell = None;
            }
        }

        cleared_rows.reverse();
        cleared_rows
    }

    /// Remove the bottom `count` rows unconditionally, shifting the rest
    /// of the grid down and re-padding the top with empty rows.
    ///
    /// This is the fever-bomb effect; it ignores whether rows are full.
    pub fn remove_bottom_rows(&mut self, count: usize) {
        let count = count.min(GRID_ROWS as usize);
        if count == 0 {
            return;
        }
        let width = GRID_COLS as usize;

        for y in (count..GRID_ROWS as usize).rev() {
            let src_start = (y - count) * width;
            let dst_start = y * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }
        for cell in &mut self.cells[..count * width] {
            *cell = None;
        }
    }

    /// Write the piece into the grid at its absolute cell coordinates.
    /// Cells above the visible board are skipped.
    pub fn lock_cells(&mut self, shape: &[(i8, i8)], x: i8, y: i8, kind: PieceKind) {
        for &(dx, dy) in shape {
            self.set(x + dx, y + dy, Some(kind));
        }
    }

    /// Encode the grid into a 0-7 byte matrix (0 = empty) for snapshots.
    pub fn write_u8_grid(&self, out: &mut [[u8; GRID_COLS as usize]; GRID_ROWS as usize]) {
        for y in 0..GRID_ROWS as usize {
            for x in 0..GRID_COLS as usize {
                out[y][x] = match self.cells[y * GRID_COLS as usize + x] {
                    None => 0,
                    Some(PieceKind::I) => 1,
                    Some(PieceKind::O) => 2,
                    Some(PieceKind::T) => 3,
                    Some(PieceKind::S) => 4,
                    Some(PieceKind::Z) => 5,
                    Some(PieceKind::J) => 6,
                    Some(PieceKind::L) => 7,
                };
            }
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
