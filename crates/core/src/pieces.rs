//! Pieces module - tetromino shapes and rotation.
//!
//! Each kind is defined by four pivot-relative cell offsets. Rotation is
//! the 90-degree clockwise transform `(dx, dy) -> (dy, -dx)` applied
//! `rotation % 4` times; the O piece has a single orientation and never
//! transforms. Wall kicks are a fixed 6-offset retry list shared by all
//! kinds (horizontal kicks first, small before large, then one upward
//! kick) rather than SRS tables.

use tetris_party_types::{PieceKind, GRID_COLS};

/// Offset of a single cell relative to the piece pivot.
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the pivot.
pub type PieceShape = [CellOffset; 4];

/// Canonical (rotation 0) offsets per kind.
const fn base_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(-1, 0), (0, 0), (1, 0), (2, 0)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        PieceKind::S => [(-1, 1), (0, 1), (0, 0), (1, 0)],
        PieceKind::Z => [(-1, 0), (0, 0), (0, 1), (1, 1)],
        PieceKind::J => [(-1, 0), (0, 0), (1, 0), (-1, 1)],
        PieceKind::L => [(-1, 0), (0, 0), (1, 0), (1, 1)],
    }
}

/// Rotate a shape 90 degrees clockwise about the pivot.
fn rotate_cw(shape: PieceShape) -> PieceShape {
    let mut out = shape;
    for (i, &(dx, dy)) in shape.iter().enumerate() {
        out[i] = (dy, -dx);
    }
    out
}

/// Cell offsets for a kind at the given rotation index.
///
/// O ignores the rotation index entirely.
pub fn shape_cells(kind: PieceKind, rotation: u8) -> PieceShape {
    let mut cells = base_shape(kind);
    if kind == PieceKind::O {
        return cells;
    }
    for _ in 0..(rotation % 4) {
        cells = rotate_cw(cells);
    }
    cells
}

/// Wall-kick candidate offsets, tried in priority order.
pub const KICKS: [(i8, i8); 6] = [(0, 0), (-1, 0), (1, 0), (-2, 0), (2, 0), (0, -1)];

/// Spawn pivot for new pieces: horizontal center, one row above the board.
pub const SPAWN_X: i8 = GRID_COLS / 2 - 1;
pub const SPAWN_Y: i8 = -1;

/// The active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub rotation: u8,
}

impl Piece {
    /// Spawn a new piece at the standard spawn pivot, rotation 0.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            x: SPAWN_X,
            y: SPAWN_Y,
            rotation: 0,
        }
    }

    /// Cell offsets for the current rotation state.
    pub fn cells(&self) -> PieceShape {
        shape_cells(self.kind, self.rotation)
    }
}
