//! Read-only snapshot handed to the render collaborator.
//!
//! A snapshot is a plain copy of everything the renderer may show;
//! taking one never mutates the game, so querying twice without an
//! intervening tick yields identical values.

use crate::pieces::Piece;
use tetris_party_types::{GamePhase, OrderKind, PieceKind, GRID_COLS, GRID_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    /// Grid contents, 0 = empty, 1-7 = piece kinds.
    pub board: [[u8; GRID_COLS as usize]; GRID_ROWS as usize],
    pub active: ActiveSnapshot,
    /// Pivot row where the active piece would land if hard-dropped now.
    pub ghost_y: i8,
    pub next_kind: PieceKind,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub best_score: u32,
    pub order_kind: OrderKind,
    pub order_remaining: u32,
    pub fever_active: bool,
    pub fever_time_left: f32,
    pub bomb_available: bool,
    pub phase: GamePhase,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; GRID_COLS as usize]; GRID_ROWS as usize],
            active: ActiveSnapshot::from(Piece::spawn(PieceKind::I)),
            ghost_y: 0,
            next_kind: PieceKind::I,
            score: 0,
            level: 1,
            lines: 0,
            best_score: 0,
            order_kind: OrderKind::Single,
            order_remaining: OrderKind::Single.initial_count(),
            fever_active: false,
            fever_time_left: 0.0,
            bomb_available: false,
            phase: GamePhase::Playing,
        }
    }
}
