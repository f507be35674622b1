//! Shared types and constants for the party Tetris engine.
//!
//! Pure data with no external dependencies, usable from the core engine,
//! the input layer, and the terminal renderer alike.
//!
//! # Board dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn pivot**: (`GRID_COLS / 2 - 1`, -1) — pieces enter one row
//!   above the visible board.
//!
//! # Gravity curve
//!
//! Fall interval in seconds per row:
//! `max(FALL_FLOOR_SECS, FALL_BASE_SECS - (level - 1) * FALL_STEP_SECS)`,
//! multiplied by `SOFT_DROP_FACTOR` while soft drop is held.

/// Board dimensions.
pub const GRID_COLS: i8 = 10;
pub const GRID_ROWS: i8 = 20;

/// Fixed timestep interval for the front-end loop (~60 FPS).
pub const TICK_MS: u32 = 16;

/// Gravity curve (seconds per row).
pub const FALL_BASE_SECS: f32 = 0.65;
pub const FALL_STEP_SECS: f32 = 0.05;
pub const FALL_FLOOR_SECS: f32 = 0.06;
/// Fall interval multiplier while soft drop is held.
pub const SOFT_DROP_FACTOR: f32 = 0.12;

/// DAS (Delayed Auto Shift) delay in milliseconds - time before
/// horizontal auto-repeat starts.
pub const DEFAULT_DAS_MS: u32 = 150;
/// ARR (Auto Repeat Rate) in milliseconds - interval between repeats.
pub const DEFAULT_ARR_MS: u32 = 50;

/// Line-clear base points, indexed by cleared-row count (0-4).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];
/// Flat bonus for a hard drop, regardless of distance.
pub const HARD_DROP_BONUS: u32 = 2;
/// Bonus per row descended while soft drop is held.
pub const SOFT_DROP_BONUS: u32 = 1;

/// Fever duration granted when a party order completes.
pub const FEVER_SECS: f32 = 5.0;
/// Score multiplier applied to every gain while fever is active.
pub const FEVER_MULTIPLIER: u32 = 2;
/// Rows removed from the bottom of the grid by the fever bomb.
pub const BOMB_ROWS: usize = 2;

/// Tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Cell on the board (None = empty, Some = locked piece of that kind).
pub type Cell = Option<PieceKind>;

/// Party order kinds, one per line-clear multiplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderKind {
    Single,
    Double,
    Triple,
    Tetris,
}

impl OrderKind {
    pub const ALL: [OrderKind; 4] = [
        OrderKind::Single,
        OrderKind::Double,
        OrderKind::Triple,
        OrderKind::Tetris,
    ];

    /// How many times the multiplicity must be achieved for a fresh order.
    pub fn initial_count(&self) -> u32 {
        match self {
            OrderKind::Single => 3,
            OrderKind::Double => 2,
            OrderKind::Triple => 1,
            OrderKind::Tetris => 1,
        }
    }

    /// Map a cleared-row count to the order kind it satisfies.
    pub fn from_cleared(cleared: usize) -> Option<Self> {
        match cleared {
            1 => Some(OrderKind::Single),
            2 => Some(OrderKind::Double),
            3 => Some(OrderKind::Triple),
            4 => Some(OrderKind::Tetris),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKind::Single => "single",
            OrderKind::Double => "double",
            OrderKind::Triple => "triple",
            OrderKind::Tetris => "tetris",
        }
    }
}

/// Discrete game actions delivered by the input collaborator.
///
/// Soft drop is deliberately absent: it is a held state fed into
/// `GameState::tick`, not an edge event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    RotateCw,
    HardDrop,
    UseBomb,
    TogglePause,
    Restart,
}

/// Coarse game state exposed to the render collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Playing,
    Paused,
    GameOver,
}
