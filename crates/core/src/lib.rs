//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for game tick processing
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with collision detection, line clearing,
//!   and the bomb's bottom-row removal
//! - [`game_state`]: Complete game state including active piece, scoring,
//!   timing, and the order/fever meta-game
//! - [`pieces`]: Tetromino shape definitions and clockwise rotation with
//!   wall kicks
//! - [`rng`]: Uniform memoryless piece and order selection from a seeded LCG
//! - [`scoring`]: Line-clear points, drop bonuses, level and gravity curve
//! - [`snapshot`]: Plain-copy render view of the whole game
//!
//! # Game Rules
//!
//! This is party Tetris, not guideline Tetris:
//!
//! - **Uniform Randomizer**: Every piece is drawn independently from the
//!   7 kinds; droughts and repeats happen
//! - **Party Orders**: A requested clear multiplicity (single through
//!   tetris) with a repetition count; completing it starts fever
//! - **Fever**: 5 seconds of doubled scoring plus one bomb charge
//! - **Bomb**: Removes the bottom 2 rows of the grid, fever-only
//! - **Rotation**: Clockwise only, with a fixed kick offset list; the O
//!   piece never rotates
//! - **No hold, no lock delay, no T-spins**: pieces lock the moment
//!   gravity fails to move them down
//!
//! # Example
//!
//! ```
//! use tetris_party_core::GameState;
//! use tetris_party_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep system:
//! - **Tick Rate**: 16ms (approximately 60 FPS)
//! - **Gravity**: 0.65s per row at level 1, 0.05s faster per level,
//!   floored at 0.06s
//! - **Soft Drop**: runs gravity at 12% of the normal interval while held
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with
//! elapsed time and the held soft-drop state.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tetris_party_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{collides, GameState};
pub use pieces::{shape_cells, Piece, KICKS};
pub use rng::{PartyRng, SimpleRng};
pub use scoring::{fall_interval_secs, level_for_lines, score_for_lines};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
