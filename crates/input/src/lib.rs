//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and provides a
//! DAS/ARR held-key tracker suitable for terminal environments (including
//! terminals without key-release events). Soft drop is exposed as a held
//! boolean rather than an action, since the engine consumes it per tick.

pub mod held;
pub mod map;

pub use tetris_party_types as types;

pub use held::HeldKeys;
pub use map::{handle_key_event, should_quit};
