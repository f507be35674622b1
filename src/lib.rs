//! Party Tetris (workspace facade crate).
//!
//! This package keeps a stable `tetris_party::{core,term,input,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tetris_party_core as core;
pub use tetris_party_input as input;
pub use tetris_party_term as term;
pub use tetris_party_types as types;
