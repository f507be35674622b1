//! RNG module - deterministic uniform piece and order selection.
//!
//! Piece kinds are drawn uniformly and memorylessly from the 7 kinds on
//! every draw (no bag fairness: droughts of a given piece are possible
//! and intentional). Party orders are drawn the same way from the 4
//! order kinds. A seeded LCG makes every game reproducible for tests.

use tetris_party_types::{OrderKind, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (usable as a seed to continue the stream).
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform random source for piece kinds and party orders.
#[derive(Debug, Clone)]
pub struct PartyRng {
    rng: SimpleRng,
}

impl PartyRng {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind, uniform over all 7.
    pub fn draw_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Draw a fresh party order: uniform kind plus its initial count.
    pub fn draw_order(&mut self) -> (OrderKind, u32) {
        let idx = self.rng.next_range(OrderKind::ALL.len() as u32) as usize;
        let kind = OrderKind::ALL[idx];
        (kind, kind.initial_count())
    }

    /// Current RNG state, so a restart can continue the same stream.
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PartyRng {
    fn default() -> Self {
        Self::new(1)
    }
}
