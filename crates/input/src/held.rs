//! DAS/ARR tracking of held keys for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a
//! timeout. Horizontal holds produce repeated move actions after the DAS
//! delay; the down key is tracked as a boolean soft-drop state that the
//! game loop feeds into the engine tick.

use crossterm::event::KeyCode;

use arrayvec::ArrayVec;

use crate::types::{GameAction, DEFAULT_ARR_MS, DEFAULT_DAS_MS};

/// Direction for horizontal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
    None,
}

/// Tracks held keys for DAS/ARR handling and the soft-drop state.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    horizontal: HorizontalDirection,
    down_held: bool,
    last_key_time: std::time::Instant,
    das_timer: u32,
    arr_accumulator: u32,
    das_delay: u32,
    arr_rate: u32,
    key_release_timeout_ms: u32,
}

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that triggers DAS/ARR repeats.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

impl HeldKeys {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            horizontal: HorizontalDirection::None,
            down_held: false,
            last_key_time: std::time::Instant::now(),
            das_timer: 0,
            arr_accumulator: 0,
            das_delay,
            arr_rate,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// True while the soft-drop key counts as held.
    pub fn soft_drop_held(&self) -> bool {
        self.down_held
    }

    /// Record a key press. Returns the immediate action for a fresh
    /// horizontal press; repeat presses of the same direction only
    /// refresh the hold.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        match code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
            | KeyCode::Char('A') => {
                self.last_key_time = std::time::Instant::now();
                if self.horizontal == HorizontalDirection::Left {
                    None
                } else {
                    self.horizontal = HorizontalDirection::Left;
                    self.das_timer = 0;
                    self.arr_accumulator = 0;
                    Some(GameAction::MoveLeft)
                }
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
            | KeyCode::Char('D') => {
                self.last_key_time = std::time::Instant::now();
                if self.horizontal == HorizontalDirection::Right {
                    None
                } else {
                    self.horizontal = HorizontalDirection::Right;
                    self.das_timer = 0;
                    self.arr_accumulator = 0;
                    Some(GameAction::MoveRight)
                }
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
            | KeyCode::Char('S') => {
                self.last_key_time = std::time::Instant::now();
                self.down_held = true;
                None
            }
            _ => None,
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
            | KeyCode::Char('A') => {
                if self.horizontal == HorizontalDirection::Left {
                    self.horizontal = HorizontalDirection::None;
                    self.das_timer = 0;
                    self.arr_accumulator = 0;
                }
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
            | KeyCode::Char('D') => {
                if self.horizontal == HorizontalDirection::Right {
                    self.horizontal = HorizontalDirection::None;
                    self.das_timer = 0;
                    self.arr_accumulator = 0;
                }
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
            | KeyCode::Char('S') => {
                self.down_held = false;
            }
            _ => {}
        }
    }

    /// Advance hold timers by `elapsed_ms` and collect horizontal repeats.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 32> {
        let mut actions = ArrayVec::<GameAction, 32>::new();

        // Auto-release when terminal does not emit release events.
        let time_since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if time_since_last_key > self.key_release_timeout_ms {
            if self.horizontal != HorizontalDirection::None {
                self.horizontal = HorizontalDirection::None;
                self.das_timer = 0;
                self.arr_accumulator = 0;
            }
            self.down_held = false;
        }

        match self.horizontal {
            HorizontalDirection::Left | HorizontalDirection::Right => {
                let prev_das = self.das_timer;
                self.das_timer += elapsed_ms;

                if self.das_timer >= self.das_delay {
                    let excess = if prev_das < self.das_delay {
                        self.das_timer - self.das_delay
                    } else {
                        elapsed_ms
                    };
                    self.arr_accumulator += excess;

                    while self.arr_accumulator >= self.arr_rate {
                        match self.horizontal {
                            HorizontalDirection::Left => {
                                let _ = actions.try_push(GameAction::MoveLeft);
                            }
                            HorizontalDirection::Right => {
                                let _ = actions.try_push(GameAction::MoveRight);
                            }
                            HorizontalDirection::None => {}
                        }
                        self.arr_accumulator -= self.arr_rate;
                    }
                }
            }
            HorizontalDirection::None => {
                self.das_timer = 0;
                self.arr_accumulator = 0;
            }
        }

        actions
    }

    pub fn reset(&mut self) {
        self.horizontal = HorizontalDirection::None;
        self.down_held = false;
        self.last_key_time = std::time::Instant::now();
        self.das_timer = 0;
        self.arr_accumulator = 0;
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
