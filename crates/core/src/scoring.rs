//! Scoring module - line-clear points, drop bonuses, level and gravity.
//!
//! Line clears pay `LINE_SCORES[cleared] * max(1, level)` using the level
//! in effect *before* the clear is counted toward `total_lines`. Fever
//! doubles every gain (line clears and drop bonuses alike); the doubling
//! is applied by the caller via [`apply_fever`].

use tetris_party_types::{
    FALL_BASE_SECS, FALL_FLOOR_SECS, FALL_STEP_SECS, FEVER_MULTIPLIER, HARD_DROP_BONUS,
    LINE_SCORES, SOFT_DROP_BONUS, SOFT_DROP_FACTOR,
};

/// Points for clearing `cleared` rows at the given level.
pub fn score_for_lines(cleared: usize, level: u32) -> u32 {
    if cleared > 4 {
        return 0;
    }
    LINE_SCORES[cleared] * level.max(1)
}

/// Flat hard-drop bonus (distance does not matter).
pub fn hard_drop_bonus() -> u32 {
    HARD_DROP_BONUS
}

/// Bonus for descending `rows` voluntarily while soft drop is held.
pub fn soft_drop_bonus(rows: u32) -> u32 {
    SOFT_DROP_BONUS * rows
}

/// Double a gain while fever is active.
pub fn apply_fever(points: u32, fever_active: bool) -> u32 {
    if fever_active {
        points * FEVER_MULTIPLIER
    } else {
        points
    }
}

/// Level derived from cumulative cleared lines: starts at 1, +1 per 10.
pub fn level_for_lines(total_lines: u32) -> u32 {
    1 + total_lines / 10
}

/// Gravity interval in seconds per row for the given level.
pub fn fall_interval_secs(level: u32) -> f32 {
    let stepped = FALL_BASE_SECS - (level.saturating_sub(1) as f32) * FALL_STEP_SECS;
    stepped.max(FALL_FLOOR_SECS)
}

/// Gravity interval with the soft-drop speedup applied.
pub fn soft_drop_interval_secs(level: u32) -> f32 {
    fall_interval_secs(level) * SOFT_DROP_FACTOR
}
