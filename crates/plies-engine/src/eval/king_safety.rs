//! King-related bonuses: checking the opponent, mating it, and having castled.

use plies_core::Player;

/// Bonus for giving check.
pub const CHECK_BONUS: i32 = 50;

/// Base bonus for delivering checkmate, before depth scaling.
pub const CHECKMATE_BONUS: i32 = 10_000;

/// Multiplier per remaining ply applied to [`CHECKMATE_BONUS`].
pub const DEPTH_BONUS: i32 = 100;

/// Bonus for having castled.
pub const CASTLE_BONUS: i32 = 60;

/// [`CHECK_BONUS`] if the opponent of `player` is in check.
pub fn check(player: Player<'_>) -> i32 {
    if player.opponent().is_in_check() {
        CHECK_BONUS
    } else {
        0
    }
}

/// Mate bonus if the opponent of `player` is checkmated.
///
/// `depth` is the remaining search depth at which the position was reached;
/// a larger remainder means the mate was found closer to the root. The bonus
/// saturates at `i32::MAX`.
pub fn checkmate(player: Player<'_>, depth: u32) -> i32 {
    if player.opponent().is_in_checkmate() {
        CHECKMATE_BONUS.saturating_mul(depth_bonus(depth))
    } else {
        0
    }
}

/// [`CASTLE_BONUS`] if `player` has castled.
pub fn castled(player: Player<'_>) -> i32 {
    if player.is_castled() { CASTLE_BONUS } else { 0 }
}

fn depth_bonus(depth: u32) -> i32 {
    if depth == 0 {
        1
    } else {
        i32::try_from(depth).map_or(i32::MAX, |depth| DEPTH_BONUS.saturating_mul(depth))
    }
}
