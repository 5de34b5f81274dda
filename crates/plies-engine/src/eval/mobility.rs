//! Mobility: one point per legal move.

use plies_core::Player;

/// Number of legal moves available to `player`, castles included.
pub fn mobility(player: Player<'_>) -> i32 {
    player.legal_moves().len() as i32
}
