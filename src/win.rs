use once_cell::sync::Lazy;

use crate::board::{SLOTS, Slot, WIN_LINES};
use crate::token::TokenRegistry;
use crate::types::Player;

/// Line products for the fixed board, built on first use.
pub static WIN_MASKS: Lazy<[u64; 8]> = Lazy::new(|| compute_win_masks(&WIN_LINES, &SLOTS));

pub fn compute_win_masks(lines: &[[usize; 3]; 8], slots: &[Slot]) -> [u64; 8] {
    lines.map(|[a, b, c]| slots[a].prime * slots[b].prime * slots[c].prime)
}

/// Product of the primes under `player`'s stationary tokens.
pub fn occupancy_product(tokens: &TokenRegistry, player: Player) -> u64 {
    tokens
        .iter()
        .filter(|t| t.owner == player && !t.is_moving())
        .map(|t| SLOTS[t.slot].prime)
        .product()
}

/// Every slot carries a distinct prime, so `player` holds a line exactly when
/// the product of the primes under their tokens is divisible by that line's
/// product.
pub fn has_won(tokens: &TokenRegistry, player: Player, masks: &[u64; 8]) -> bool {
    let product = occupancy_product(tokens, player);
    masks.iter().any(|&mask| product % mask == 0)
}
