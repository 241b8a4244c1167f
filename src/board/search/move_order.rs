//! Move ordering for search.

use std::cmp::Reverse;

use super::super::{Evaluator, Move};

const CAPTURE_BASE: i32 = 10_000;
const PROMOTION_BASE: i32 = 5_000;

/// Ordering priority of a move.
///
/// Captures score `10000 + victim - attacker` (MVV-LVA), promotions add
/// `5000 + promoted piece value`, quiet moves score 0.
#[must_use]
pub fn move_priority(m: Move) -> i32 {
    let mut score = 0;
    if let Some((_, victim)) = m.captured() {
        score += CAPTURE_BASE + Evaluator::piece_value(victim) - Evaluator::piece_value(m.piece().1);
    }
    if let Some(promoted) = m.promotion() {
        score += PROMOTION_BASE + Evaluator::piece_value(promoted);
    }
    score
}

/// Sort moves by descending priority. The sort is stable, so equal-priority
/// moves keep their generation order.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|&m| Reverse(move_priority(m)));
}
