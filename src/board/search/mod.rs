//! Depth-limited alpha-beta search.
//!
//! - Minimax over White-positive scores with alpha-beta pruning
//! - Move ordering by captures (MVV-LVA) and promotions
//! - Mate scores biased by remaining depth so faster mates are preferred
//!
//! The search walks a single shared `Board`: every child is entered through a
//! move guard and undone when the guard drops, including on pruning breaks.

mod move_order;

use super::{Board, Color, Evaluator, Move};

pub use move_order::{move_priority, order_moves};

/// Base score of a checkmate, before the remaining-depth bias
pub const MATE_SCORE: i32 = 20_000;

/// Bound wider than any reachable score
pub const INFINITY: i32 = 1_000_000;

/// Diagnostic counters, reset at the start of every top-level search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_searched: u64,
    pub positions_evaluated: u64,
}

/// Outcome of a top-level search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found
    pub best_move: Move,
    /// Score of `best_move` from the side to move's point of view
    pub score: i32,
    pub depth: u32,
    pub stats: SearchStats,
}

/// Search driver. Holds the evaluator and the counters for one search at a time.
#[derive(Debug, Default)]
pub struct Searcher {
    evaluator: Evaluator,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Searcher::with_evaluator(Evaluator::new())
    }

    #[must_use]
    pub fn with_evaluator(evaluator: Evaluator) -> Self {
        Searcher {
            evaluator,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Pick the best move for the side to move, searching `depth` plies.
    ///
    /// Returns `None` when the side to move has no legal move; the caller
    /// decides between checkmate and stalemate. Ties go to the first move in
    /// search order. A depth of 0 is searched as depth 1.
    pub fn find_best_move(&mut self, board: &mut Board, depth: u32) -> Option<SearchResult> {
        self.stats = SearchStats::default();
        let depth = depth.max(1);

        let color = board.side_to_move();
        let mut moves = board.generate_legal_moves(color);
        if moves.is_empty() {
            return None;
        }
        order_moves(&mut moves);

        let child_maximizing = color.opponent() == Color::White;
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for m in moves {
            let white_score = {
                let mut child = board.play(m);
                self.alpha_beta(&mut child, depth - 1, alpha, beta, child_maximizing)
            };
            let score = color.sign() * white_score;
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((m, score));
            }
            match color {
                Color::White => alpha = alpha.max(white_score),
                Color::Black => beta = beta.min(white_score),
            }
        }

        let (best_move, score) = best?;

        #[cfg(feature = "logging")]
        log::debug!(
            "searched {} nodes, evaluated {} positions",
            self.stats.nodes_searched,
            self.stats.positions_evaluated
        );
        #[cfg(feature = "logging")]
        log::debug!("best move {best_move} with score {score} at depth {depth}");

        Some(SearchResult {
            best_move,
            score,
            depth,
            stats: self.stats,
        })
    }

    /// Minimax with alpha-beta pruning over White-positive scores.
    ///
    /// `maximizing` is true when White is to move. At depth 0 the static
    /// evaluation is returned. A side with no legal move scores as mated
    /// (biased by `depth`) when in check, else 0.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes_searched += 1;

        if depth == 0 {
            self.stats.positions_evaluated += 1;
            return self.evaluator.evaluate(board);
        }

        let color = board.side_to_move();
        let mut moves = board.generate_legal_moves(color);
        if moves.is_empty() {
            return if board.in_check(color) {
                -color.sign() * (MATE_SCORE + depth as i32)
            } else {
                0
            };
        }
        order_moves(&mut moves);

        if maximizing {
            let mut max_score = -INFINITY;
            for m in moves {
                let score = {
                    let mut child = board.play(m);
                    self.alpha_beta(&mut child, depth - 1, alpha, beta, false)
                };
                max_score = max_score.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            max_score
        } else {
            let mut min_score = INFINITY;
            for m in moves {
                let score = {
                    let mut child = board.play(m);
                    self.alpha_beta(&mut child, depth - 1, alpha, beta, true)
                };
                min_score = min_score.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            min_score
        }
    }
}

/// Search `board` to `depth` plies with a fresh [`Searcher`].
///
/// # Example
/// ```
/// use minimax_chess::board::{find_best_move, Board};
///
/// let mut board = Board::new();
/// let result = find_best_move(&mut board, 2).unwrap();
/// assert_eq!(board, Board::new());
/// println!("{} ({})", result.best_move, result.score);
/// ```
pub fn find_best_move(board: &mut Board, depth: u32) -> Option<SearchResult> {
    Searcher::new().find_best_move(board, depth)
}
