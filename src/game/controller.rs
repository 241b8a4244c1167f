use std::fmt;

use crate::board::{
    Board, Color, FenError, GameStatus, Move, MoveError, MoveList, Piece, SearchResult, Searcher,
    Square, UndoError,
};

use super::GameConfig;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
}

impl GameOutcome {
    /// The outcome a position status implies, `None` while play continues
    #[must_use]
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Ongoing { .. } => None,
            GameStatus::Checkmate { winner } => Some(GameOutcome::Checkmate { winner }),
            GameStatus::Stalemate => Some(GameOutcome::Stalemate),
            GameStatus::FiftyMoveRule => Some(GameOutcome::FiftyMoveRule),
            GameStatus::InsufficientMaterial => Some(GameOutcome::InsufficientMaterial),
        }
    }

    #[must_use]
    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            GameOutcome::Stalemate => write!(f, "Draw by stalemate"),
            GameOutcome::FiftyMoveRule => write!(f, "Draw by fifty-move rule"),
            GameOutcome::InsufficientMaterial => write!(f, "Draw by insufficient material"),
        }
    }
}

/// A human-versus-engine game: the board, who plays what, and the result once
/// the game has ended.
#[derive(Debug)]
pub struct Game {
    board: Board,
    initial: Board,
    config: GameConfig,
    searcher: Searcher,
    history: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a game from the configured position.
    pub fn new(config: GameConfig) -> Result<Self, FenError> {
        let initial = config.start_board()?;
        let mut game = Game {
            board: initial.clone(),
            initial,
            config,
            searcher: Searcher::new(),
            history: Vec::new(),
            outcome: None,
        };
        game.update_outcome();
        Ok(game)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played since the game (or the loaded position) started
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn fen(&self) -> String {
        self.board.to_fen()
    }

    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.board.side_to_move() == self.config.player_color
    }

    #[must_use]
    pub fn is_engine_turn(&self) -> bool {
        !self.is_player_turn()
    }

    pub fn legal_moves(&mut self) -> MoveList {
        self.board.generate_moves()
    }

    pub fn is_legal_move(&mut self, from: Square, to: Square, promotion: Option<Piece>) -> bool {
        self.board.find_legal_move(from, to, promotion).is_ok()
    }

    /// Play the human's move.
    ///
    /// Rejected without any state change when the game is over, when the
    /// engine is to move, or when no legal move matches.
    pub fn play_player_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Move, MoveError> {
        self.check_player_can_move()?;
        let mv = self.board.find_legal_move(from, to, promotion)?;
        self.record(mv);
        Ok(mv)
    }

    /// Play the human's move given in coordinate notation (`e2e4`, `e7e8q`).
    pub fn play_player_notation(&mut self, notation: &str) -> Result<Move, MoveError> {
        self.check_player_can_move()?;
        let mv = self.board.parse_move(notation)?;
        self.record(mv);
        Ok(mv)
    }

    /// Search for and play the engine's move.
    ///
    /// Returns `Ok(None)` when the engine has no legal move; the game is then
    /// classified as over.
    pub fn play_engine_move(&mut self) -> Result<Option<SearchResult>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.is_engine_turn() {
            return Err(MoveError::NotYourTurn);
        }

        let Some(result) = self
            .searcher
            .find_best_move(&mut self.board, self.config.ai_depth)
        else {
            self.update_outcome();
            return Ok(None);
        };

        self.record(result.best_move);
        Ok(Some(result))
    }

    /// Take back the last turn.
    ///
    /// Retracts the most recent ply and, if that leaves the engine to move,
    /// the player's ply before it as well, so the human is to move again
    /// whenever possible. Returns the number of plies retracted.
    pub fn undo_turn(&mut self) -> Result<usize, UndoError> {
        if self.history.is_empty() {
            #[cfg(feature = "logging")]
            log::warn!("undo requested with no moves played");
            return Err(UndoError::EmptyHistory);
        }

        let mut undone = 0;
        while self.history.pop().is_some() {
            #[cfg_attr(not(feature = "logging"), allow(unused_variables))]
            let mv = self.board.undo_move()?;
            undone += 1;
            #[cfg(feature = "logging")]
            log::info!("took back {mv}");
            if self.is_player_turn() {
                break;
            }
        }

        self.update_outcome();
        Ok(undone)
    }

    /// One-line description of the game state, e.g. `CHECK -- Black to move.`
    #[must_use]
    pub fn status_message(&self) -> String {
        if let Some(outcome) = self.outcome {
            return format!("Game over: {outcome}.");
        }
        let color = self.board.side_to_move();
        if self.board.in_check(color) {
            format!("CHECK -- {color} to move.")
        } else {
            format!("{color} to move.")
        }
    }

    /// Back to the configured start position.
    pub fn reset(&mut self) {
        self.board = self.initial.clone();
        self.history.clear();
        self.update_outcome();
    }

    /// Replace the position with a FEN record.
    ///
    /// On a parse error the game is left exactly as it was.
    pub fn load_position(&mut self, fen: &str) -> Result<(), FenError> {
        let board = Board::try_from_fen(fen)?;
        self.board = board;
        self.history.clear();
        self.update_outcome();
        Ok(())
    }

    fn check_player_can_move(&self) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.is_player_turn() {
            return Err(MoveError::NotYourTurn);
        }
        Ok(())
    }

    fn record(&mut self, mv: Move) {
        #[cfg(feature = "logging")]
        log::info!("{} plays {mv}", mv.color());
        self.board.make_move(mv);
        self.history.push(mv);
        self.update_outcome();
    }

    fn update_outcome(&mut self) {
        self.outcome = GameOutcome::from_status(self.board.status());
        #[cfg(feature = "logging")]
        {
            if let Some(outcome) = self.outcome {
                log::info!("game over: {outcome}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(
            GameOutcome::Checkmate {
                winner: Color::Black
            }
            .to_string(),
            "Black wins by checkmate"
        );
        assert_eq!(GameOutcome::FiftyMoveRule.to_string(), "Draw by fifty-move rule");
        assert_eq!(GameOutcome::Stalemate.winner(), None);
    }

    #[test]
    fn test_outcome_from_status() {
        assert_eq!(
            GameOutcome::from_status(GameStatus::Ongoing { in_check: true }),
            None
        );
        assert_eq!(
            GameOutcome::from_status(GameStatus::InsufficientMaterial),
            Some(GameOutcome::InsufficientMaterial)
        );
    }
}
