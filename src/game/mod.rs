//! Human-versus-engine game driver.
//!
//! [`Game`] wraps a [`Board`](crate::board::Board) with turn ownership, the
//! engine's search settings and end-of-game classification.
//!
//! # Example
//! ```
//! use minimax_chess::game::{Game, GameConfig};
//!
//! let config = GameConfig { ai_depth: 1, ..GameConfig::default() };
//! let mut game = Game::new(config).unwrap();
//! game.play_player_notation("e2e4").unwrap();
//! let reply = game.play_engine_move().unwrap();
//! assert!(reply.is_some());
//! assert_eq!(game.status_message(), "White to move.");
//! ```

mod config;
mod controller;

pub use config::{ConfigError, GameConfig, DEFAULT_AI_DEPTH, MAX_AI_DEPTH};
pub use controller::{Game, GameOutcome};
