//! Game setup: which side the human plays, engine strength, start position.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, FenError};

/// Search depth used when none is given
pub const DEFAULT_AI_DEPTH: u32 = 4;

/// Deepest search accepted from the command line
pub const MAX_AI_DEPTH: u32 = 8;

/// Error type for rejected game settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A flag was given without its value
    MissingValue { flag: String },
    /// Color must be `white` or `black`
    InvalidColor { found: String },
    /// Depth must be an integer in `1..=MAX_AI_DEPTH`
    InvalidDepth { found: String },
    /// The start position did not parse
    InvalidFen(FenError),
    UnknownArgument { arg: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValue { flag } => write!(f, "Missing value for '{flag}'"),
            ConfigError::InvalidColor { found } => {
                write!(f, "Invalid color '{found}', expected 'white' or 'black'")
            }
            ConfigError::InvalidDepth { found } => {
                write!(f, "Invalid depth '{found}', expected 1-{MAX_AI_DEPTH}")
            }
            ConfigError::InvalidFen(err) => write!(f, "Invalid start position: {err}"),
            ConfigError::UnknownArgument { arg } => write!(f, "Unknown argument '{arg}'"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidFen(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FenError> for ConfigError {
    fn from(err: FenError) -> Self {
        ConfigError::InvalidFen(err)
    }
}

/// Settings for one human-versus-engine game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// The side the human plays; the engine takes the other
    pub player_color: Color,
    /// Plies searched per engine move
    pub ai_depth: u32,
    /// Start position; `None` is the standard initial layout
    pub start_fen: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player_color: Color::White,
            ai_depth: DEFAULT_AI_DEPTH,
            start_fen: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn engine_color(&self) -> Color {
        self.player_color.opponent()
    }

    /// The configured start position.
    pub fn start_board(&self) -> Result<Board, FenError> {
        match &self.start_fen {
            Some(fen) => Board::try_from_fen(fen),
            None => Ok(Board::new()),
        }
    }

    /// Parse command-line flags (program name already stripped).
    ///
    /// Accepts `--color white|black`, `--depth N` and `--fen "<record>"`.
    /// Unspecified settings keep their defaults.
    ///
    /// # Example
    /// ```
    /// use minimax_chess::board::Color;
    /// use minimax_chess::game::GameConfig;
    ///
    /// let config = GameConfig::from_args(["--color", "black", "--depth", "3"]).unwrap();
    /// assert_eq!(config.player_color, Color::Black);
    /// assert_eq!(config.ai_depth, 3);
    /// ```
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = GameConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let flag = arg.as_ref();
            let mut value = || {
                args.next()
                    .map(|v| v.as_ref().to_string())
                    .ok_or_else(|| ConfigError::MissingValue {
                        flag: flag.to_string(),
                    })
            };
            match flag {
                "--color" | "-c" => config.player_color = parse_color(&value()?)?,
                "--depth" | "-d" => config.ai_depth = parse_depth(&value()?)?,
                "--fen" => {
                    let fen = value()?;
                    Board::try_from_fen(&fen)?;
                    config.start_fen = Some(fen);
                }
                other => {
                    return Err(ConfigError::UnknownArgument {
                        arg: other.to_string(),
                    })
                }
            }
        }

        Ok(config)
    }
}

fn parse_color(s: &str) -> Result<Color, ConfigError> {
    match s.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        _ => Err(ConfigError::InvalidColor {
            found: s.to_string(),
        }),
    }
}

fn parse_depth(s: &str) -> Result<u32, ConfigError> {
    match s.parse::<u32>() {
        Ok(depth) if (1..=MAX_AI_DEPTH).contains(&depth) => Ok(depth),
        _ => Err(ConfigError::InvalidDepth {
            found: s.to_string(),
        }),
    }
}
