//! Reversi game model
//!
//! An 8x8 board, two colours and a strict turn order. A move must bracket
//! at least one line of opposing discs; every bracketed disc flips. A side
//! with no legal move passes, and the game ends when neither side can move.
//!
//! ```rust
//! use docapps_reversi::{Disc, Game, GameStatus, Position};
//!
//! let mut game = Game::new(Disc::Black);
//! assert_eq!(game.legal_moves(Disc::Black).len(), 4);
//!
//! let flipped = game.play("d3".parse::<Position>()?)?;
//! assert_eq!(flipped, 1);
//! assert_eq!(game.status(), GameStatus::InProgress { turn: Disc::White });
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The state the host stores is the JSON document produced by
//! [`Game::to_json`].

mod app;
mod error;
mod game;
mod state;
mod types;

pub use app::{ReversiAction, ReversiApp};
pub use error::{Result, ReversiError};
pub use game::{Game, GameStatus, Score};
pub use types::{Disc, Grid, Position, SIZE};
