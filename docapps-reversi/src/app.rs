//! The Reversi game as an embeddable app

use crate::error::ReversiError;
use crate::game::Game;
use crate::types::{Disc, Position};
use docapps_config::ReversiSettings;
use docapps_host::App;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A click on the board, or a button below it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReversiAction {
    Play { at: Position },
    Pass,
    /// Start over with the configured first player
    Restart,
}

#[derive(Debug, Clone, Default)]
pub struct ReversiApp {
    first: Disc,
}

impl ReversiApp {
    pub fn new(settings: &ReversiSettings) -> Self {
        Self {
            first: settings.first_player.into(),
        }
    }

    pub fn first_player(&self) -> Disc {
        self.first
    }
}

impl App for ReversiApp {
    const NAME: &'static str = "reversi";
    type Model = Game;
    type Action = ReversiAction;
    type Error = ReversiError;

    /// Stored state that is not a game starts a fresh one.
    fn load(&self, data: &str) -> Game {
        if data.trim().is_empty() {
            debug!("no stored game, starting a new one");
            return Game::new(self.first);
        }

        Game::from_json(data).unwrap_or_else(|e| {
            warn!(error = %e, "stored game is unreadable, starting a new one");
            Game::new(self.first)
        })
    }

    fn apply(&self, game: &mut Game, action: ReversiAction) -> Result<(), ReversiError> {
        match action {
            ReversiAction::Play { at } => game.play(at).map(|_| ()),
            ReversiAction::Pass => game.pass(),
            ReversiAction::Restart => {
                *game = Game::new(self.first);
                Ok(())
            }
        }
    }

    fn save(&self, game: &Game) -> Result<String, ReversiError> {
        game.to_json()
    }
}
