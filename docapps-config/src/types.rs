//! Typed settings sections, one per embeddable app

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Root settings document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub kanban: KanbanSettings,
    pub reversi: ReversiSettings,
    pub youtube: YoutubeSettings,
}

impl AppSettings {
    /// Reject values the apps cannot honour.
    pub fn validate(&self) -> ConfigResult<()> {
        self.kanban.validate()
    }
}

/// Markdown output style for the Kanban board.
///
/// Parsing always accepts both bullets and any indentation; these only
/// shape what gets written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KanbanSettings {
    /// Bullet character written before list and item lines (`*` or `-`)
    pub bullet: char,
    /// Number of spaces before an item bullet
    pub indent: usize,
}

impl Default for KanbanSettings {
    fn default() -> Self {
        Self {
            bullet: '*',
            indent: 2,
        }
    }
}

impl KanbanSettings {
    /// Reject a bullet other than `*` / `-` and an indent of 0.
    pub fn validate(&self) -> ConfigResult<()> {
        if !matches!(self.bullet, '*' | '-') {
            return Err(ConfigError::validation(
                "kanban.bullet",
                format!("expected '*' or '-', got '{}'", self.bullet),
            ));
        }
        // An unindented item line would read back as a new list
        if self.indent == 0 {
            return Err(ConfigError::validation(
                "kanban.indent",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Which side opens a fresh Reversi game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    #[default]
    Black,
    White,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReversiSettings {
    pub first_player: FirstPlayer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeSettings {
    /// Embed from `youtube-nocookie.com`
    pub privacy_enhanced: bool,
    pub autoplay: bool,
}
