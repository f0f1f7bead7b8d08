//! The Kanban board as an embeddable app

use crate::error::KanbanError;
use crate::markdown::MarkdownStyle;
use crate::operation::BoardOperation;
use crate::types::Board;
use docapps_config::{ConfigResult, KanbanSettings};
use docapps_host::App;

/// Host-facing Kanban app: markdown text in, markdown text out.
#[derive(Debug, Clone, Default)]
pub struct KanbanApp {
    style: MarkdownStyle,
}

impl KanbanApp {
    /// Fails when `settings` describe a style whose output would not read
    /// back as the same board.
    pub fn new(settings: &KanbanSettings) -> ConfigResult<Self> {
        Ok(Self {
            style: MarkdownStyle::try_from(settings)?,
        })
    }

    pub fn style(&self) -> &MarkdownStyle {
        &self.style
    }
}

impl App for KanbanApp {
    const NAME: &'static str = "kanban";
    type Model = Board;
    type Action = BoardOperation;
    type Error = KanbanError;

    fn load(&self, data: &str) -> Board {
        Board::deserialize(data)
    }

    fn apply(&self, board: &mut Board, operation: BoardOperation) -> Result<(), KanbanError> {
        operation.apply(board)
    }

    fn save(&self, board: &Board) -> Result<String, KanbanError> {
        Ok(board.serialize_with(&self.style))
    }
}
