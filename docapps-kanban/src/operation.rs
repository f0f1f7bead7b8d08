//! Board operations produced by the renderer's gestures
//!
//! Operations arrive from outside the process (a drop event, an inline
//! edit), so every position is checked against the board before the model
//! is touched. The model's own methods panic on bad positions; these return
//! [`KanbanError`] instead.

use crate::error::{KanbanError, Result};
use crate::types::{Board, Item};
use docapps_common::Pretty;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One user-driven change to a board.
///
/// Serialized with an `op` tag, e.g.
/// `{"op": "move_item", "from_list": 0, "from_item": 2, "to_list": 1, "to_item": 0}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BoardOperation {
    AddList {
        name: String,
    },
    RemoveList {
        list: usize,
    },
    RenameList {
        list: usize,
        name: String,
    },
    /// Same post-removal destination semantics as [`Board::move_list`]
    MoveList {
        from: usize,
        to: usize,
    },
    AddItem {
        list: usize,
        name: String,
        #[serde(default)]
        importance: u8,
    },
    RemoveItem {
        list: usize,
        item: usize,
    },
    RenameItem {
        list: usize,
        item: usize,
        name: String,
    },
    SetImportance {
        list: usize,
        item: usize,
        importance: u8,
    },
    /// Same post-removal destination semantics as [`Board::move_item`]
    MoveItem {
        from_list: usize,
        from_item: usize,
        to_list: usize,
        to_item: usize,
    },
}

impl BoardOperation {
    /// Check the operation's positions against `board`, then apply it.
    ///
    /// On error the board is unchanged.
    pub fn apply(&self, board: &mut Board) -> Result<()> {
        debug!("Applying board operation: {}", Pretty(self));
        match self {
            BoardOperation::AddList { name } => board.add_list(name.as_str()),
            BoardOperation::RemoveList { list } => {
                list_index(board, *list)?;
                board.remove_list_at(*list);
            }
            BoardOperation::RenameList { list, name } => {
                list_index(board, *list)?;
                board.list_at_mut(*list).rename(name.as_str());
            }
            BoardOperation::MoveList { from, to } => {
                list_index(board, *from)?;
                list_index(board, *to)?;
                board.move_list(*from, *to);
            }
            BoardOperation::AddItem {
                list,
                name,
                importance,
            } => {
                list_index(board, *list)?;
                board.list_at_mut(*list).add_item(name.as_str(), *importance);
            }
            BoardOperation::RemoveItem { list, item } => {
                item_index(board, *list, *item)?;
                board.list_at_mut(*list).remove_item_at(*item);
            }
            BoardOperation::RenameItem { list, item, name } => {
                item_index(board, *list, *item)?;
                let target = board.list_at_mut(*list);
                let importance = target.item_at(*item).importance();
                target.replace_item_at(*item, Item::new(name.as_str(), importance));
            }
            BoardOperation::SetImportance {
                list,
                item,
                importance,
            } => {
                item_index(board, *list, *item)?;
                let target = board.list_at_mut(*list);
                let name = target.item_at(*item).name().to_string();
                target.replace_item_at(*item, Item::new(name, *importance));
            }
            BoardOperation::MoveItem {
                from_list,
                from_item,
                to_list,
                to_item,
            } => {
                item_index(board, *from_list, *from_item)?;
                list_index(board, *to_list)?;
                let dest_len = board.list_at(*to_list).len();
                let dest_len = if from_list == to_list {
                    dest_len - 1
                } else {
                    dest_len
                };
                if *to_item > dest_len {
                    return Err(KanbanError::ItemIndexOutOfRange {
                        list: *to_list,
                        index: *to_item,
                        len: dest_len,
                    });
                }
                board.move_item(*from_list, *from_item, *to_list, *to_item);
            }
        }
        Ok(())
    }
}

fn list_index(board: &Board, index: usize) -> Result<()> {
    if index < board.len() {
        Ok(())
    } else {
        Err(KanbanError::ListIndexOutOfRange {
            index,
            len: board.len(),
        })
    }
}

fn item_index(board: &Board, list: usize, index: usize) -> Result<()> {
    list_index(board, list)?;
    let len = board.list_at(list).len();
    if index < len {
        Ok(())
    } else {
        Err(KanbanError::ItemIndexOutOfRange { list, index, len })
    }
}
