//! Kanban board model with a markdown text format
//!
//! The board lives in its host document as a plain markdown bullet list:
//! top-level bullets are lists, indented bullets are the items of the list
//! above them, and emphasis markers around an item encode its importance.
//!
//! ```text
//! * Todo
//!   * Buy milk
//!   * **Call mom**
//! * Done
//!   * ***Ship release***
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use docapps_kanban::Board;
//!
//! let mut board = Board::deserialize("* Todo\n  * Buy milk\n  * **Call mom**\n* Done");
//! assert_eq!(board.len(), 2);
//! assert_eq!(board.list_at(0).item_at(1).importance(), 2);
//!
//! // drag "Call mom" to the top of Done
//! board.move_item(0, 1, 1, 0);
//! assert_eq!(board.serialize(), "* Todo\n  * Buy milk\n* Done\n  * **Call mom**");
//! ```
//!
//! ## Lifecycle
//!
//! A [`Board`] is a disposable working copy. Each edit parses the host's
//! text, mutates the board in place and prints it again; see
//! [`KanbanApp`] for the host-facing wrapper.
//!
//! ## Positions
//!
//! Lists and items have no identity beyond their index. The model's index
//! methods panic on out-of-range positions. Positions that arrive from the
//! outside go through [`BoardOperation::apply`], which checks them first and
//! reports [`KanbanError`] instead.

mod app;
mod error;
pub mod markdown;
pub mod operation;
pub mod types;

pub use app::KanbanApp;
pub use error::{KanbanError, Result};
pub use markdown::MarkdownStyle;
pub use operation::BoardOperation;
pub use types::{Board, Item, List, MAX_IMPORTANCE};
