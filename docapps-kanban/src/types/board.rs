//! Board: the root aggregate of ordered lists

use super::{check_index, check_insert_index, List};
use crate::markdown::{self, MarkdownStyle};
use serde::Serialize;
use tracing::{debug, warn};

/// The kanban board: an ordered sequence of lists.
///
/// Equality is structural over lists, items, names and importance, and is
/// sensitive to order at every level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    lists: Vec<List>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new empty list
    pub fn add_list(&mut self, name: impl Into<String>) {
        self.lists.push(List::new(name));
    }

    /// Append an already-built list
    pub fn push_list(&mut self, list: List) {
        self.lists.push(list);
    }

    /// Insert `list` at `index`, shifting later lists right.
    ///
    /// # Panics
    ///
    /// If `index > len()`.
    #[track_caller]
    pub fn insert_list(&mut self, index: usize, list: List) {
        check_insert_index("list", index, self.lists.len());
        self.lists.insert(index, list);
    }

    /// Remove and return the list at `index`.
    ///
    /// # Panics
    ///
    /// If `index >= len()`.
    #[track_caller]
    pub fn remove_list_at(&mut self, index: usize) -> List {
        check_index("list", index, self.lists.len());
        self.lists.remove(index)
    }

    /// # Panics
    ///
    /// If `index >= len()`.
    #[track_caller]
    pub fn list_at(&self, index: usize) -> &List {
        check_index("list", index, self.lists.len());
        &self.lists[index]
    }

    /// # Panics
    ///
    /// If `index >= len()`.
    #[track_caller]
    pub fn list_at_mut(&mut self, index: usize) -> &mut List {
        check_index("list", index, self.lists.len());
        &mut self.lists[index]
    }

    /// Checked counterpart of [`Board::list_at`]
    pub fn get(&self, index: usize) -> Option<&List> {
        self.lists.get(index)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn lists(&self) -> impl ExactSizeIterator<Item = &List> {
        self.lists.iter()
    }

    /// Move one item: remove it from `from_list` at `from_item`, then insert
    /// it into `to_list` at `to_item`.
    ///
    /// Removal happens first, so within one list `to_item` counts positions
    /// after the item has been taken out: moving `A` in `[A, B, C]` with
    /// `to_item = 2` yields `[B, C, A]`.
    ///
    /// Every position is checked before anything moves.
    ///
    /// # Panics
    ///
    /// If a list index is out of range, `from_item` is not an item of
    /// `from_list`, or `to_item` is past the end of the destination list as
    /// it stands after the removal.
    #[track_caller]
    pub fn move_item(&mut self, from_list: usize, from_item: usize, to_list: usize, to_item: usize) {
        check_index("list", from_list, self.lists.len());
        check_index("list", to_list, self.lists.len());
        check_index("item", from_item, self.lists[from_list].len());

        let dest_len = if from_list == to_list {
            self.lists[to_list].len() - 1
        } else {
            self.lists[to_list].len()
        };
        check_insert_index("item", to_item, dest_len);

        let item = self.lists[from_list].remove_item_at(from_item);
        debug!(
            from_list,
            from_item, to_list, to_item, item = item.name(), "moving item"
        );
        self.lists[to_list].insert_item(to_item, item);
    }

    /// Move one list with the same remove-then-insert semantics as
    /// [`Board::move_item`].
    ///
    /// # Panics
    ///
    /// If `from >= len()` or `to >= len()`.
    #[track_caller]
    pub fn move_list(&mut self, from: usize, to: usize) {
        check_index("list", from, self.lists.len());
        check_insert_index("list", to, self.lists.len() - 1);

        let list = self.lists.remove(from);
        debug!(from, to, list = list.name(), "moving list");
        self.lists.insert(to, list);
    }

    /// Print the board in the default markdown style.
    pub fn serialize(&self) -> String {
        self.serialize_with(&MarkdownStyle::default())
    }

    /// Print the board, one list block after another with no blank lines.
    pub fn serialize_with(&self, style: &MarkdownStyle) -> String {
        self.lists
            .iter()
            .map(|list| list.to_markdown_with(style))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Parse `text`, or return the grammar mismatch that stopped it.
    pub fn try_deserialize(text: &str) -> crate::Result<Self> {
        markdown::parse_board(text)
    }

    /// Parse `text`, degrading to an empty board on a grammar mismatch.
    ///
    /// Lines that are neither list nor item bullets are skipped silently;
    /// only a structural mismatch empties the board.
    pub fn deserialize(text: &str) -> Self {
        Self::try_deserialize(text).unwrap_or_else(|err| {
            warn!("discarding unreadable board: {err}");
            Self::default()
        })
    }
}
