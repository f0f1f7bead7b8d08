//! List: a named, ordered column of items

use super::{check_index, check_insert_index, Item};
use crate::markdown::MarkdownStyle;
use serde::Serialize;

/// One column of the board.
///
/// Items are addressed by zero-based position only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct List {
    name: String,
    items: Vec<Item>,
}

impl List {
    /// Create an empty list
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Append a new item built from `name` and `importance`
    pub fn add_item(&mut self, name: impl Into<String>, importance: u8) {
        self.items.push(Item::new(name, importance));
    }

    /// Insert `item` at `index`, shifting later items right.
    ///
    /// # Panics
    ///
    /// If `index > len()`.
    #[track_caller]
    pub fn insert_item(&mut self, index: usize, item: Item) {
        check_insert_index("item", index, self.items.len());
        self.items.insert(index, item);
    }

    /// Remove and return the item at `index`, shifting later items left.
    ///
    /// # Panics
    ///
    /// If `index >= len()`.
    #[track_caller]
    pub fn remove_item_at(&mut self, index: usize) -> Item {
        check_index("item", index, self.items.len());
        self.items.remove(index)
    }

    /// Swap in `item` at `index` and return the one it replaced.
    ///
    /// # Panics
    ///
    /// If `index >= len()`.
    #[track_caller]
    pub fn replace_item_at(&mut self, index: usize, item: Item) -> Item {
        check_index("item", index, self.items.len());
        std::mem::replace(&mut self.items[index], item)
    }

    /// # Panics
    ///
    /// If `index >= len()`.
    #[track_caller]
    pub fn item_at(&self, index: usize) -> &Item {
        check_index("item", index, self.items.len());
        &self.items[index]
    }

    /// Checked counterpart of [`List::item_at`]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> impl ExactSizeIterator<Item = &Item> {
        self.items.iter()
    }

    /// The list as a markdown block in the default style:
    /// `* <name>` followed by one `  * <item>` line per item.
    pub fn to_markdown(&self) -> String {
        self.to_markdown_with(&MarkdownStyle::default())
    }

    pub fn to_markdown_with(&self, style: &MarkdownStyle) -> String {
        std::iter::once(style.list_line(&self.name))
            .chain(self.items.iter().map(|item| style.item_line(item)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
