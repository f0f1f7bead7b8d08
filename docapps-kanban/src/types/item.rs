//! Item: a named, importance-levelled leaf entry

use serde::Serialize;

/// Highest importance an item can carry (`***name***`)
pub const MAX_IMPORTANCE: u8 = 3;

/// A single card on the board.
///
/// Items are values: editing one means replacing it in its list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Item {
    name: String,
    importance: u8,
}

impl Item {
    /// Create an item, clamping `importance` to [`MAX_IMPORTANCE`].
    pub fn new(name: impl Into<String>, importance: u8) -> Self {
        Self {
            name: name.into(),
            importance: importance.min(MAX_IMPORTANCE),
        }
    }

    /// Create an item with no emphasis
    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(name, 0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn importance(&self) -> u8 {
        self.importance
    }

    /// The name wrapped in `importance` asterisks on each side.
    pub fn to_markdown(&self) -> String {
        let marker = "*".repeat(usize::from(self.importance));
        format!("{marker}{}{marker}", self.name)
    }
}
