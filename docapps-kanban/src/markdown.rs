//! Line-oriented markdown dialect for boards
//!
//! ```text
//! * <list name>          top-level bullet (`*` or `-`) starts a list
//!   * <item>             indented bullet adds an item to the latest list
//!   * **<item>**         emphasis depth on both sides is the importance
//! anything else          ignored
//! ```
//!
//! Parsing is deliberately permissive because the text is hand-edited:
//! prose, blank lines and item bullets that appear before any list are
//! skipped rather than rejected.

use crate::error::{KanbanError, Result};
use crate::types::{Board, Item, List, MAX_IMPORTANCE};
use docapps_config::{ConfigError, ConfigResult, KanbanSettings};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

static LIST_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[*-]\s*(.*)$").expect("Failed to compile list line regex"));
static ITEM_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s+[*-]\s*(.*)$").expect("Failed to compile item line regex"));
static EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([*_]*)(.*?)([*_]*)$").expect("Failed to compile emphasis regex"));

/// How a board is printed. Parsing accepts every style.
///
/// Only styles whose output reads back as the same board can be built:
/// the bullet is `*` or `-` and items are indented by at least one space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownStyle {
    bullet: char,
    indent: usize,
}

impl Default for MarkdownStyle {
    fn default() -> Self {
        Self {
            bullet: '*',
            indent: 2,
        }
    }
}

impl TryFrom<&KanbanSettings> for MarkdownStyle {
    type Error = ConfigError;

    fn try_from(settings: &KanbanSettings) -> ConfigResult<Self> {
        settings.validate()?;
        Ok(Self {
            bullet: settings.bullet,
            indent: settings.indent,
        })
    }
}

impl MarkdownStyle {
    pub fn new(bullet: char, indent: usize) -> ConfigResult<Self> {
        Self::try_from(&KanbanSettings { bullet, indent })
    }

    pub fn bullet(&self) -> char {
        self.bullet
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub(crate) fn list_line(&self, name: &str) -> String {
        format!("{} {}", self.bullet, name)
    }

    pub(crate) fn item_line(&self, item: &Item) -> String {
        format!(
            "{:indent$}{} {}",
            "",
            self.bullet,
            item.to_markdown(),
            indent = self.indent
        )
    }
}

/// Classification of one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Unindented bullet; the list name
    List(&'a str),
    /// Indented bullet; the raw item text, emphasis still attached
    Item(&'a str),
    /// Anything else
    Ignored,
}

/// Classify `line`. `line_no` is 1-based and only used in errors.
///
/// Both bullet patterns always fill their capture group, so no line
/// produces `Err` today. The result stays fallible so that
/// [`Board::try_deserialize`] reports a capture mismatch if the grammar
/// ever gains an optional group.
pub fn parse_line(line: &str, line_no: usize) -> Result<Line<'_>> {
    if let Some(caps) = LIST_LINE.captures(line) {
        let name = caps
            .get(1)
            .ok_or_else(|| KanbanError::parse(line_no, "list bullet without a name"))?;
        return Ok(Line::List(name.as_str()));
    }

    if let Some(caps) = ITEM_LINE.captures(line) {
        let text = caps
            .get(1)
            .ok_or_else(|| KanbanError::parse(line_no, "item bullet without text"))?;
        return Ok(Line::Item(text.as_str()));
    }

    Ok(Line::Ignored)
}

/// Split raw item text into its name and importance.
///
/// The importance is the shorter of the leading and trailing marker runs
/// (`*` or `_`), capped at [`MAX_IMPORTANCE`]. When only the leading side
/// carries markers they are dropped together with the whitespace that
/// follows them. Keeping the bare middle capture would not be stable:
/// `"** text"` would become `" text"`, which prints as `"  *  text"` and
/// reads back as `"text"`.
///
/// The emphasis pattern matches every string with all three groups set,
/// so this does not return `Err` for any input today.
pub fn parse_emphasis(text: &str, line_no: usize) -> Result<Item> {
    let caps = EMPHASIS
        .captures(text)
        .ok_or_else(|| KanbanError::parse(line_no, "item text does not match emphasis grammar"))?;
    let (Some(left), Some(name), Some(right)) = (caps.get(1), caps.get(2), caps.get(3)) else {
        return Err(KanbanError::parse(line_no, "emphasis capture missing"));
    };

    let depth = left.len().min(right.len()).min(usize::from(MAX_IMPORTANCE));
    let importance = u8::try_from(depth).unwrap_or(MAX_IMPORTANCE);

    let name = if importance == 0 && !left.is_empty() {
        name.as_str()
            .trim_start_matches(|c: char| c.is_whitespace() || c == '*' || c == '_')
    } else {
        name.as_str()
    };

    Ok(Item::new(name, importance))
}

/// Parse a whole board in one forward pass.
pub fn parse_board(text: &str) -> Result<Board> {
    let mut board = Board::new();
    let mut current: Option<List> = None;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        match parse_line(line, line_no)? {
            Line::List(name) => {
                if let Some(done) = current.replace(List::new(name)) {
                    board.push_list(done);
                }
            }
            Line::Item(raw) => match current.as_mut() {
                Some(list) => {
                    let item = parse_emphasis(raw, line_no)?;
                    list.add_item(item.name(), item.importance());
                }
                None => trace!(line_no, "item before any list, skipped"),
            },
            Line::Ignored => trace!(line_no, "not a bullet, skipped"),
        }
    }

    if let Some(done) = current {
        board.push_list(done);
    }

    debug!(lists = board.len(), "parsed board");
    Ok(board)
}
