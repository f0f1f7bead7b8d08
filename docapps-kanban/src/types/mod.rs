//! Core types for the kanban model
//!
//! A [`Board`] exclusively owns its [`List`]s, which exclusively own their
//! [`Item`]s. Order is significant at every level and equality is
//! structural and order-sensitive.

mod board;
mod item;
mod list;

pub use board::Board;
pub use item::{Item, MAX_IMPORTANCE};
pub use list::List;

/// Panic with a uniform message when `index` is not below `len`.
#[track_caller]
pub(crate) fn check_index(what: &str, index: usize, len: usize) {
    assert!(
        index < len,
        "{what} index {index} out of range (length {len})"
    );
}

/// Like [`check_index`] but also accepts `index == len` (append position).
#[track_caller]
pub(crate) fn check_insert_index(what: &str, index: usize, len: usize) {
    assert!(
        index <= len,
        "{what} insert index {index} out of range (length {len})"
    );
}
