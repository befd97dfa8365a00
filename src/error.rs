//! # Cursor errors
//!
//! `CursorError` describes misuse of a [`Cursor`][crate::Cursor] or
//! [`RevCursor`][crate::RevCursor]: stepping past one of the two sentinel positions or reading
//! the element at a sentinel. The panicking cursor methods panic with these messages.

use thiserror::Error;

/// Cursor error
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum CursorError {
    /// The cursor is at the end sentinel and cannot advance any further.
    #[error("Cannot advance a cursor positioned past the last element.")]
    PastEnd,
    /// The cursor is at the before-first sentinel and cannot retreat any further.
    #[error("Cannot retreat a cursor positioned before the first element.")]
    BeforeFirst,
    /// The cursor is at a sentinel, which holds no element.
    #[error("Cannot dereference a cursor positioned at a sentinel.")]
    Sentinel,
}
