// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row hover state: compute enter/leave transitions as the pointer moves over option rows.
//!
//! ## Usage
//!
//! 1) Resolve the row under the pointer, for example with
//!    [`SelectLayout::row_at`](crate::layout::SelectLayout::row_at).
//! 2) Call [`RowHover::update`] with that row (or `None`) to get `Leave(..)` / `Enter(..)`.
//! 3) Deliver `Enter(i)` as a pointer-enter to row `i`.
//!
//! ## Minimal example
//!
//! ```
//! use understory_select::hover::{HoverEvent, RowHover};
//! let mut h = RowHover::new();
//! assert_eq!(h.update(Some(1)), vec![HoverEvent::Enter(1)]);
//! assert_eq!(h.update(Some(2)), vec![HoverEvent::Leave(1), HoverEvent::Enter(2)]);
//! assert!(h.update(Some(2)).is_empty());
//! ```

use alloc::vec::Vec;

/// A hover transition event for a row index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// Pointer entered the row.
    Enter(usize),
    /// Pointer left the row.
    Leave(usize),
}

/// Tracks the row currently under the pointer.
///
/// Rows are flat siblings, so a transition is at most one leave followed by one enter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowHover {
    current: Option<usize>,
}

impl RowHover {
    /// Create an empty hover state.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The row under the pointer, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Forget the hovered row, returning the corresponding leave event.
    pub fn clear(&mut self) -> Vec<HoverEvent> {
        self.update(None)
    }

    /// Update the hovered row and return the transitions from the previous one.
    ///
    /// The leave (if any) precedes the enter (if any).
    pub fn update(&mut self, row: Option<usize>) -> Vec<HoverEvent> {
        let mut out = Vec::new();
        if self.current == row {
            return out;
        }
        if let Some(prev) = self.current {
            out.push(HoverEvent::Leave(prev));
        }
        if let Some(next) = row {
            out.push(HoverEvent::Enter(next));
        }
        self.current = row;
        out
    }
}
