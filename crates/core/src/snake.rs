//! Snake body - ordered occupied cells with move/grow operations
//!
//! The body is stored head-first in a ring buffer so a move is one push at the
//! front and (usually) one pop at the back. Capacity is reserved up front for
//! the whole grid so moving never reallocates.

use std::collections::VecDeque;

use crate::types::Cell;

/// Result of [`Snake::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The head moved; `vacated` is the tail cell that was released (None when growing).
    Continued { vacated: Option<Cell> },
    /// The new head would land on the body. The body is left unchanged.
    SelfCollision,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Head at index 0, tail at the back.
    body: VecDeque<Cell>,
    grow_pending: bool,
}

impl Snake {
    /// A single-cell snake at `head`.
    pub fn new(head: Cell) -> Self {
        Self::with_capacity(head, 1)
    }

    /// A single-cell snake with room for `capacity` cells without reallocating.
    pub fn with_capacity(head: Cell, capacity: usize) -> Self {
        let mut body = VecDeque::with_capacity(capacity.max(1));
        body.push_back(head);
        Self {
            body,
            grow_pending: false,
        }
    }

    /// Build a snake from explicit cells, head first.
    ///
    /// Returns `None` for an empty sequence or one containing duplicate cells.
    pub fn from_cells<I>(cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = Cell>,
    {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        let has_duplicates = body
            .iter()
            .enumerate()
            .any(|(i, c)| body.iter().skip(i + 1).any(|o| o == c));
        if has_duplicates {
            return None;
        }
        Some(Self {
            body,
            grow_pending: false,
        })
    }

    /// Reserve room for at least `additional` more cells.
    pub fn reserve(&mut self, additional: usize) {
        self.body.reserve(additional);
    }

    pub fn head(&self) -> Cell {
        // The body is never empty: every constructor inserts at least one cell and
        // `advance` only removes a cell after pushing one.
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake has at least its head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Cells head-to-tail.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn growth_pending(&self) -> bool {
        self.grow_pending
    }

    /// Keep the tail on the next [`advance`](Self::advance).
    pub fn grow_on_next_move(&mut self) {
        self.grow_pending = true;
    }

    /// Move the head to `new_head`.
    ///
    /// Collision is checked against the pre-move body. Without pending growth the
    /// tail is about to be vacated, so the head may follow directly into it.
    pub fn advance(&mut self, new_head: Cell) -> MoveOutcome {
        let blocking = if self.grow_pending {
            self.body.len()
        } else {
            self.body.len() - 1
        };
        if self.body.iter().take(blocking).any(|c| *c == new_head) {
            return MoveOutcome::SelfCollision;
        }

        self.body.push_front(new_head);
        if self.grow_pending {
            self.grow_pending = false;
            MoveOutcome::Continued { vacated: None }
        } else {
            MoveOutcome::Continued {
                vacated: self.body.pop_back(),
            }
        }
    }
}
