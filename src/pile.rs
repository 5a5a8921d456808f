//! A generic LIFO pile, used for the draw and discard piles.

extern crate alloc;

use alloc::vec::Vec;

/// A last-in-first-out pile of items.
///
/// Backed by a `Vec` with the top of the pile at the tail, so every
/// operation is O(1) amortized.
#[derive(Debug, Clone)]
pub struct Pile<T> {
    items: Vec<T>,
}

impl<T> Pile<T> {
    /// Creates a new empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Places an item on top of the pile.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item, or `None` if the pile is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it, or `None` if the pile is
    /// empty.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the number of items in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items in bottom-to-top order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Pile<T> {
    /// Returns a defensive copy of the items in bottom-to-top order,
    /// independent of future mutation of the pile.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> Default for Pile<T> {
    fn default() -> Self {
        Self::new()
    }
}
