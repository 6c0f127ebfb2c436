use std::fmt;

use crate::error::{Error, Result};

/// LIFO stack over a growable vector. `push` is amortized O(1), `pop` and
/// `peek` are O(1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::empty("stack"))
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(Error::empty("stack"))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Index of the element nearest the top equal to `value`, counted from the
    /// top (0 is the top element).
    pub fn search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().rev().position(|item| item == value)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Stack<T> {
    /// Bottom to top, e.g. `[1, 2, 3]` when 3 is on top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.items)
    }
}
