use std::collections::VecDeque;
use std::fmt;

use crate::error::{Error, Result};

/// FIFO queue over a ring buffer.
///
/// `enqueue` is amortized O(1); `dequeue` and `peek` are O(1) since the ring
/// buffer never shifts elements on front removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    /// Adds `value` at the rear.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the front element.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::empty("queue"))
    }

    /// Returns the front element without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.items.front().ok_or(Error::empty("queue"))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Position of the first element equal to `value`, 0 being the front.
    pub fn search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|item| item == value)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Queue<T> {
    /// Front to rear.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
