//! # Dynamic Array
//!
//! A growable array with an explicit capacity separate from its logical
//! length. Appending doubles the capacity when the backing store is full, so
//! `push` is amortized O(1). Inserting or deleting at an arbitrary index
//! shifts the tail and costs O(n).

use std::fmt;

use log::debug;

use crate::error::{Error, Result};

/// Capacity of an array created with [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Growable array over a fixed-length slot buffer.
///
/// Slots `0..len` are always `Some`; slots `len..capacity` are always `None`.
#[derive(Clone)]
pub struct DynamicArray<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DynamicArray {
            slots: empty_slots(capacity),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.slots[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(Error::out_of_range(index, self.len))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.slots[..len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(Error::out_of_range(index, len))
    }

    /// Overwrites the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Appends `value`, doubling the capacity first if the array is full.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Inserts `value` at `index`, shifting later elements one slot right.
    /// `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(Error::out_of_range(index, self.len));
        }
        if self.len == self.capacity() {
            self.grow();
        }
        self.slots[self.len] = Some(value);
        self.slots[index..=self.len].rotate_right(1);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements one
    /// slot left.
    pub fn delete(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        let value = self.slots[..len]
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(Error::out_of_range(index, len))?;
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(value)
    }

    /// Index of the first element equal to `value`.
    pub fn search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.len].iter().flatten()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn grow(&mut self) {
        let new_capacity = (self.capacity() * 2).max(1);
        debug!(
            "growing dynamic array from {} to {new_capacity} slots",
            self.capacity()
        );
        let mut slots = empty_slots(new_capacity);
        for (new, old) in slots.iter_mut().zip(self.slots.iter_mut()) {
            *new = old.take();
        }
        self.slots = slots;
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut array = Self::with_capacity(iter.size_hint().0.max(DEFAULT_CAPACITY));
        for value in iter {
            array.push(value);
        }
        array
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}
