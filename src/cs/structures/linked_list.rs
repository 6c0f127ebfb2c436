//! # Singly Linked List
//!
//! Nodes live in an arena and link to their successor by slot index, so the
//! list needs no raw pointers and dropping it never recurses down the chain.
//! The list keeps the slot of its first and last node, which makes both ends
//! O(1) to extend. Slots freed by `delete` are reused by later insertions.
//!
//! | operation              | cost |
//! |------------------------|------|
//! | `push_front`/`push_back` | O(1) |
//! | `get`/`insert`/`delete`  | O(n) |
//! | `search`                 | O(n) |
//! | `len`                    | O(1) |

use std::fmt;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
struct ListNode<T> {
    value: T,
    next: Option<usize>,
}

#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: Vec<Option<ListNode<T>>>,
    /// Vacant slots in `nodes`, reused before the arena grows.
    free: Vec<usize>,
    head: Option<usize>,
    /// Slot of the last node; `None` exactly when empty.
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value` at the end in O(1).
    pub fn push_back(&mut self, value: T) {
        let slot = self.alloc(value, None);
        match self.tail.and_then(|tail| self.node_mut(tail)) {
            Some(last) => last.next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }

    /// Prepends `value` at the front in O(1).
    pub fn push_front(&mut self, value: T) {
        let slot = self.alloc(value, self.head);
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|slot| self.node(slot)).map(|node| &node.value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|slot| self.node(slot)).map(|node| &node.value)
    }

    /// Returns the element at `index`, walking from the head.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.iter()
            .nth(index)
            .ok_or(Error::out_of_range(index, self.len))
    }

    /// Inserts `value` so that it ends up at `index`. `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len;
        if index > len {
            return Err(Error::out_of_range(index, len));
        }
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == len {
            self.push_back(value);
            return Ok(());
        }

        let prev = self
            .slot_at(index - 1)
            .ok_or(Error::out_of_range(index, len))?;
        let next = self.node(prev).and_then(|node| node.next);
        let slot = self.alloc(value, next);
        if let Some(prev) = self.node_mut(prev) {
            prev.next = Some(slot);
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn delete(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        if index >= len {
            return Err(Error::out_of_range(index, len));
        }

        if index == 0 {
            let first = self
                .head
                .and_then(|slot| self.release(slot))
                .ok_or(Error::out_of_range(index, len))?;
            self.head = first.next;
            if self.head.is_none() {
                self.tail = None;
            }
            return Ok(first.value);
        }

        let prev = self
            .slot_at(index - 1)
            .ok_or(Error::out_of_range(index, len))?;
        let removed = self
            .node(prev)
            .and_then(|node| node.next)
            .and_then(|slot| self.release(slot))
            .ok_or(Error::out_of_range(index, len))?;
        if let Some(node) = self.node_mut(prev) {
            node.next = removed.next;
        }
        if removed.next.is_none() {
            self.tail = Some(prev);
        }
        Ok(removed.value)
    }

    /// Index of the first element equal to `value`.
    pub fn search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
        }
    }

    /// Arena slot of the node at list position `index`.
    fn slot_at(&self, index: usize) -> Option<usize> {
        let mut slot = self.head;
        for _ in 0..index {
            slot = self.node(slot?)?.next;
        }
        slot
    }

    fn node(&self, slot: usize) -> Option<&ListNode<T>> {
        self.nodes.get(slot).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut ListNode<T>> {
        self.nodes.get_mut(slot).and_then(Option::as_mut)
    }

    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        let node = ListNode { value, next };
        self.len += 1;
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                slot
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, slot: usize) -> Option<ListNode<T>> {
        let node = self.nodes.get_mut(slot)?.take()?;
        self.free.push(slot);
        self.len -= 1;
        Some(node)
    }
}

/// Borrowing iterator over a [`LinkedList`], head to tail.
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let node = list.node(self.next?)?;
        self.next = node.next;
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    /// `1 -> 2 -> 3`, or `Empty`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty");
        }
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
