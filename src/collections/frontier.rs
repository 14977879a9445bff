//! Ordered frontiers that drive graph traversals.
//!
//! A traversal only needs `push`, `pop` and `len` from its pending-work
//! container; the pop order alone decides the traversal shape:
//! - [`Stack`]: LIFO, yields depth-first order
//! - [`Queue`]: FIFO, yields breadth-first order

use std::collections::VecDeque;

/// A pending-work container with a fixed pop discipline.
pub trait Frontier<T> {
    /// Adds an item to the frontier.
    fn push(&mut self, item: T);

    /// Removes the next item according to the frontier's discipline.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of pending items.
    fn len(&self) -> usize;

    /// Returns `true` if no items are pending.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A LIFO frontier backed by `Vec`.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack able to hold `capacity` items without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the item that the next `pop` would return.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    #[inline]
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// A FIFO frontier backed by `VecDeque`.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty queue able to hold `capacity` items without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns the item that the next `pop` would return.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    #[inline]
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<F: Frontier<u32>>(mut frontier: F) -> Vec<u32> {
        let mut out = Vec::new();
        while let Some(x) = frontier.pop() {
            out.push(x);
        }
        out
    }

    #[test]
    fn test_stack_is_lifo() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.len(), 3);
        assert_eq!(s.peek(), Some(&3));
        assert_eq!(drain(s), vec![3, 2, 1]);
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut q = Queue::with_capacity(4);
        q.push(1);
        q.push(2);
        q.push(3);
        assert_eq!(q.peek(), Some(&1));
        assert_eq!(drain(q), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_frontiers() {
        let mut s: Stack<u32> = Stack::default();
        let mut q: Queue<u32> = Queue::default();
        assert!(s.is_empty());
        assert!(q.is_empty());
        assert_eq!(s.pop(), None);
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn test_from_iter() {
        let s: Stack<u32> = (1..=3).collect();
        let q: Queue<u32> = (1..=3).collect();
        assert_eq!(drain(s), vec![3, 2, 1]);
        assert_eq!(drain(q), vec![1, 2, 3]);
    }
}
