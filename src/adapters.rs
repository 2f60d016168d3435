//! FIFO queue and LIFO stack adapters.
//!
//! Both hide traversal on purpose: the only way to observe their elements is
//! the adapter's own access order, so they render as special shapes
//! (`[front, ..., back]` and `[top, ..., bottom]`).

use alloc::collections::VecDeque;
use alloc::vec::Vec;

// =============================================================================
// Queue
// =============================================================================

/// First-in-first-out queue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { items: VecDeque::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: VecDeque::with_capacity(capacity) }
    }

    /// Push to the back.
    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Pop from the front.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

/// The first element of the vector is the front.
impl<T> From<Vec<T>> for Queue<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items: items.into() }
    }
}

impl<T> From<VecDeque<T>> for Queue<T> {
    fn from(items: VecDeque<T>) -> Self {
        Self { items }
    }
}

// =============================================================================
// Stack
// =============================================================================

/// Last-in-first-out stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// The most recently pushed element.
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Elements are pushed in iteration order; the last one ends on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

/// The last element of the vector is the top.
impl<T> From<Vec<T>> for Stack<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut queue: Queue<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(queue.front(), Some(&1));
        assert_eq!(queue.back(), Some(&3));
        assert_eq!(queue.pop(), Some(1));
        queue.push(4);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some(2));
    }

    #[test]
    fn test_stack_is_lifo() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.top(), Some(&3));
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_conversions() {
        let queue = Queue::from(alloc::vec![1, 2]);
        assert_eq!(queue.front(), Some(&1));
        let stack = Stack::from(alloc::vec![1, 2]);
        assert_eq!(stack.top(), Some(&2));
    }
}
