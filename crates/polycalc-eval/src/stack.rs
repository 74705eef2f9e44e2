//! A growable LIFO stack.
//!
//! This module provides the operand/operator container used by the
//! expression evaluator. Capacity starts at a small floor and doubles
//! whenever a push would overflow it, giving amortized O(1) pushes.

use thiserror::Error;

/// Errors that can occur on stack access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StackError {
    /// `pop` or `top` was called on an empty stack.
    #[error("stack underflow")]
    Underflow,
}

/// Initial capacity when none is requested.
const DEFAULT_CAPACITY: usize = 8;

/// A last-in-first-out stack over a contiguous owned buffer.
///
/// Cloning deep-copies the buffer; moving transfers it and leaves the
/// source empty. `clear` resets the length but keeps the allocation.
#[derive(Clone, Debug)]
pub struct Stack<T> {
    buf: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Creates an empty stack with at least the requested capacity.
    ///
    /// A requested capacity of zero falls back to the default floor.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Pushes a value onto the top of the stack.
    ///
    /// When the buffer is full, capacity doubles (from the default floor)
    /// until the new element fits.
    pub fn push(&mut self, value: T) {
        self.ensure_capacity(self.buf.len() + 1);
        self.buf.push(value);
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.buf.pop().ok_or(StackError::Underflow)
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if the stack is empty.
    pub fn top(&self) -> Result<&T, StackError> {
        self.buf.last().ok_or(StackError::Underflow)
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the stack holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the current capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Removes every element without releasing the buffer.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    fn ensure_capacity(&mut self, min_capacity: usize) {
        let current = self.buf.capacity();
        if current >= min_capacity {
            return;
        }
        let mut new_capacity = if current == 0 {
            DEFAULT_CAPACITY
        } else {
            current
        };
        while new_capacity < min_capacity {
            new_capacity *= 2;
        }
        self.buf.reserve_exact(new_capacity - self.buf.len());
    }
}
