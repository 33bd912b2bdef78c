//! The fixed-capacity list.

use std::ops::Index;
use std::slice;

use tracing::trace;

use crate::error::ListError;

/// A homogeneous sequence with a capacity fixed at creation.
///
/// Backed by a single allocation of `capacity * size_of::<T>()` bytes that
/// is never resized. Invariant: `0 <= len <= capacity`.
///
/// ```
/// use strata_list::{FixedList, ListError};
///
/// let mut list = FixedList::with_capacity(2).unwrap();
/// list.push(1u32).unwrap();
/// list.push(2).unwrap();
/// assert_eq!(list.push(3), Err(ListError::Full { capacity: 2 }));
/// assert_eq!(list.pop(), Some(2));
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct FixedList<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> FixedList<T> {
    /// Create an empty list that can hold exactly `capacity` elements.
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfMemory`] if the backing allocation fails.
    pub fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| ListError::OutOfMemory {
                capacity,
                element_size: Self::element_size(),
            })?;
        Ok(Self { items, capacity })
    }

    /// Size of one element in bytes.
    pub const fn element_size() -> usize {
        std::mem::size_of::<T>()
    }

    /// Append `item` at index `len`.
    ///
    /// # Errors
    ///
    /// [`ListError::Full`] if `len == capacity`. The list is unchanged and
    /// `item` is dropped.
    pub fn push(&mut self, item: T) -> Result<(), ListError> {
        if self.is_full() {
            trace!(capacity = self.capacity, "push rejected: list full");
            return Err(ListError::Full {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the last element, or `None` if the list is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Number of elements currently stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The fixed capacity chosen at creation.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether another `push` would fail.
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Free slots left.
    pub fn remaining(&self) -> usize {
        self.capacity - self.items.len()
    }

    /// Element at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Mutable element at `index`, if in bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// The most recently pushed element.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Remove every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The stored elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the stored elements in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

/// Clones into a fresh allocation of the full capacity.
impl<T: Clone> Clone for FixedList<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
        }
    }
}

impl<T> Index<usize> for FixedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a FixedList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
