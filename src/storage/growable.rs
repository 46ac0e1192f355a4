//! Growable array with lazy capacity doubling
//!
//! Slots are allocated up front to `capacity` and only the occupied prefix is
//! ever exposed. Growth happens exactly when a push finds no free slot.

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Growable array tracking capacity and occupancy separately
///
/// # Growth Policy
///
/// - empty storage (capacity 0) grows to capacity 1
/// - full storage (occupancy == capacity) doubles its capacity
///
/// Growth copies the occupied prefix into a fresh allocation. Pushes are
/// O(1) amortized. Capacity never shrinks.
///
/// # Example
///
/// ```
/// use tempseries::storage::GrowableBuffer;
///
/// let mut buffer = GrowableBuffer::from_slice(&[1.0, 2.0]);
/// assert_eq!(buffer.capacity(), 2);
///
/// buffer.push(3.0);
/// assert_eq!(buffer.capacity(), 4);
/// assert_eq!(buffer.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct GrowableBuffer<T: Copy + Default> {
    /// Allocated slots; `slots.len()` is the capacity
    slots: Vec<T>,
    /// Number of occupied slots
    occupancy: usize,
}

impl<T: Copy + Default> Default for GrowableBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default> GrowableBuffer<T> {
    /// Create an empty buffer with capacity 0
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            occupancy: 0,
        }
    }

    /// Create a full buffer holding a copy of `values`
    ///
    /// Capacity equals `values.len()`.
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            slots: values.to_vec(),
            occupancy: values.len(),
        }
    }

    /// Append a value, growing first if no slot is free
    ///
    /// Returns the occupancy after the push.
    pub fn push(&mut self, value: T) -> usize {
        if self.occupancy == self.slots.len() {
            self.grow();
        }

        self.slots[self.occupancy] = value;
        self.occupancy += 1;
        self.occupancy
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.occupancy
    }

    /// Check if no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.occupancy == 0
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The occupied prefix, in push order
    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.occupancy]
    }

    /// Iterate over the occupied prefix
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    fn grow(&mut self) {
        let capacity = self.slots.len();
        let next_capacity = if capacity == 0 {
            1
        } else {
            assert!(capacity <= usize::MAX / 2, "capacity overflow");
            capacity * 2
        };

        let mut next = Vec::with_capacity(next_capacity);
        next.extend_from_slice(self.as_slice());
        next.resize(next_capacity, T::default());
        self.slots = next;

        tracing::trace!(from = capacity, to = next_capacity, "grew series storage");
    }
}

impl<'a, T: Copy + Default> IntoIterator for &'a GrowableBuffer<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
