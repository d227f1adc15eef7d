use std::any::type_name;
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use tracing::trace;

use crate::policy::{self, CapacityPlan};
use crate::{DynamicArrayBuilder, Error, IntoIter, Iter, IterMut, Result};

/// A growable array that keeps its logical size separate from its allocated capacity.
///
/// Storage is a single contiguous buffer of `capacity()` slots, of which the first `size()`
/// hold the elements of the array. The remaining slots hold `T::default()` and are never
/// visible through the bounds-checked API.
///
/// # Capacity policy
///
/// Whenever the logical size changes, the buffer is adjusted as follows (first match wins):
///
/// 1. A new size of zero releases the buffer entirely.
/// 2. A new size that reaches or exceeds the capacity reallocates to
///    [`GROWTH_FACTOR`][Self::GROWTH_FACTOR] times the new size.
/// 3. A new size below `capacity / SHRINK_THRESHOLD_FACTOR` reallocates to
///    [`GROWTH_FACTOR`][Self::GROWTH_FACTOR] times the new size, dropping elements past it.
/// 4. A new size below the old size resets the now unused slots to `T::default()` in place.
/// 5. Otherwise the buffer is left alone.
///
/// This makes a sequence of [`push_back()`][1] calls amortized O(1) per call while avoiding
/// reallocation churn when the size oscillates around a value.
///
/// # Example
///
/// ```
/// use dynamic_array::DynamicArray;
///
/// let mut array = DynamicArray::<u32>::new();
///
/// array.push_back(1).unwrap();
/// array.push_back(3).unwrap();
/// array.insert(1, 2).unwrap();
///
/// assert_eq!(array.as_slice(), &[1, 2, 3]);
/// assert_eq!(array.to_string(), "Size: 3, capacity: 4");
/// ```
///
/// [1]: Self::push_back
#[derive(Clone)]
pub struct DynamicArray<T> {
    /// Every slot is initialized. Slots at `[size, buffer.len())` hold `T::default()`.
    buffer: Box<[T]>,

    size: usize,
}

impl<T> DynamicArray<T> {
    /// Multiplier applied to a target size when the array allocates storage for it.
    pub const GROWTH_FACTOR: usize = policy::GROWTH_FACTOR;

    /// The array reallocates to a smaller buffer only when its new size drops below
    /// `capacity / SHRINK_THRESHOLD_FACTOR`.
    pub const SHRINK_THRESHOLD_FACTOR: usize = policy::SHRINK_THRESHOLD_FACTOR;

    /// Creates an empty array without allocating.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: Box::default(),
            size: 0,
        }
    }

    /// Starts building an array with a custom initial size or capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let array = DynamicArray::<u8>::builder().size(2).capacity(16).build().unwrap();
    ///
    /// assert_eq!(array.size(), 2);
    /// assert_eq!(array.capacity(), 16);
    /// ```
    pub fn builder() -> DynamicArrayBuilder<T> {
        DynamicArrayBuilder::new()
    }

    /// The number of elements in the array.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The number of slots allocated for the array. Never less than [`size()`][Self::size].
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= size()`, even if the slot is allocated.
    pub fn get(&self, index: usize) -> Result<&T> {
        let size = self.size;

        self.as_slice()
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, size })
    }

    /// Returns an exclusive reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= size()`, even if the slot is allocated.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.size;

        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, size })
    }

    /// Overwrites the element at `index` with `value`. The capacity does not change.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= size()`. The array is left unchanged and
    /// `value` is dropped.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// The elements of the array.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.buffer
            .get(..self.size)
            .expect("size never exceeds capacity")
    }

    /// The elements of the array, for in-place modification.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer
            .get_mut(..self.size)
            .expect("size never exceeds capacity")
    }

    /// The entire underlying buffer, including the unused slots past [`size()`][Self::size].
    ///
    /// The returned slice is `capacity()` long. This exists for handing the storage to bulk
    /// slice utilities, which must then be told the logical extent (`size()`) separately.
    /// Nothing here is bounds-checked against the logical size.
    #[must_use]
    pub fn raw_buffer(&self) -> &[T] {
        &self.buffer
    }

    /// The entire underlying buffer for modification, including the unused slots past
    /// [`size()`][Self::size].
    ///
    /// Writes through this slice bypass the logical bounds of the array. A value written past
    /// `size()` stays in place until the capacity policy next resets or reallocates that slot,
    /// and becomes visible if the array later grows over it without reallocating.
    ///
    /// # Example
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::<u32>::with_size(4);
    /// let size = array.size();
    ///
    /// array.raw_buffer_mut()[..size].fill(7);
    /// array.raw_buffer_mut()[..size].reverse();
    ///
    /// assert_eq!(array.as_slice(), &[7, 7, 7, 7]);
    /// ```
    #[must_use]
    pub fn raw_buffer_mut(&mut self) -> &mut [T] {
        &mut self.buffer
    }

    /// Iterates over the elements of the array, front to back.
    ///
    /// The iterator borrows the array, so the array cannot change during the traversal. Use a
    /// [`Cursor`][crate::Cursor] to traverse an array that is modified along the way.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Iterates over the elements of the array, front to back, allowing modification.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }
}

impl<T: Default> DynamicArray<T> {
    /// Creates an array with `size` default-valued elements and room for
    /// [`GROWTH_FACTOR`][Self::GROWTH_FACTOR] times as many.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize`.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        match Self::try_with_size_and_capacity(size, 0) {
            Ok(array) => array,
            Err(e) => panic!("cannot create array of size {size}: {e}"),
        }
    }

    /// Creates an array with `size` default-valued elements and the given `capacity`.
    ///
    /// A `capacity` of zero means "derive from size": the array then allocates
    /// [`GROWTH_FACTOR`][Self::GROWTH_FACTOR] times `size` slots, or nothing if `size` is also
    /// zero. Otherwise exactly `capacity` slots are allocated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity` is non-zero and smaller than `size`, if
    /// the derived capacity overflows `usize` or if the buffer cannot be allocated.
    pub fn try_with_size_and_capacity(size: usize, capacity: usize) -> Result<Self> {
        if size > 0 && capacity > 0 && size > capacity {
            return Err(Error::InvalidArgument {
                problem: format!("size {size} must not exceed capacity {capacity}"),
            });
        }

        let capacity = if capacity > 0 {
            capacity
        } else {
            policy::scaled_capacity(size)?
        };

        Ok(Self {
            buffer: default_slots(capacity)?,
            size,
        })
    }

    /// Changes the logical size of the array to `new_size`, adjusting the capacity according
    /// to the capacity policy described on the [type][Self].
    ///
    /// New elements are `T::default()`. Elements past `new_size` are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the capacity required for `new_size` overflows
    /// `usize` or cannot be allocated. The array is left unchanged.
    pub fn resize(&mut self, new_size: usize) -> Result<()> {
        if new_size == self.size {
            return Ok(());
        }

        self.ensure_capacity(new_size)?;
        self.size = new_size;

        debug_assert!(self.size <= self.capacity());
        Ok(())
    }

    /// Appends `value` as the new last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the capacity required for one more element
    /// overflows `usize`. The array is left unchanged and `value` is dropped.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        let index = self.size;
        let new_size = index.checked_add(1).ok_or_else(|| size_overflow(index))?;

        self.resize(new_size)?;
        *self.slot_mut(index) = value;

        Ok(())
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the array is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        let Some(last_index) = self.size.checked_sub(1) else {
            return Err(Error::EmptyContainer);
        };

        let value = mem::take(self.slot_mut(last_index));

        self.resize(last_index)
            .expect("reducing the size never requires more capacity than already allocated");

        Ok(value)
    }

    /// Inserts `value` at `index`, shifting the elements from `index` onwards one slot towards
    /// the back. Inserting at `index == size()` is the same as [`push_back()`][Self::push_back].
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index > size()`, or [`Error::InvalidArgument`] if
    /// the capacity required for one more element overflows `usize`. The array is left
    /// unchanged and `value` is dropped.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let old_size = self.size;

        if index > old_size {
            return Err(Error::IndexOutOfRange {
                index,
                size: old_size,
            });
        }

        let new_size = old_size.checked_add(1).ok_or_else(|| size_overflow(old_size))?;
        self.resize(new_size)?;

        // The slot at `old_size` is a fresh default. Rotating it to the front moves every
        // element in between one slot back.
        let shifted = self
            .buffer
            .get_mut(index..new_size)
            .expect("the range lies within the new size");
        shifted.rotate_right(1);

        let first = shifted
            .first_mut()
            .expect("the range always covers at least the new slot");
        *first = value;

        Ok(())
    }

    fn ensure_capacity(&mut self, minimum: usize) -> Result<()> {
        let old_capacity = self.capacity();

        match policy::plan(minimum, self.size, old_capacity)? {
            CapacityPlan::Release => {
                trace!(
                    element_type = type_name::<T>(),
                    old_capacity,
                    "releasing buffer"
                );

                self.buffer = Box::default();
            }
            CapacityPlan::Grow { new_capacity } => {
                trace!(
                    element_type = type_name::<T>(),
                    old_capacity,
                    new_capacity,
                    "growing buffer"
                );

                self.reallocate(new_capacity, old_capacity)?;
            }
            CapacityPlan::Shrink {
                new_capacity,
                retained,
            } => {
                trace!(
                    element_type = type_name::<T>(),
                    old_capacity,
                    new_capacity,
                    "shrinking buffer"
                );

                self.reallocate(new_capacity, retained)?;
            }
            CapacityPlan::ClearTail { from } => {
                if let Some(tail) = self.buffer.get_mut(from..) {
                    tail.fill_with(T::default);
                }
            }
            CapacityPlan::Keep => {}
        }

        Ok(())
    }

    /// Replaces the buffer with one of `new_capacity` slots, moving over the first `retained`
    /// slots of the old buffer and filling the rest with defaults.
    ///
    /// The old buffer is only touched once the new one has been allocated, so a failure leaves
    /// the array as it was.
    fn reallocate(&mut self, new_capacity: usize, retained: usize) -> Result<()> {
        debug_assert!(retained <= new_capacity);

        let mut new_buffer = allocate_slots(new_capacity)?;
        let old_buffer = mem::take(&mut self.buffer).into_vec();

        new_buffer.extend(old_buffer.into_iter().take(retained));
        new_buffer.resize_with(new_capacity, T::default);

        self.buffer = new_buffer.into_boxed_slice();
        Ok(())
    }

    fn slot_mut(&mut self, index: usize) -> &mut T {
        self.buffer
            .get_mut(index)
            .expect("slot index is guarded by the caller to be within capacity")
    }
}

fn default_slots<T: Default>(count: usize) -> Result<Box<[T]>> {
    let mut slots = allocate_slots(count)?;
    slots.resize_with(count, T::default);

    Ok(slots.into_boxed_slice())
}

/// An empty `Vec` with room for exactly `count` elements. Fails instead of panicking when the
/// byte size of the buffer is not representable or the allocator refuses the request.
fn allocate_slots<T>(count: usize) -> Result<Vec<T>> {
    let mut slots = Vec::new();

    slots
        .try_reserve_exact(count)
        .map_err(|e| Error::InvalidArgument {
            problem: format!(
                "cannot allocate {count} slots of {}: {e}",
                type_name::<T>()
            ),
        })?;

    Ok(slots)
}

fn size_overflow(size: usize) -> Error {
    Error::InvalidArgument {
        problem: format!("cannot grow an array of size {size} by one element"),
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size: {}, capacity: {}", self.size, self.capacity())
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish_non_exhaustive()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= size()`.
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    /// # Panics
    ///
    /// Panics if `index >= size()`.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Default> Extend<T> for DynamicArray<T> {
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize`.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(e) = self.push_back(value) {
                panic!("cannot extend array: {e}");
            }
        }
    }
}

impl<T: Default> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut elements = self.buffer.into_vec();
        elements.truncate(self.size);

        IntoIter::new(elements)
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
