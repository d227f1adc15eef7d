use std::marker::PhantomData;

use crate::{DynamicArray, Result};

/// Builder for creating an instance of [`DynamicArray`].
///
/// You only need to use this builder if you want a non-empty initial size or a specific initial
/// capacity. [`DynamicArray::new()`][1] is sufficient otherwise.
///
/// # Examples
///
/// ```
/// use dynamic_array::DynamicArray;
///
/// // Capacity derived from size: twice the size.
/// let array = DynamicArray::<u32>::builder().size(5).build().unwrap();
/// assert_eq!(array.capacity(), 10);
///
/// // Explicit capacity: allocated exactly.
/// let array = DynamicArray::<u32>::builder().size(5).capacity(6).build().unwrap();
/// assert_eq!(array.capacity(), 6);
///
/// // Size may not exceed an explicit capacity.
/// assert!(DynamicArray::<u32>::builder().size(7).capacity(6).build().is_err());
/// ```
///
/// [1]: DynamicArray::new
#[must_use]
pub struct DynamicArrayBuilder<T> {
    size: usize,
    capacity: usize,

    _item: PhantomData<T>,
}

impl<T> std::fmt::Debug for DynamicArrayBuilder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicArrayBuilder")
            .field(
                "item_type",
                &std::format_args!("{}", std::any::type_name::<T>()),
            )
            .field("size", &self.size)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> DynamicArrayBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            size: 0,
            capacity: 0,
            _item: PhantomData,
        }
    }

    /// Sets the initial logical size. The array starts with this many default-valued elements.
    ///
    /// Defaults to zero.
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the initial capacity.
    ///
    /// Zero, the default, means the capacity is derived from the size as
    /// [`DynamicArray::GROWTH_FACTOR`] times the size.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl<T: Default> DynamicArrayBuilder<T> {
    /// Builds the array with the specified configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`][crate::Error::InvalidArgument] if a non-zero capacity
    /// is smaller than the size, or if the capacity derived from the size overflows `usize`.
    pub fn build(self) -> Result<DynamicArray<T>> {
        DynamicArray::try_with_size_and_capacity(self.size, self.capacity)
    }
}
