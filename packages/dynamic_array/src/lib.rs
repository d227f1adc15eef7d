#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A growable contiguous array whose capacity policy is explicit and observable.
//!
//! This crate provides [`DynamicArray`], a container that keeps its logical size separate from
//! the number of slots it has allocated. Appends and removals at the end are amortized O(1),
//! and shrinking reallocates only once the size has dropped well below the capacity.
//!
//! # Key Features
//!
//! - **Predictable capacity**: growth and shrink steps follow a fixed, documented policy
//! - **Bounds-checked access**: every accessor reports out-of-range indexes as [`Error`] values
//! - **Positional insert**: [`insert()`](DynamicArray::insert) shifts the tail one slot back
//! - **Live traversal**: a [`Cursor`] observes modifications made in the middle of a traversal
//! - **Raw buffer access**: the whole buffer, unused slots included, can be handed to slice
//!   utilities via [`raw_buffer_mut()`](DynamicArray::raw_buffer_mut)
//!
//! Unused slots always hold `T::default()`, which is why most operations require
//! `T: Default`.
//!
//! # Examples
//!
//! ```rust
//! use dynamic_array::DynamicArray;
//!
//! let mut array = DynamicArray::<i32>::with_size(2);
//! assert_eq!(array.to_string(), "Size: 2, capacity: 4");
//!
//! array.push_back(5).unwrap();
//! array.insert(0, -1).unwrap();
//! assert_eq!(array.as_slice(), &[-1, 0, 0, 5]);
//!
//! assert_eq!(array.pop_back().unwrap(), 5);
//! assert!(array.get(3).is_err());
//! ```
//!
//! Bulk slice utilities work on the raw buffer when given the logical size:
//!
//! ```rust
//! use dynamic_array::DynamicArray;
//!
//! let mut array: DynamicArray<u32> = [3, 1, 2].into_iter().collect();
//! let size = array.size();
//!
//! array.raw_buffer_mut()[..size].sort_unstable();
//!
//! assert_eq!(array.as_slice(), &[1, 2, 3]);
//! ```

mod builder;
mod cursor;
mod dynamic_array;
mod error;
mod iter;
mod policy;

pub use builder::*;
pub use cursor::*;
pub use dynamic_array::*;
pub use error::Error;
pub(crate) use error::Result;
pub use iter::*;
