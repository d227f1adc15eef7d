use std::iter::FusedIterator;
use std::{slice, vec};

/// Iterator over shared references to the elements of a [`DynamicArray`][crate::DynamicArray].
///
/// Returned by [`DynamicArray::iter()`][crate::DynamicArray::iter].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(elements: &'a [T]) -> Self {
        Self {
            inner: elements.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over exclusive references to the elements of a
/// [`DynamicArray`][crate::DynamicArray].
///
/// Returned by [`DynamicArray::iter_mut()`][crate::DynamicArray::iter_mut].
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(elements: &'a mut [T]) -> Self {
        Self {
            inner: elements.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over the elements of a [`DynamicArray`][crate::DynamicArray].
///
/// Yields only the logical elements. The unused capacity is dropped with the iterator.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(elements: Vec<T>) -> Self {
        Self {
            inner: elements.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::DynamicArray;

    #[test]
    fn iter_covers_logical_elements_only() {
        let mut array = DynamicArray::<u32>::try_with_size_and_capacity(3, 10).unwrap();
        array.set(2, 5).unwrap();

        let iter = array.iter();
        assert_eq!(iter.len(), 3);

        assert_eq!(iter.copied().collect::<Vec<_>>(), vec![0, 0, 5]);
    }

    #[test]
    fn iter_is_restartable() {
        let array: DynamicArray<u32> = (0..4).collect();

        let first: Vec<_> = array.iter().copied().collect();
        let second: Vec<_> = array.iter().copied().collect();

        assert_eq!(first, second);
    }

    #[test]
    fn iter_from_both_ends() {
        let array: DynamicArray<u32> = (1..=4).collect();
        let mut iter = array.iter();

        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_on_empty_yields_nothing() {
        let array = DynamicArray::<u32>::new();

        assert_eq!(array.iter().next(), None);
    }

    #[test]
    fn into_iter_reversed() {
        let array: DynamicArray<String> = ["a", "b", "c"].into_iter().map(String::from).collect();

        let reversed: Vec<String> = array.into_iter().rev().collect();

        assert_eq!(reversed, vec!["c", "b", "a"]);
    }

    #[test]
    fn iter_mut_modifies_in_place() {
        let mut array = DynamicArray::<u32>::with_size(3);

        for (index, value) in array.iter_mut().enumerate() {
            *value = u32::try_from(index).unwrap();
        }

        assert_eq!(array.as_slice(), &[0, 1, 2]);
    }
}
