use crate::{DynamicArray, Error, Result};

/// A restartable forward traversal position over a [`DynamicArray`].
///
/// The cursor does not borrow the array between steps. Each step is handed the array to look
/// at, so the traversal always observes the live state of the array rather than a snapshot.
/// If the array shrinks underneath the cursor, [`current()`][Self::current] reports
/// [`Error::IndexOutOfRange`] and the next [`move_next()`][Self::move_next] ends the traversal.
///
/// A cursor starts before the first element and must be advanced before it can be read.
///
/// # Example
///
/// ```
/// use dynamic_array::{Cursor, DynamicArray};
///
/// let mut array: DynamicArray<u32> = (1..=3).collect();
/// let mut cursor = Cursor::new();
///
/// while cursor.move_next(&array) {
///     let value = *cursor.current(&array).unwrap();
///
///     // The array may be modified in the middle of the traversal.
///     if value == 1 {
///         array.push_back(4).unwrap();
///     }
/// }
///
/// assert_eq!(cursor.position(), None);
/// assert_eq!(array.size(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Cursor {
    state: State,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum State {
    #[default]
    BeforeStart,

    At(usize),

    Exhausted,
}

impl Cursor {
    /// Creates a cursor positioned before the first element.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances to the next element of `array`, returning whether there was one.
    ///
    /// Once this returns `false` the cursor is exhausted and stays exhausted until
    /// [`reset()`][Self::reset], even if the array grows afterwards.
    #[cfg_attr(test, mutants::skip)] // Mutating the bound check makes `while move_next()` loops spin forever.
    pub fn move_next<T>(&mut self, array: &DynamicArray<T>) -> bool {
        let next = match self.state {
            State::BeforeStart => 0,
            State::At(index) => index
                .checked_add(1)
                .expect("a positioned cursor is below the array size, which is at most usize::MAX"),
            State::Exhausted => return false,
        };

        if next < array.size() {
            self.state = State::At(next);
            true
        } else {
            self.state = State::Exhausted;
            false
        }
    }

    /// The element of `array` the cursor is positioned on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCursorState`] if the cursor has not been advanced yet or has been
    /// exhausted, or [`Error::IndexOutOfRange`] if the array has shrunk below the cursor
    /// position since the last advance.
    pub fn current<'a, T>(&self, array: &'a DynamicArray<T>) -> Result<&'a T> {
        match self.state {
            State::At(index) => array.get(index),
            State::BeforeStart | State::Exhausted => Err(Error::InvalidCursorState),
        }
    }

    /// Moves the cursor back to before the first element.
    pub fn reset(&mut self) {
        self.state = State::BeforeStart;
    }

    /// The index the cursor is positioned on, if any.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self.state {
            State::At(index) => Some(index),
            State::BeforeStart | State::Exhausted => None,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn walks_all_elements() {
        let array: DynamicArray<u32> = (10..15).collect();
        let mut cursor = Cursor::new();
        let mut seen = Vec::new();

        while cursor.move_next(&array) {
            seen.push(*cursor.current(&array).unwrap());
        }

        assert_eq!(seen, vec![10, 11, 12, 13, 14]);
    }

    #[test]
    fn current_before_first_advance_is_invalid() {
        let array: DynamicArray<u32> = (0..3).collect();
        let cursor = Cursor::new();

        assert_eq!(cursor.current(&array), Err(Error::InvalidCursorState));
        assert_eq!(cursor.position(), None);
    }

    #[test]
    fn current_after_exhaustion_is_invalid() {
        let array: DynamicArray<u32> = (0..2).collect();
        let mut cursor = Cursor::new();

        assert!(cursor.move_next(&array));
        assert!(cursor.move_next(&array));
        assert!(!cursor.move_next(&array));

        assert_eq!(cursor.current(&array), Err(Error::InvalidCursorState));
        assert!(!cursor.move_next(&array));
    }

    #[test]
    fn empty_array_exhausts_immediately() {
        let array = DynamicArray::<u32>::try_with_size_and_capacity(0, 8).unwrap();
        let mut cursor = Cursor::new();

        assert!(!cursor.move_next(&array));
    }

    #[test]
    fn observes_live_growth() {
        let mut array: DynamicArray<u32> = (0..2).collect();
        let mut cursor = Cursor::new();

        assert!(cursor.move_next(&array));
        assert!(cursor.move_next(&array));

        array.push_back(2).unwrap();

        assert!(cursor.move_next(&array));
        assert_eq!(cursor.current(&array), Ok(&2));
    }

    #[test]
    fn observes_live_shrink() {
        let mut array: DynamicArray<u32> = (0..5).collect();
        let mut cursor = Cursor::new();

        for _ in 0..4 {
            assert!(cursor.move_next(&array));
        }
        assert_eq!(cursor.position(), Some(3));

        array.resize(2).unwrap();

        assert_eq!(
            cursor.current(&array),
            Err(Error::IndexOutOfRange { index: 3, size: 2 })
        );
        assert!(!cursor.move_next(&array));
    }

    #[test]
    fn stays_exhausted_when_array_grows() {
        let mut array: DynamicArray<u32> = (0..2).collect();
        let mut cursor = Cursor::new();

        while cursor.move_next(&array) {}

        array.push_back(2).unwrap();
        array.push_back(3).unwrap();

        assert!(!cursor.move_next(&array));
        assert_eq!(cursor.current(&array), Err(Error::InvalidCursorState));
        assert_eq!(cursor.position(), None);

        // Only a reset makes the new elements reachable.
        cursor.reset();
        let mut seen = Vec::new();
        while cursor.move_next(&array) {
            seen.push(*cursor.current(&array).unwrap());
        }

        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn reset_restarts_traversal() {
        let array: DynamicArray<u32> = (0..2).collect();
        let mut cursor = Cursor::new();

        while cursor.move_next(&array) {}

        cursor.reset();

        assert!(cursor.move_next(&array));
        assert_eq!(cursor.current(&array), Ok(&0));
    }
}
