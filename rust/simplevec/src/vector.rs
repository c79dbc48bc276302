use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut, Range};

use simplevec_array_ptr::ArrayPtr;
use simplevec_common::{Result, verify_index};

use crate::reservation::Reservation;

/// A growable array that exclusively owns a single [`ArrayPtr<T>`].
///
/// The elements at offsets `[0, len())` are the logical content. The remaining
/// slots up to `capacity()` hold constructed filler values that are never exposed
/// through the public API; they are overwritten when the vector grows into them.
///
/// The capacity is the length of the backing block, so `len() <= capacity()` holds
/// by construction.
pub struct SimpleVector<T> {
    items: ArrayPtr<T>,
    size: usize,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector that owns no storage.
    pub fn new() -> SimpleVector<T> {
        SimpleVector {
            items: ArrayPtr::empty(),
            size: 0,
        }
    }

    /// Returns the number of logically present elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.size]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let size = self.size;
        &mut self.items.as_mut_slice()[..size]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a reference to the element at `index`, or an out-of-range error
    /// if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index!("at", index, self.size);
        Ok(&self.items[index])
    }

    /// Returns a mutable reference to the element at `index`, or an out-of-range
    /// error if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index!("at_mut", index, self.size);
        Ok(&mut self.items[index])
    }

    /// Shrinks the logical size to `new_size`. Has no effect if `new_size >= len()`.
    ///
    /// The storage is kept; truncated elements stay in their slots until they are
    /// overwritten or the vector is dropped.
    pub fn truncate(&mut self, new_size: usize) {
        if new_size < self.size {
            self.size = new_size;
        }
    }

    /// Sets the logical size to zero. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Exchanges the contents of two vectors in O(1).
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.items.swap(&mut other.items);
        std::mem::swap(&mut self.size, &mut other.size);
    }

    /// Moves the contents out into a new vector, leaving `self` empty with zero
    /// capacity.
    pub fn take(&mut self) -> SimpleVector<T> {
        std::mem::take(self)
    }

    /// Consumes the vector and returns its logical content as a `Vec<T>`.
    pub fn into_vec(self) -> Vec<T> {
        let mut items = self.items.into_vec();
        items.truncate(self.size);
        items
    }
}

impl<T: Default> SimpleVector<T> {
    /// Creates a vector of `size` default values; the capacity equals `size`.
    pub fn with_size(size: usize) -> SimpleVector<T> {
        SimpleVector {
            items: ArrayPtr::new(size),
            size,
        }
    }

    /// Creates an empty vector whose capacity is the reserved amount.
    pub fn with_reservation(reservation: Reservation) -> SimpleVector<T> {
        let mut v = SimpleVector::new();
        v.reserve(reservation.capacity());
        v
    }

    /// Creates a vector of `size` copies of `value`; the capacity equals `size`.
    pub fn from_elem(size: usize, value: &T) -> SimpleVector<T>
    where
        T: Clone,
    {
        let mut items = ArrayPtr::new(size);
        items.as_mut_slice().fill(value.clone());
        SimpleVector { items, size }
    }

    /// Ensures the capacity is at least `new_capacity`, allocating exactly
    /// `new_capacity` slots if it is not. The size is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.relocate(ArrayPtr::new(new_capacity));
        }
    }

    /// Same as [`reserve`](Self::reserve), but reports an allocation failure as an
    /// error. On failure the vector is left untouched.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity > self.capacity() {
            let items = ArrayPtr::try_new(new_capacity)?;
            self.relocate(items);
        }
        Ok(())
    }

    /// Changes the logical size to `new_size`.
    ///
    /// - Shrinking only lowers the size.
    /// - Growing within the capacity resets the newly exposed slots to `T::default()`.
    /// - Growing past the capacity reallocates to `max(new_size, 2 * capacity())`
    ///   slots; every slot past the moved elements is a default value.
    pub fn resize(&mut self, new_size: usize) {
        if new_size <= self.size {
            self.size = new_size;
        } else if new_size <= self.capacity() {
            self.fill_default(self.size..new_size);
            self.size = new_size;
        } else {
            self.grow_for(new_size);
            self.size = new_size;
        }
    }

    /// Appends `value`, growing the storage if the vector is full.
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity() {
            self.grow_for(self.size + 1);
        }
        self.items[self.size] = value;
        self.size += 1;
    }

    /// Appends a copy of `value`.
    pub fn push_back_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push_back(value.clone());
    }

    /// Removes the last element and returns it, or `None` if the vector is empty.
    /// The capacity is unchanged.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.size -= 1;
        Some(std::mem::take(&mut self.items[self.size]))
    }

    /// Removes the element at `index`, shifting every later element one slot to the
    /// left. The removed element is dropped before returning; the capacity is
    /// unchanged.
    ///
    /// Returns the position now holding the element that followed the removed one
    /// (equal to `len()` when the last element was removed).
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> Result<usize> {
        verify_index!("erase", index, self.size);
        let size = self.size;
        let slots = self.items.as_mut_slice();
        slots[index..size].rotate_left(1);
        slots[size - 1] = T::default();
        self.size -= 1;
        Ok(index)
    }

    /// Inserts `value` at `index`, shifting the elements at `[index, len())` one slot
    /// to the right. `index == len()` appends.
    ///
    /// Returns the position of the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        assert!(
            index <= self.size,
            "insert: index {index} is out of range for size {}",
            self.size
        );
        let size = self.size;
        if self.capacity() == 0 {
            debug_assert_eq!(index, 0);
            let mut items = ArrayPtr::new(1);
            items[0] = value;
            self.items.swap(&mut items);
        } else if size < self.capacity() {
            let slots = self.items.as_mut_slice();
            slots[size] = value;
            slots[index..=size].rotate_right(1);
        } else {
            let mut items = ArrayPtr::new(self.grown_capacity(size + 1));
            log::trace!(
                "SimpleVector: insert at {index} relocates {size} elements, capacity {} -> {}",
                self.capacity(),
                items.len()
            );
            let (old, new) = (self.items.as_mut_slice(), items.as_mut_slice());
            new[..index].swap_with_slice(&mut old[..index]);
            new[index + 1..=size].swap_with_slice(&mut old[index..size]);
            new[index] = value;
            self.items.swap(&mut items);
        }
        self.size += 1;
        index
    }

    /// Inserts a copy of `value` at `index`. See [`insert`](Self::insert).
    pub fn insert_cloned(&mut self, index: usize, value: &T) -> usize
    where
        T: Clone,
    {
        self.insert(index, value.clone())
    }

    /// Resets the slots in `range` to `T::default()`.
    fn fill_default(&mut self, range: Range<usize>) {
        self.items.as_mut_slice()[range]
            .iter_mut()
            .for_each(|item| *item = T::default());
    }

    /// Grows the storage so that at least `required` elements fit.
    #[cold]
    fn grow_for(&mut self, required: usize) {
        let new_capacity = self.grown_capacity(required);
        self.relocate(ArrayPtr::new(new_capacity));
    }
}

impl<T> SimpleVector<T> {
    #[inline]
    fn grown_capacity(&self, required: usize) -> usize {
        required.max(self.capacity().saturating_mul(2))
    }

    /// Moves the live elements into the prefix of `items` and makes it the backing
    /// storage. The previous block is dropped on return.
    fn relocate(&mut self, mut items: ArrayPtr<T>) {
        let size = self.size;
        debug_assert!(items.len() >= size);
        log::trace!(
            "SimpleVector: relocating {size} elements, capacity {} -> {}",
            self.capacity(),
            items.len()
        );
        items.as_mut_slice()[..size].swap_with_slice(&mut self.items.as_mut_slice()[..size]);
        self.items.swap(&mut items);
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        SimpleVector::new()
    }
}

impl<T: Clone + Default> Clone for SimpleVector<T> {
    /// Copies the logical content into storage sized to fit it exactly: the clone's
    /// capacity equals the source's length.
    fn clone(&self) -> Self {
        let mut items = ArrayPtr::new(self.size);
        items.as_mut_slice().clone_from_slice(self.as_slice());
        SimpleVector {
            items,
            size: self.size,
        }
    }

    /// Copy-and-swap: `self` is only modified once the full copy of `source` exists,
    /// so a panicking `T::clone` leaves it as it was.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    /// Unchecked access: `index < len()` is only asserted in debug builds.
    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.size,
            "index {index} is out of range for size {}",
            self.size
        );
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.size,
            "index {index} is out of range for size {}",
            self.size
        );
        &mut self.items[index]
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SimpleVector").field(&self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq> PartialEq<[T]> for SimpleVector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for SimpleVector<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SimpleVector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for SimpleVector<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Lexicographic ordering. `<=`, `>` and `>=` are expressed through `<` alone, by
/// swapping the operands and negating.
impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.iter().lt(other.iter())
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        !other.lt(self)
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        other.lt(self)
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(values: [T; N]) -> Self {
        SimpleVector::from(Vec::from(values))
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    /// Takes over the elements; the capacity equals the number of elements.
    fn from(values: Vec<T>) -> Self {
        let size = values.len();
        SimpleVector {
            items: ArrayPtr::from(values),
            size,
        }
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(values: &[T]) -> Self {
        SimpleVector::from(values.to_vec())
    }
}

impl<T: Default> From<Reservation> for SimpleVector<T> {
    fn from(reservation: Reservation) -> Self {
        SimpleVector::with_reservation(reservation)
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let required = self.size.saturating_add(lower);
        if required > self.capacity() {
            self.grow_for(required);
        }
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Default> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = SimpleVector::new();
        v.extend(iter);
        v
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
