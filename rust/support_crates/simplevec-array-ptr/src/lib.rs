//! A fixed-length, exclusively owned, heap-allocated block of elements.
//!
//! [`ArrayPtr<T>`] is the backing storage of `SimpleVector<T>`. It never grows or
//! shrinks: a container that needs more room allocates a new `ArrayPtr`, moves its
//! elements across and swaps the new block in. The type is move-only; there is no
//! `Clone` implementation, so a block can never be aliased by two owners.

use std::fmt;
use std::ops::{Index, IndexMut};

use simplevec_common::{Result, error::Error};

/// Owned storage for exactly `len()` constructed elements.
///
/// An empty `ArrayPtr` holds no allocation.
pub struct ArrayPtr<T> {
    items: Box<[T]>,
}

impl<T> ArrayPtr<T> {
    /// Returns an empty block that owns no allocation.
    pub fn empty() -> ArrayPtr<T> {
        ArrayPtr {
            items: Box::default(),
        }
    }

    /// Allocates a block of `len` default-constructed elements.
    ///
    /// Allocation failure is fatal, in the same way as for `Vec`.
    pub fn new(len: usize) -> ArrayPtr<T>
    where
        T: Default,
    {
        if len == 0 {
            return Self::empty();
        }
        ArrayPtr {
            items: std::iter::repeat_with(T::default).take(len).collect(),
        }
    }

    /// Allocates a block of `len` default-constructed elements, reporting an
    /// allocation failure as an error instead of aborting.
    pub fn try_new(len: usize) -> Result<ArrayPtr<T>>
    where
        T: Default,
    {
        if len == 0 {
            return Ok(Self::empty());
        }
        let mut items = Vec::new();
        if let Err(e) = items.try_reserve_exact(len) {
            log::debug!("ArrayPtr: failed to allocate {len} elements: {e}");
            return Err(Error::allocation_failed(len, e));
        }
        items.resize_with(len, T::default);
        Ok(ArrayPtr {
            items: items.into_boxed_slice(),
        })
    }

    /// Returns the number of elements in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the block holds no elements (and no allocation).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Exchanges the storage of two blocks. No element is touched.
    #[inline]
    pub fn swap(&mut self, other: &mut ArrayPtr<T>) {
        std::mem::swap(&mut self.items, &mut other.items);
    }

    /// Gives up ownership of the storage, leaving `self` empty.
    pub fn take(&mut self) -> ArrayPtr<T> {
        std::mem::take(self)
    }

    /// Consumes the block and returns the underlying boxed slice.
    pub fn release(self) -> Box<[T]> {
        self.items
    }

    /// Consumes the block and returns its elements as a `Vec<T>`.
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_vec()
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        ArrayPtr::empty()
    }
}

impl<T> Index<usize> for ArrayPtr<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for ArrayPtr<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> From<Box<[T]>> for ArrayPtr<T> {
    fn from(items: Box<[T]>) -> Self {
        ArrayPtr { items }
    }
}

impl<T> From<Vec<T>> for ArrayPtr<T> {
    fn from(vec: Vec<T>) -> Self {
        ArrayPtr {
            items: vec.into_boxed_slice(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayPtr")
            .field("items", &self.as_slice())
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Default)]
    struct DropCounter(Option<Arc<AtomicUsize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            if let Some(counter) = &self.0 {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_new_default_constructs() {
        let p = ArrayPtr::<u32>::new(5);
        assert_eq!(p.len(), 5);
        assert_eq!(p.as_slice(), &[0, 0, 0, 0, 0]);

        let s = ArrayPtr::<String>::new(2);
        assert!(s.as_slice().iter().all(String::is_empty));
    }

    #[test]
    fn test_zero_length_is_empty() {
        let p = ArrayPtr::<u64>::new(0);
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
        assert!(ArrayPtr::<u64>::try_new(0).unwrap().is_empty());
        assert!(ArrayPtr::<u64>::default().is_empty());
    }

    #[test]
    fn test_offset_access() {
        let mut p = ArrayPtr::<i32>::new(3);
        p[0] = 10;
        p[2] = 30;
        assert_eq!(p[0], 10);
        assert_eq!(p[1], 0);
        assert_eq!(p[2], 30);
        p.as_mut_slice()[1] = 20;
        assert_eq!(p.into_vec(), vec![10, 20, 30]);
    }

    #[test]
    #[should_panic]
    fn test_offset_access_past_end() {
        let p = ArrayPtr::<i32>::new(3);
        let _ = p[3];
    }

    #[test]
    fn test_swap_exchanges_storage() {
        let mut a = ArrayPtr::from(vec![1, 2, 3]);
        let mut b = ArrayPtr::from(vec![9]);
        let a_ptr = a.as_slice().as_ptr();
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[9]);
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_eq!(b.as_slice().as_ptr(), a_ptr);
    }

    #[test]
    fn test_take_leaves_empty() {
        let mut a = ArrayPtr::from(vec![1, 2]);
        let b = a.take();
        assert!(a.is_empty());
        assert_eq!(&*b.release(), &[1, 2]);
    }

    #[test]
    fn test_try_new_reports_allocation_failure() {
        let err = ArrayPtr::<u64>::try_new(usize::MAX / 2).unwrap_err();
        assert!(!err.is_out_of_range());
        assert!(err.to_string().contains("failed to allocate"));
    }

    #[test]
    fn test_drop_releases_every_element() {
        let counter = Arc::new(AtomicUsize::new(0));
        {
            let mut p = ArrayPtr::<DropCounter>::new(4);
            for i in 0..p.len() {
                p[i] = DropCounter(Some(counter.clone()));
            }
            assert_eq!(counter.load(Ordering::SeqCst), 0);
        }
        assert_eq!(counter.load(Ordering::SeqCst), 4);
    }
}
