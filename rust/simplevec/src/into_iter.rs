use crate::SimpleVector;

/// By-value iterator over the logical content of a [`SimpleVector`].
///
/// Filler slots past the logical size are released when the iterator is created;
/// elements not consumed by the iterator are dropped with it.
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> std::iter::FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_vec().into_iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::simple_vector;

    #[test]
    fn into_iter_yields_logical_elements_only() {
        let mut v = simple_vector![1, 2, 3, 4];
        v.truncate(2);
        assert_eq!(v.capacity(), 4);
        let collected: Vec<_> = v.into_iter().collect();
        assert_eq!(collected, vec![1, 2]);
    }

    #[test]
    fn into_iter_from_both_ends() {
        let v = simple_vector![String::from("a"), String::from("b"), String::from("c")];
        let mut it = v.into_iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next_back().as_deref(), Some("c"));
        assert_eq!(it.next().as_deref(), Some("a"));
        assert_eq!(it.len(), 1);
    }
}
