/// A request to pre-size a new [`SimpleVector`](crate::SimpleVector) without
/// materializing any elements.
///
/// The request is consumed by [`SimpleVector::with_reservation`](crate::SimpleVector::with_reservation)
/// (or the equivalent `From` conversion). It is neither `Copy` nor `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct Reservation {
    capacity: usize,
}

impl Reservation {
    pub fn new(capacity: usize) -> Reservation {
        Reservation { capacity }
    }

    /// Returns the requested capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Creates a [`Reservation`] for `capacity` elements.
pub fn reserve(capacity: usize) -> Reservation {
    Reservation::new(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_carries_capacity() {
        assert_eq!(reserve(17).capacity(), 17);
        assert_eq!(reserve(0), Reservation::new(0));
    }
}
