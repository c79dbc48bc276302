//! A minimal growable array built on top of an exclusively owned fixed-length block.
//!
//! [`SimpleVector<T>`] keeps a logical size next to a backing [`ArrayPtr<T>`] whose
//! length is the capacity. Growth always goes through the same path: allocate a new
//! block of `max(required, 2 * capacity)` default-constructed slots, move the live
//! prefix across and swap the blocks.
//!
//! ```
//! use simplevec::{SimpleVector, reserve, simple_vector};
//!
//! let mut v = SimpleVector::with_reservation(reserve(8));
//! assert_eq!((v.len(), v.capacity()), (0, 8));
//!
//! v.push_back(1);
//! v.push_back(3);
//! v.insert(1, 2);
//! assert_eq!(v, simple_vector![1, 2, 3]);
//! assert!(v.at(3).is_err());
//! ```

pub mod into_iter;
pub mod reservation;
pub mod vector;

pub use into_iter::IntoIter;
pub use reservation::{Reservation, reserve};
pub use simplevec_array_ptr::ArrayPtr;
pub use vector::SimpleVector;

/// Creates a [`SimpleVector`] from a list of elements, or from a value and a count.
///
/// The list form produces a vector whose capacity equals the number of elements.
///
/// ```
/// use simplevec::simple_vector;
///
/// let v = simple_vector![1, 2, 3];
/// assert_eq!((v.len(), v.capacity()), (3, 3));
///
/// let w = simple_vector![String::from("x"); 2];
/// assert_eq!(w, ["x", "x"].map(String::from));
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVector::from_elem($n, &$elem)
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($elem),+])
    };
}
