pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_index {
    ($op:expr, $index:expr, $size:expr) => {{
        $crate::result::verify_index($op, $index, $size)?;
    }};
}

/// Verifies that `index` addresses one of the `size` logically present elements.
#[inline]
pub fn verify_index(op: &'static str, index: usize, size: usize) -> Result<()> {
    if index < size {
        Ok(())
    } else {
        out_of_range(op, index, size)
    }
}

#[cold]
pub fn out_of_range(op: &'static str, index: usize, size: usize) -> Result<()> {
    Err(crate::error::Error::out_of_range(op, index, size))
}
